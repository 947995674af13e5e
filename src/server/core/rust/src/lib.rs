/* src/server/core/rust/src/lib.rs */

pub mod config;
pub mod shell;
pub mod site;

// Re-exports for ergonomic use
pub use config::{
  ConfigError, ConfigFormat, ConfigSource, ServerOptions, SiteConfig, load_site_config,
};
pub use homepage_engine as engine;
pub use site::{HomeRoute, PageRequest, Site, classify};
