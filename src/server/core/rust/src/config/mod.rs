/* src/server/core/rust/src/config/mod.rs */

mod loader;
mod types;


pub use loader::{ConfigSource, load_site_config};
pub use types::{ConfigError, ConfigFormat, ServerOptions, SiteConfig};
