/* src/server/core/rust/src/config/types.rs */

use std::fmt;
use std::path::{Path, PathBuf};

use homepage_engine::ConfigurationPage;
use serde::Deserialize;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

/// Site document: every page the service answers for.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
  /// When set, `/` redirects here.
  #[serde(default)]
  pub default_page: Option<String>,
  #[serde(default)]
  pub pages: Vec<ConfigurationPage>,
}

/// Process-level switches, normally read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerOptions {
  pub listen: String,
  /// Production disables permissive CORS.
  pub production: bool,
  /// Serve the built-in text at `/` when no default page is configured.
  pub default_homepage: bool,
  /// Built front-end assets; `index.html` inside is the page shell.
  pub dist_dir: Option<PathBuf>,
}

impl Default for ServerOptions {
  fn default() -> Self {
    Self {
      listen: DEFAULT_LISTEN.to_string(),
      production: false,
      default_homepage: true,
      dist_dir: None,
    }
  }
}

impl ServerOptions {
  /// `LISTEN`, `ENV=production`, `DISABLE_DEFAULT_HOMEPAGE=true`, `DIST_DIR`.
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let defaults = Self::default();
    Self {
      listen: lookup("LISTEN").filter(|v| !v.is_empty()).unwrap_or(defaults.listen),
      production: lookup("ENV").as_deref() == Some("production"),
      default_homepage: lookup("DISABLE_DEFAULT_HOMEPAGE").as_deref() != Some("true"),
      dist_dir: lookup("DIST_DIR").filter(|v| !v.is_empty()).map(PathBuf::from),
    }
  }
}

/// Site document syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
  Toml,
  Yaml,
}

impl ConfigFormat {
  /// Format implied by a file extension, if any.
  pub fn from_path(path: &Path) -> Option<Self> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("toml") {
      Some(Self::Toml)
    } else if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
      Some(Self::Yaml)
    } else {
      None
    }
  }
}

impl fmt::Display for ConfigFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Toml => "TOML",
      Self::Yaml => "YAML",
    })
  }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("no config found (set CONFIG or CONFIG_FILE)")]
  Missing,
  #[error("config unreadable: {}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to parse {format} config from {origin}")]
  Parse {
    origin: String,
    format: ConfigFormat,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },
}
