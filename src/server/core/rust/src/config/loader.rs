/* src/server/core/rust/src/config/loader.rs */

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::{ConfigError, ConfigFormat, SiteConfig};

type ParseError = Box<dyn std::error::Error + Send + Sync>;

/// Where the site document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
  /// Document content itself (the `CONFIG` variable).
  Inline(String),
  /// Path to a document (the `CONFIG_FILE` variable or `--config`).
  File(PathBuf),
}

impl ConfigSource {
  /// Inline content wins over a file path; empty values count as unset.
  pub fn from_vars(
    content: Option<String>,
    file: Option<String>,
  ) -> Result<ConfigSource, ConfigError> {
    if let Some(content) = content.filter(|c| !c.is_empty()) {
      return Ok(ConfigSource::Inline(content));
    }
    match file.filter(|f| !f.is_empty()) {
      Some(file) => Ok(ConfigSource::File(PathBuf::from(file))),
      None => Err(ConfigError::Missing),
    }
  }

  pub fn from_env() -> Result<ConfigSource, ConfigError> {
    Self::from_vars(std::env::var("CONFIG").ok(), std::env::var("CONFIG_FILE").ok())
  }

  /// Explicit format, known only for files with a recognised extension.
  pub fn format(&self) -> Option<ConfigFormat> {
    match self {
      Self::Inline(_) => None,
      Self::File(path) => ConfigFormat::from_path(path),
    }
  }

  fn origin(&self) -> String {
    match self {
      Self::Inline(_) => "CONFIG".to_string(),
      Self::File(path) => path.display().to_string(),
    }
  }
}

pub fn load_site_config(source: &ConfigSource) -> Result<SiteConfig, ConfigError> {
  let content = match source {
    ConfigSource::Inline(content) => content.clone(),
    ConfigSource::File(path) => std::fs::read_to_string(path)
      .map_err(|source| ConfigError::Read { path: path.clone(), source })?,
  };
  let parse_error = |format: ConfigFormat, err: ParseError| ConfigError::Parse {
    origin: source.origin(),
    format,
    source: err,
  };

  let config = match source.format() {
    Some(format) => parse(&content, format).map_err(|err| parse_error(format, err))?,
    // Unlabelled documents are tried as TOML, then as YAML.
    None => match parse(&content, ConfigFormat::Toml) {
      Ok(config) => config,
      Err(toml_err) => parse(&content, ConfigFormat::Yaml).map_err(|yaml_err| {
        debug!(error = %yaml_err, "config is not YAML either");
        parse_error(ConfigFormat::Toml, toml_err)
      })?,
    },
  };

  let mut seen = HashSet::new();
  for page in &config.pages {
    if !page.path.starts_with('/') {
      warn!(path = %page.path, "page path should start with '/'");
    }
    if !seen.insert(page.path.as_str()) {
      warn!(path = %page.path, "duplicate page path, only the first one is served");
    }
  }
  debug!(pages = config.pages.len(), default_page = ?config.default_page, "site config loaded");
  Ok(config)
}

fn parse(content: &str, format: ConfigFormat) -> Result<SiteConfig, ParseError> {
  match format {
    ConfigFormat::Toml => Ok(toml::from_str(content)?),
    ConfigFormat::Yaml => Ok(serde_yaml::from_str(content)?),
  }
}
