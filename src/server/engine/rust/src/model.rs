/* src/server/engine/rust/src/model.rs */

//! Configuration document served per path.
//! Every field is optional on the wire: decoding only fails on structurally
//! invalid JSON or on a present field of the wrong type.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Root document for a single path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationPage {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  /// Pathname this document answers for (prefixed with `/`). Informational.
  #[serde(default, deserialize_with = "null_as_default")]
  pub path: String,
  #[serde(default, deserialize_with = "null_as_default")]
  pub inject: PageInject,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub search: Option<SearchConfig>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub widgets: Option<Vec<WidgetConfig>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub links: Option<Vec<LinkConfig>>,
}

/// Raw content reserved for page-level injection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInject {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub css: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub js: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub html: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
  #[serde(default, deserialize_with = "null_as_default")]
  pub enabled: bool,
  /// Engine name shown as "Search with {label}".
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,
  /// Query template; the first `%s` is replaced with the user's input.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
  /// ID of a built-in widget kind. Not interpreted yet; every widget renders as a frame.
  #[serde(default, deserialize_with = "null_as_default")]
  pub builtin: String,
  /// Frame source.
  #[serde(default, deserialize_with = "null_as_default")]
  pub inject: String,
  /// Opaque widget parameters, passed through untouched.
  #[serde(default, deserialize_with = "null_as_default")]
  pub kv: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  /// Hex accent color, e.g. `#ff0000`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub color: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub icon: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
}

impl ConfigurationPage {
  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }

  pub fn widgets(&self) -> &[WidgetConfig] {
    self.widgets.as_deref().unwrap_or_default()
  }

  pub fn links(&self) -> &[LinkConfig] {
    self.links.as_deref().unwrap_or_default()
  }

  /// Search config, only when it is switched on.
  pub fn enabled_search(&self) -> Option<&SearchConfig> {
    self.search.as_ref().filter(|s| s.enabled)
  }
}

impl LinkConfig {
  /// Host (plus non-default port) of `url`, or empty when there is no parseable URL.
  pub fn hostname(&self) -> String {
    let Some(raw) = self.url.as_deref() else {
      return String::new();
    };
    let Ok(parsed) = url::Url::parse(raw) else {
      return String::new();
    };
    match (parsed.host_str(), parsed.port()) {
      (Some(host), Some(port)) => format!("{host}:{port}"),
      (Some(host), None) => host.to_string(),
      _ => String::new(),
    }
  }
}

/// Treat an explicit JSON `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
