/* src/server/core/rust/src/site.rs */

use homepage_engine::ConfigurationPage;

use crate::config::{ServerOptions, SiteConfig};
use crate::shell::{DEFAULT_HOMEPAGE, load_index};

pub const JSON_SUFFIX: &str = ".json";

/// What `/` answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeRoute {
  /// 302 to the configured default page.
  Redirect(String),
  /// Built-in plain-text homepage.
  DefaultText(&'static str),
  /// Treat `/` like any other page path.
  Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest<'a> {
  /// `{path}.json`: the configuration document for `path`.
  Json(&'a str),
  /// Anything else gets the page shell.
  Document,
}

/// Split a request path into a configuration request or a document request.
pub fn classify(path: &str) -> PageRequest<'_> {
  match path.strip_suffix(JSON_SUFFIX) {
    Some(page_path) => PageRequest::Json(page_path),
    None => PageRequest::Document,
  }
}

/// Framework-agnostic site state. Adapter crates build their routers from it.
pub struct Site {
  config: SiteConfig,
  options: ServerOptions,
  index_html: String,
}

impl Site {
  pub fn new(config: SiteConfig, options: ServerOptions) -> Self {
    let index_html = load_index(options.dist_dir.as_deref());
    Self { config, options, index_html }
  }

  pub fn config(&self) -> &SiteConfig {
    &self.config
  }

  pub fn options(&self) -> &ServerOptions {
    &self.options
  }

  pub fn index_html(&self) -> &str {
    &self.index_html
  }

  /// First page whose path matches exactly; the empty path means `/`.
  pub fn resolve_page(&self, path: &str) -> Option<&ConfigurationPage> {
    let path = if path.is_empty() { "/" } else { path };
    self.config.pages.iter().find(|page| page.path == path)
  }

  pub fn home_route(&self) -> HomeRoute {
    match self.config.default_page.as_deref() {
      Some(target) if !target.is_empty() => HomeRoute::Redirect(target.to_string()),
      _ if self.options.default_homepage => HomeRoute::DefaultText(DEFAULT_HOMEPAGE),
      _ => HomeRoute::Page,
    }
  }
}
