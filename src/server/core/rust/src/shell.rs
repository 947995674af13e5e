/* src/server/core/rust/src/shell.rs */

use std::path::Path;

use tracing::{debug, warn};

/// Plain-text answer for `/` when no default page is configured.
pub const DEFAULT_HOMEPAGE: &str = "\
homepage

This server is running, but no default page is configured.

Add pages to the site configuration (CONFIG or CONFIG_FILE), then either
open one of their paths directly or set `default_page` to redirect here.

  default_page = \"/home\"

  [[pages]]
  path = \"/home\"
  title = \"Home\"

Set DISABLE_DEFAULT_HOMEPAGE=true to hide this message.
";

/// Page shell used when no built front-end is available.
/// The client resolves its own path and fetches `{path}.json`.
pub const INDEX_SHELL: &str = "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
<title>homepage</title></head><body><div id=\"app\"></div>\
<noscript>This page needs JavaScript to load its configuration.</noscript>\
</body></html>";

/// Read `index.html` from the built front-end, falling back to the built-in shell.
pub fn load_index(dist_dir: Option<&Path>) -> String {
  let Some(dir) = dist_dir else {
    return INDEX_SHELL.to_string();
  };
  let path = dir.join("index.html");
  match std::fs::read_to_string(&path) {
    Ok(html) => {
      debug!(path = %path.display(), "loaded page shell");
      html
    }
    Err(e) => {
      warn!(path = %path.display(), "failed reading index.html, using built-in shell: {e}");
      INDEX_SHELL.to_string()
    }
  }
}
