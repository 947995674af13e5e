/* src/cli/core/src/serve.rs */

use std::path::PathBuf;

use anyhow::{Context, Result};
use homepage_server::{ConfigSource, ServerOptions, Site, load_site_config};
use homepage_server_axum::IntoAxumRouter;

use crate::ui;

pub(crate) async fn run_serve(
  config: Option<PathBuf>,
  listen: Option<String>,
  dist: Option<PathBuf>,
) -> Result<()> {
  let source = match config {
    Some(path) => ConfigSource::File(path),
    None => ConfigSource::from_env().context("unable to start")?,
  };
  let site_config = load_site_config(&source).context("unable to start")?;

  let mut options = ServerOptions::from_env();
  if let Some(listen) = listen {
    options.listen = listen;
  }
  if let Some(dist) = dist {
    options.dist_dir = Some(dist);
  }

  ui::banner("serve");
  ui::ok(&format!("{} pages loaded", site_config.pages.len()));
  if let Some(target) = &site_config.default_page {
    ui::detail(&format!("/ redirects to {target}"));
  }
  if let Some(dir) = &options.dist_dir {
    ui::detail(&format!("assets from {}", dir.display()));
  }
  if !options.production {
    ui::detail("development mode: permissive CORS");
  }

  let listen = options.listen.clone();
  ui::arrow(&format!("http://{listen}"));
  Site::new(site_config, options)
    .serve(&listen)
    .await
    .with_context(|| format!("failed to serve on {listen}"))
}
