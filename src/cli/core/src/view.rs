/* src/cli/core/src/view.rs */

use anyhow::{Result, bail};
use homepage_client::{FixedPathResolver, HttpConfigClient, QueryCache, RenderStateMachine};
use homepage_engine::{RenderState, project, render_html};
use tracing::debug;

use crate::present::render_terminal;
use crate::ui;

/// Drive the machine for one path until it settles.
pub(crate) async fn load_state(api_base: &str, path: &str) -> RenderState {
  let machine = RenderStateMachine::new(QueryCache::new(HttpConfigClient::new(api_base)));
  debug!(api_base, path, "loading page");
  machine.run(FixedPathResolver::new(path)).await;
  machine.settled(path).await
}

pub(crate) async fn run_view(api_base: &str, path: &str, html: bool, details: bool) -> Result<()> {
  let state = load_state(api_base, path).await;
  let layout = project(&state);

  if html {
    ui::lines(&[render_html(&layout)]);
  } else {
    ui::banner(&format!("view {path}"));
    ui::lines(&render_terminal(&layout, details));
    ui::blank();
  }

  if let RenderState::Error(failure) = &state {
    ui::fail(&failure.summary());
    bail!("configuration for {path:?} failed: {}", failure.summary());
  }
  Ok(())
}
