/* src/cli/core/src/search.rs */

use anyhow::{Context, Result};
use homepage_client::{ConfigClient, HttpConfigClient};
use homepage_engine::{Navigation, NavigationTarget, submit_search};

use crate::ui;

pub(crate) async fn resolve_search(
  api_base: &str,
  path: &str,
  query: &str,
  new_tab: bool,
) -> Result<Option<Navigation>> {
  let page = HttpConfigClient::new(api_base)
    .fetch(path)
    .await
    .with_context(|| format!("failed to load configuration for {path:?}"))?;
  Ok(submit_search(page.search.as_ref(), query, new_tab))
}

pub(crate) async fn run_search(api_base: &str, path: &str, query: &str, new_tab: bool) -> Result<()> {
  match resolve_search(api_base, path, query, new_tab).await? {
    Some(Navigation { url, target: NavigationTarget::CurrentContext }) => ui::arrow(&url),
    Some(Navigation { url, target: NavigationTarget::NewContext }) => {
      ui::arrow(&format!("{url} (new tab)"));
    }
    None => ui::warn("nothing to do: search is disabled, has no template, or the query is empty"),
  }
  Ok(())
}
