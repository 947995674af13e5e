/* src/server/engine/rust/src/search.rs */

use crate::model::SearchConfig;

/// Key that submits the search box.
pub const CONFIRM_KEY: &str = "Enter";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
  /// Replace the current page.
  CurrentContext,
  /// Open a new tab/window.
  NewContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
  pub url: String,
  pub target: NavigationTarget,
}

/// Resolve a submitted query against the search template.
///
/// Returns `None` when search is absent or disabled, the query is empty, or
/// there is no template. The query replaces the first `%s` only; holding the
/// secondary modifier opens the result in a new context.
pub fn submit_search(
  search: Option<&SearchConfig>,
  query: &str,
  modifier: bool,
) -> Option<Navigation> {
  let search = search.filter(|s| s.enabled)?;
  if query.is_empty() {
    return None;
  }
  let template = search.url.as_deref().filter(|t| !t.is_empty())?;
  let url = template.replacen("%s", query, 1);
  let target = if modifier { NavigationTarget::NewContext } else { NavigationTarget::CurrentContext };
  Some(Navigation { url, target })
}

/// Key handler for the search input: only the confirm key submits.
pub fn handle_key(
  search: Option<&SearchConfig>,
  key: &str,
  value: &str,
  modifier: bool,
) -> Option<Navigation> {
  if key != CONFIRM_KEY {
    return None;
  }
  submit_search(search, value, modifier)
}
