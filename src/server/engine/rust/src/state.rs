/* src/server/engine/rust/src/state.rs */

use std::sync::Arc;

use crate::failure::Failure;
use crate::model::ConfigurationPage;

/// What the page shows for the current path.
/// Every path starts in `Loading` and moves to exactly one terminal state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RenderState {
  #[default]
  Loading,
  Error(Failure),
  Ready(Arc<ConfigurationPage>),
}

impl RenderState {
  pub fn from_result(result: Result<ConfigurationPage, Failure>) -> Self {
    match result {
      Ok(page) => Self::Ready(Arc::new(page)),
      Err(failure) => Self::Error(failure),
    }
  }

  pub fn is_terminal(&self) -> bool {
    !matches!(self, Self::Loading)
  }

  pub fn name(&self) -> &'static str {
    match self {
      Self::Loading => "loading",
      Self::Error(_) => "error",
      Self::Ready(_) => "ready",
    }
  }

  pub fn page(&self) -> Option<&ConfigurationPage> {
    match self {
      Self::Ready(page) => Some(page),
      _ => None,
    }
  }

  pub fn failure(&self) -> Option<&Failure> {
    match self {
      Self::Error(failure) => Some(failure),
      _ => None,
    }
  }
}
