/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Plain-text error answers of the configuration service.
/// Bodies stay plain text: clients surface them verbatim as diagnostics.
#[derive(Debug)]
pub(crate) enum PageError {
  NotFound(String),
}

impl IntoResponse for PageError {
  fn into_response(self) -> Response {
    match self {
      Self::NotFound(path) => (StatusCode::NOT_FOUND, format!("page not found: {path}")).into_response(),
    }
  }
}
