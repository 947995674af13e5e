/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use homepage_server::{HomeRoute, PageRequest, Site, classify};
use tracing::debug;

use crate::error::PageError;

pub(super) async fn handle_home(State(site): State<Arc<Site>>) -> Response {
  match site.home_route() {
    HomeRoute::Redirect(target) => {
      (StatusCode::FOUND, [(header::LOCATION, target)]).into_response()
    }
    HomeRoute::DefaultText(text) => text.into_response(),
    HomeRoute::Page => resolve(&site, "/").into_response(),
  }
}

pub(super) async fn handle_page(State(site): State<Arc<Site>>, uri: Uri) -> Response {
  resolve(&site, uri.path()).into_response()
}

/// `{path}.json` answers with the page document, anything else with the shell.
fn resolve(site: &Site, path: &str) -> Result<Response, PageError> {
  match classify(path) {
    PageRequest::Json(page_path) => {
      let page = site.resolve_page(page_path).ok_or_else(|| {
        debug!(path = page_path, "no page configured");
        PageError::NotFound(page_path.to_string())
      })?;
      Ok(Json(page).into_response())
    }
    PageRequest::Document => Ok(Html(site.index_html().to_string()).into_response()),
  }
}
