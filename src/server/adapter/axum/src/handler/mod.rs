/* src/server/adapter/axum/src/handler/mod.rs */

mod page;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::{MethodRouter, get};
use homepage_server::Site;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub(crate) fn build_router(site: Site) -> Router {
  let production = site.options().production;
  let dist_dir = site.options().dist_dir.clone();
  let state = Arc::new(site);

  // Everything except `/` resolves as a page, after static assets when a
  // built front-end is configured.
  let pages: MethodRouter = get(page::handle_page).with_state(Arc::clone(&state));
  let mut router = Router::new().route("/", get(page::handle_home)).with_state(state);
  router = match dist_dir {
    Some(dir) => router.fallback_service(ServeDir::new(dir).fallback(pages)),
    None => router.fallback_service(pages),
  };

  router = router.layer(TraceLayer::new_for_http());
  if !production {
    router = router.layer(CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]));
  }
  router
}
