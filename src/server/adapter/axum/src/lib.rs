/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use homepage_server::Site;
use tracing::info;

/// Re-export the server core for convenience
pub use homepage_server;

/// Extension trait that converts a `Site` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(self, addr: &str) -> impl std::future::Future<Output = std::io::Result<()>> + Send;
}

impl IntoAxumRouter for Site {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self)
  }

  async fn serve(self, addr: &str) -> std::io::Result<()> {
    let pages = self.config().pages.len();
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!(pages, "running on http://{local_addr}");
    axum::serve(listener, router).await
  }
}
