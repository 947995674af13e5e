/* src/client/rust/src/client.rs */

use std::sync::Arc;

use homepage_engine::{ConfigurationPage, Failure};
use tracing::{debug, warn};

use crate::BoxFuture;

pub type FetchResult = Result<ConfigurationPage, Failure>;

/// Fetch-by-path capability. One call performs at most one request; no retry.
pub trait ConfigClient: Send + Sync + 'static {
  fn fetch(&self, path: &str) -> BoxFuture<FetchResult>;
}

impl<C: ConfigClient + ?Sized> ConfigClient for Arc<C> {
  fn fetch(&self, path: &str) -> BoxFuture<FetchResult> {
    (**self).fetch(path)
  }
}

/// Resource address for a path. The path is not validated or escaped.
pub fn config_url(base: &str, path: &str) -> String {
  format!("{base}{path}.json")
}

/// Fetches `{base}{path}.json` over HTTP.
#[derive(Clone)]
pub struct HttpConfigClient {
  http: reqwest::Client,
  base: String,
}

impl HttpConfigClient {
  pub fn new(base: impl Into<String>) -> Self {
    Self::with_client(reqwest::Client::new(), base)
  }

  pub fn with_client(http: reqwest::Client, base: impl Into<String>) -> Self {
    Self { http, base: base.into() }
  }
}

impl ConfigClient for HttpConfigClient {
  fn fetch(&self, path: &str) -> BoxFuture<FetchResult> {
    let url = config_url(&self.base, path);
    let http = self.http.clone();
    Box::pin(async move {
      debug!(%url, "fetching page configuration");
      let result = request(&http, &url).await;
      if let Err(ref failure) = result {
        warn!(%url, status = failure.status(), "configuration fetch failed: {failure}");
      }
      result
    })
  }
}

async fn request(http: &reqwest::Client, url: &str) -> FetchResult {
  let resp = http.get(url).send().await.map_err(|e| Failure::from_error(&e))?;

  let status = resp.status();
  if status != reqwest::StatusCode::OK {
    // The status is the failure; an unreadable body only degrades its detail.
    let body = match resp.text().await {
      Ok(body) => body,
      Err(e) => format!("failed to read response body: {}", Failure::from_error(&e).detail()),
    };
    return Err(Failure::http_status(status.as_u16(), body));
  }

  resp.json::<ConfigurationPage>().await.map_err(|e| Failure::from_error(&e))
}
