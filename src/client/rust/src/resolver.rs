/* src/client/rust/src/resolver.rs */

//! Sources of the "current path" used as the fetch key.
//! Every resolver starts at the empty string, before the host has reported a path.

use std::future::Future;

use tokio::sync::mpsc;

pub trait PathResolver: Send {
  /// Path resolved so far. Empty until the first navigation.
  fn current(&self) -> &str;

  /// Wait for the next navigation event. `None` once no more can arrive.
  fn next_path(&mut self) -> impl Future<Output = Option<String>> + Send;
}

/// Resolves to a single known path after the initial empty mount.
pub struct FixedPathResolver {
  path: String,
  current: String,
}

impl FixedPathResolver {
  pub fn new(path: impl Into<String>) -> Self {
    Self { path: path.into(), current: String::new() }
  }
}

impl PathResolver for FixedPathResolver {
  fn current(&self) -> &str {
    &self.current
  }

  async fn next_path(&mut self) -> Option<String> {
    if self.current == self.path {
      return None;
    }
    self.current = self.path.clone();
    Some(self.current.clone())
  }
}

/// Handle the host side uses to report navigations.
#[derive(Clone)]
pub struct Navigator {
  tx: mpsc::UnboundedSender<String>,
}

impl Navigator {
  /// Report a navigation. Returns false when the resolver is gone.
  pub fn navigate(&self, path: impl Into<String>) -> bool {
    self.tx.send(path.into()).is_ok()
  }
}

/// Yields each reported navigation exactly once, in order.
pub struct NavigationResolver {
  rx: mpsc::UnboundedReceiver<String>,
  current: String,
}

pub fn navigation() -> (Navigator, NavigationResolver) {
  let (tx, rx) = mpsc::unbounded_channel();
  (Navigator { tx }, NavigationResolver { rx, current: String::new() })
}

impl PathResolver for NavigationResolver {
  fn current(&self) -> &str {
    &self.current
  }

  async fn next_path(&mut self) -> Option<String> {
    let path = self.rx.recv().await?;
    self.current.clone_from(&path);
    Some(path)
  }
}
