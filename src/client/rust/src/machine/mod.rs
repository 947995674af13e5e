/* src/client/rust/src/machine/mod.rs */

//! Three-state render machine keyed by path.
//!
//! Each path resolution issues a ticket and moves the state to `Loading`.
//! A fetch result is applied only while its ticket is still the latest one,
//! so a slow response for an old path never overwrites a newer path's state.
//! The machine is the only writer; readers subscribe to snapshots.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use homepage_engine::{LayoutDescriptor, RenderState, project};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::client::{ConfigClient, FetchResult};
use crate::resolver::PathResolver;

/// Identifies one path resolution. Later resolutions get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
  pub path: String,
  pub ticket: Ticket,
  pub state: RenderState,
}

pub struct RenderStateMachine<C> {
  client: Arc<C>,
  tx: Arc<watch::Sender<Snapshot>>,
}

impl<C> Clone for RenderStateMachine<C> {
  fn clone(&self) -> Self {
    Self { client: Arc::clone(&self.client), tx: Arc::clone(&self.tx) }
  }
}

impl<C: ConfigClient> RenderStateMachine<C> {
  pub fn new(client: C) -> Self {
    let initial = Snapshot { path: String::new(), ticket: Ticket(0), state: RenderState::Loading };
    let (tx, _) = watch::channel(initial);
    Self { client: Arc::new(client), tx: Arc::new(tx) }
  }

  pub fn snapshot(&self) -> Snapshot {
    self.tx.borrow().clone()
  }

  pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
    self.tx.subscribe()
  }

  /// Project the current state into renderable sections.
  pub fn layout(&self) -> LayoutDescriptor {
    project(&self.tx.borrow().state)
  }

  /// Start a resolution for `path`: state becomes `Loading` and any earlier
  /// ticket is superseded.
  pub fn begin(&self, path: &str) -> Ticket {
    let mut ticket = Ticket(0);
    self.tx.send_modify(|snap| {
      ticket = Ticket(snap.ticket.0 + 1);
      *snap = Snapshot { path: path.to_string(), ticket, state: RenderState::Loading };
    });
    debug!(path, ticket = ticket.0, "render state -> loading");
    ticket
  }

  /// Apply a fetch result. Returns false when the ticket is stale or the
  /// state already settled, in which case nothing changes.
  pub fn complete(&self, ticket: Ticket, result: FetchResult) -> bool {
    let state = RenderState::from_result(result);
    let name = state.name();
    let applied = self.tx.send_if_modified(|snap| {
      if snap.ticket != ticket || snap.state.is_terminal() {
        return false;
      }
      snap.state = state;
      true
    });
    if applied {
      debug!(ticket = ticket.0, "render state -> {name}");
    } else {
      debug!(ticket = ticket.0, "discarding stale {name} result");
    }
    applied
  }

  /// Resolve `path` in the background. The handle yields whether the result
  /// was applied; dropping it does not cancel the fetch.
  pub fn navigate(&self, path: impl Into<String>) -> JoinHandle<bool> {
    let path = path.into();
    let ticket = self.begin(&path);
    let fetch = self.client.fetch(&path);
    let machine = self.clone();
    tokio::spawn(async move {
      let result = fetch.await;
      machine.complete(ticket, result)
    })
  }

  /// Resolve `path` inline, awaiting the fetch.
  pub async fn load(&self, path: &str) -> bool {
    let ticket = self.begin(path);
    let result = self.client.fetch(path).await;
    self.complete(ticket, result)
  }

  /// Drive the machine from a resolver: one resolution for the initial path,
  /// then one per navigation event, until the resolver ends.
  pub async fn run<R: PathResolver>(&self, mut resolver: R) {
    self.navigate(resolver.current());
    while let Some(path) = resolver.next_path().await {
      self.navigate(path);
    }
  }

  /// Wait until `path` is the current path and has reached a terminal state.
  pub async fn settled(&self, path: &str) -> RenderState {
    let mut rx = self.tx.subscribe();
    match rx.wait_for(|snap| snap.path == path && snap.state.is_terminal()).await {
      Ok(snap) => snap.state.clone(),
      // Unreachable while `self` holds the sender.
      Err(_) => RenderState::Loading,
    }
  }
}
