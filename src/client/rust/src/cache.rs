/* src/client/rust/src/cache.rs */

// Request cache in front of a ConfigClient: concurrent fetches for one key
// share a single request, successes are memoised, failures are not.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::FutureExt;
use futures_util::future::Shared;
use homepage_engine::ConfigurationPage;
use tracing::trace;

use crate::BoxFuture;
use crate::client::{ConfigClient, FetchResult};

type Pending = Shared<BoxFuture<FetchResult>>;

#[derive(Default)]
struct Entries {
  settled: HashMap<String, ConfigurationPage>,
  /// key -> (request id, shared request)
  in_flight: HashMap<String, (u64, Pending)>,
  next_id: u64,
}

pub struct QueryCache<C> {
  inner: C,
  entries: Arc<Mutex<Entries>>,
}

fn lock(entries: &Mutex<Entries>) -> MutexGuard<'_, Entries> {
  entries.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<C: ConfigClient> QueryCache<C> {
  pub fn new(inner: C) -> Self {
    Self { inner, entries: Arc::new(Mutex::new(Entries::default())) }
  }

  /// Forget a memoised page so the next fetch goes to the network.
  pub fn invalidate(&self, path: &str) {
    lock(&self.entries).settled.remove(path);
  }

  pub fn is_cached(&self, path: &str) -> bool {
    lock(&self.entries).settled.contains_key(path)
  }
}

impl<C: ConfigClient> ConfigClient for QueryCache<C> {
  fn fetch(&self, path: &str) -> BoxFuture<FetchResult> {
    let (id, pending) = {
      let mut entries = lock(&self.entries);
      if let Some(page) = entries.settled.get(path) {
        trace!(path, "configuration cache hit");
        let page = page.clone();
        return Box::pin(async move { Ok(page) });
      }
      match entries.in_flight.get(path) {
        Some((id, pending)) => {
          trace!(path, "joining in-flight configuration request");
          (*id, pending.clone())
        }
        None => {
          let id = entries.next_id;
          entries.next_id += 1;
          let pending = self.inner.fetch(path).shared();
          entries.in_flight.insert(path.to_string(), (id, pending.clone()));
          (id, pending)
        }
      }
    };

    let entries = Arc::clone(&self.entries);
    let key = path.to_string();
    Box::pin(async move {
      let result = pending.await;
      let mut entries = lock(&entries);
      if entries.in_flight.get(&key).is_some_and(|(current, _)| *current == id) {
        entries.in_flight.remove(&key);
        if let Ok(page) = &result {
          entries.settled.insert(key, page.clone());
        }
      }
      result
    })
  }
}
