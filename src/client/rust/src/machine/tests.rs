/* src/client/rust/src/machine/tests.rs */

use std::collections::HashMap;
use std::sync::Mutex;

use homepage_engine::{ConfigurationPage, Failure, LayoutDescriptor, Section};
use tokio::sync::oneshot;

use super::*;
use crate::BoxFuture;
use crate::resolver::{FixedPathResolver, navigation};

fn page(path: &str) -> ConfigurationPage {
  ConfigurationPage { path: path.to_string(), ..Default::default() }
}

fn ready_path(state: &RenderState) -> Option<&str> {
  state.page().map(|p| p.path.as_str())
}

/// Answers every path from a fixed table; unknown paths are a 404.
struct TableClient(HashMap<String, ConfigurationPage>);

impl TableClient {
  fn new(paths: &[&str]) -> Self {
    Self(paths.iter().map(|p| (p.to_string(), page(p))).collect())
  }
}

impl ConfigClient for TableClient {
  fn fetch(&self, path: &str) -> BoxFuture<FetchResult> {
    let result = self.0.get(path).cloned().ok_or_else(|| Failure::http_status(404, "not found"));
    Box::pin(async move { result })
  }
}

/// Each path's fetch blocks until the test releases it.
struct GatedClient {
  gates: Mutex<HashMap<String, oneshot::Receiver<FetchResult>>>,
}

fn gated(paths: &[&str]) -> (GatedClient, HashMap<String, oneshot::Sender<FetchResult>>) {
  let mut gates = HashMap::new();
  let mut releases = HashMap::new();
  for path in paths {
    let (tx, rx) = oneshot::channel();
    gates.insert(path.to_string(), rx);
    releases.insert(path.to_string(), tx);
  }
  (GatedClient { gates: Mutex::new(gates) }, releases)
}

impl ConfigClient for GatedClient {
  fn fetch(&self, path: &str) -> BoxFuture<FetchResult> {
    let gate = self.gates.lock().unwrap().remove(path);
    Box::pin(async move {
      match gate {
        Some(rx) => rx.await.unwrap_or_else(|_| Err(Failure::transport("gate dropped"))),
        None => Err(Failure::transport("no gate")),
      }
    })
  }
}

#[test]
fn starts_loading_on_empty_path() {
  let machine = RenderStateMachine::new(TableClient::new(&[]));
  let snap = machine.snapshot();
  assert_eq!(snap.path, "");
  assert_eq!(snap.state, RenderState::Loading);
  assert!(matches!(machine.layout(), LayoutDescriptor::Skeleton(_)));
}

#[test]
fn begin_resets_to_loading_for_new_path() {
  let machine = RenderStateMachine::new(TableClient::new(&[]));
  let first = machine.begin("/a");
  assert!(machine.complete(first, Ok(page("/a"))));
  assert_eq!(ready_path(&machine.snapshot().state), Some("/a"));

  let second = machine.begin("/b");
  assert!(second > first);
  let snap = machine.snapshot();
  assert_eq!(snap.path, "/b");
  assert_eq!(snap.state, RenderState::Loading);
}

#[test]
fn terminal_state_is_not_overwritten_by_same_ticket() {
  let machine = RenderStateMachine::new(TableClient::new(&[]));
  let ticket = machine.begin("/a");
  assert!(machine.complete(ticket, Err(Failure::http_status(500, "boom"))));
  assert!(!machine.complete(ticket, Ok(page("/a"))));
  assert!(machine.snapshot().state.failure().is_some());
}

#[test]
fn late_result_for_old_path_is_discarded() {
  let machine = RenderStateMachine::new(TableClient::new(&[]));
  let p1 = machine.begin("/p1");
  let p2 = machine.begin("/p2");
  assert!(machine.complete(p2, Ok(page("/p2"))));
  assert!(!machine.complete(p1, Ok(page("/p1"))));

  let snap = machine.snapshot();
  assert_eq!(snap.path, "/p2");
  assert_eq!(ready_path(&snap.state), Some("/p2"));
}

#[test]
fn early_result_for_old_path_is_discarded() {
  let machine = RenderStateMachine::new(TableClient::new(&[]));
  let p1 = machine.begin("/p1");
  let p2 = machine.begin("/p2");
  assert!(!machine.complete(p1, Err(Failure::http_status(500, "old"))));
  assert_eq!(machine.snapshot().state, RenderState::Loading);
  assert!(machine.complete(p2, Ok(page("/p2"))));
  assert_eq!(ready_path(&machine.snapshot().state), Some("/p2"));
}

#[tokio::test]
async fn navigate_suppresses_stale_response() {
  let (client, mut release) = gated(&["/p1", "/p2"]);
  let machine = RenderStateMachine::new(client);

  let first = machine.navigate("/p1");
  let second = machine.navigate("/p2");

  release.remove("/p2").unwrap().send(Ok(page("/p2"))).unwrap();
  assert!(second.await.unwrap());
  release.remove("/p1").unwrap().send(Ok(page("/p1"))).unwrap();
  assert!(!first.await.unwrap());

  let snap = machine.snapshot();
  assert_eq!(snap.path, "/p2");
  assert_eq!(ready_path(&snap.state), Some("/p2"));
}

#[tokio::test]
async fn error_does_not_block_later_path() {
  let machine = RenderStateMachine::new(TableClient::new(&["/ok"]));
  assert!(machine.load("/missing").await);
  let LayoutDescriptor::Error(err) = machine.layout() else {
    panic!("expected error layout");
  };
  assert!(err.summary.contains("404"));
  assert_eq!(err.detail, "not found");

  assert!(machine.load("/ok").await);
  assert_eq!(ready_path(&machine.snapshot().state), Some("/ok"));
}

#[tokio::test]
async fn run_with_fixed_resolver_settles_on_resolved_path() {
  let machine = RenderStateMachine::new(TableClient::new(&["/home"]));
  machine.run(FixedPathResolver::new("/home")).await;
  let state = machine.settled("/home").await;
  assert_eq!(ready_path(&state), Some("/home"));
}

#[tokio::test]
async fn run_follows_navigation_events() {
  let machine = RenderStateMachine::new(TableClient::new(&["/a", "/b"]));
  let (navigator, resolver) = navigation();
  let runner = machine.clone();
  let task = tokio::spawn(async move { runner.run(resolver).await });

  navigator.navigate("/a");
  assert_eq!(ready_path(&machine.settled("/a").await), Some("/a"));
  navigator.navigate("/b");
  assert_eq!(ready_path(&machine.settled("/b").await), Some("/b"));

  drop(navigator);
  task.await.unwrap();
}

#[tokio::test]
async fn subscribers_observe_loading_before_result() {
  let (client, mut release) = gated(&["/a"]);
  let machine = RenderStateMachine::new(client);
  let mut rx = machine.subscribe();

  let handle = machine.navigate("/a");
  rx.changed().await.unwrap();
  {
    let snap = rx.borrow_and_update();
    assert_eq!(snap.path, "/a");
    assert_eq!(snap.state, RenderState::Loading);
  }

  let ready = ConfigurationPage::from_json(r#"{"search":{"enabled":true}}"#).unwrap();
  release.remove("/a").unwrap().send(Ok(ready)).unwrap();
  assert!(handle.await.unwrap());
  rx.changed().await.unwrap();
  let layout = project(&rx.borrow_and_update().state);
  assert!(matches!(layout.sections(), [Section::Search(_)]));
}
