/* src/client/rust/src/lib.rs */

pub mod cache;
pub mod client;
pub mod machine;
pub mod resolver;

use std::future::Future;
use std::pin::Pin;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

// Re-exports for ergonomic use
pub use cache::QueryCache;
pub use client::{ConfigClient, FetchResult, HttpConfigClient, config_url};
pub use homepage_engine as engine;
pub use machine::{RenderStateMachine, Snapshot, Ticket};
pub use resolver::{FixedPathResolver, NavigationResolver, Navigator, PathResolver, navigation};
