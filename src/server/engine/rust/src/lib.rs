/* src/server/engine/rust/src/lib.rs */

pub mod color;
pub mod escape;
pub mod failure;
pub mod layout;
pub mod model;
pub mod render;
pub mod search;
pub mod state;

// Public API re-exports
pub use color::{hex_to_rgb, hex_to_rgba};
pub use escape::escape_html;
pub use failure::Failure;
pub use layout::{
  ErrorDescriptor, LayoutDescriptor, LinkDescriptor, Placeholder, SearchDescriptor, Section,
  WidgetDescriptor, project,
};
pub use model::{ConfigurationPage, LinkConfig, PageInject, SearchConfig, WidgetConfig};
pub use render::render_html;
pub use search::{Navigation, NavigationTarget, handle_key, submit_search};
pub use state::RenderState;
