/* src/server/engine/rust/src/layout.rs */

//! Projection from a render state to the sections the presentation layer draws.
//! Pure: the same state always projects to the same descriptor.

use std::collections::BTreeMap;

use crate::color::hex_to_rgba;
use crate::failure::Failure;
use crate::model::{ConfigurationPage, LinkConfig, PageInject, SearchConfig, WidgetConfig};
use crate::state::RenderState;

/// Link placeholders shown while loading. Fixed for visual rhythm only.
pub const SKELETON_LINK_SLOTS: usize = 6;
pub const DEFAULT_LINK_COLOR: &str = "#ffffff";
pub const LINK_GRADIENT_ALPHA: f64 = 0.3;
pub const FAVICON_SERVICE: &str = "https://external-content.duckduckgo.com/ip3";
pub const SEARCH_PLACEHOLDER_FALLBACK: &str = "Search query";

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutDescriptor {
  Skeleton(Vec<Placeholder>),
  Error(ErrorDescriptor),
  Ready { sections: Vec<Section>, inject: PageInject },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
  /// Spans the full grid width.
  Search,
  Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor {
  pub summary: String,
  pub detail: String,
  /// Status code when the service answered at all.
  pub status: Option<u16>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
  Search(SearchDescriptor),
  Widget(WidgetDescriptor),
  Link(LinkDescriptor),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDescriptor {
  pub placeholder: String,
  pub template: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor {
  pub builtin: String,
  pub source: String,
  pub kv: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDescriptor {
  pub title: Option<String>,
  pub href: Option<String>,
  pub hostname: String,
  pub color: String,
  /// `rgba()` start of the left-to-right accent gradient.
  pub gradient: String,
  pub icon: Option<String>,
}

impl LayoutDescriptor {
  pub fn sections(&self) -> &[Section] {
    match self {
      Self::Ready { sections, .. } => sections,
      _ => &[],
    }
  }
}

impl Section {
  pub fn kind(&self) -> &'static str {
    match self {
      Self::Search(_) => "search",
      Self::Widget(_) => "widget",
      Self::Link(_) => "link",
    }
  }
}

pub fn project(state: &RenderState) -> LayoutDescriptor {
  match state {
    RenderState::Loading => skeleton(),
    RenderState::Error(failure) => LayoutDescriptor::Error(error_descriptor(failure)),
    RenderState::Ready(page) => project_page(page),
  }
}

pub fn skeleton() -> LayoutDescriptor {
  let mut slots = Vec::with_capacity(SKELETON_LINK_SLOTS + 1);
  slots.push(Placeholder::Search);
  slots.extend(std::iter::repeat_n(Placeholder::Link, SKELETON_LINK_SLOTS));
  LayoutDescriptor::Skeleton(slots)
}

fn error_descriptor(failure: &Failure) -> ErrorDescriptor {
  ErrorDescriptor { summary: failure.summary(), detail: failure.detail(), status: failure.status() }
}

/// Search first (when enabled), then widgets, then links, both in document order.
pub fn project_page(page: &ConfigurationPage) -> LayoutDescriptor {
  let mut sections = Vec::with_capacity(1 + page.widgets().len() + page.links().len());
  if let Some(search) = page.enabled_search() {
    sections.push(Section::Search(search_descriptor(search)));
  }
  sections.extend(page.widgets().iter().map(|w| Section::Widget(widget_descriptor(w))));
  sections.extend(page.links().iter().map(|l| Section::Link(link_descriptor(l))));
  LayoutDescriptor::Ready { sections, inject: page.inject.clone() }
}

fn search_descriptor(search: &SearchConfig) -> SearchDescriptor {
  let placeholder = match search.label.as_deref() {
    Some(label) if !label.is_empty() => format!("Search with {label}"),
    _ => SEARCH_PLACEHOLDER_FALLBACK.to_string(),
  };
  SearchDescriptor { placeholder, template: search.url.clone() }
}

fn widget_descriptor(widget: &WidgetConfig) -> WidgetDescriptor {
  WidgetDescriptor {
    builtin: widget.builtin.clone(),
    source: widget.inject.clone(),
    kv: widget.kv.clone(),
  }
}

fn link_descriptor(link: &LinkConfig) -> LinkDescriptor {
  let hostname = link.hostname();
  let color = match link.color.as_deref() {
    Some(c) if !c.is_empty() => c.to_string(),
    _ => DEFAULT_LINK_COLOR.to_string(),
  };
  let icon = match link.icon.as_deref() {
    Some(icon) if !icon.is_empty() => Some(icon.to_string()),
    _ => favicon_url(&hostname),
  };
  LinkDescriptor {
    title: link.title.clone(),
    href: link.url.clone(),
    gradient: hex_to_rgba(&color, LINK_GRADIENT_ALPHA),
    color,
    hostname,
    icon,
  }
}

/// Best-effort favicon lookup; needs a hostname to look up.
pub fn favicon_url(hostname: &str) -> Option<String> {
  if hostname.is_empty() {
    return None;
  }
  Some(format!("{FAVICON_SERVICE}/{hostname}.ico"))
}
