/* src/cli/core/src/present.rs */

// Terminal presentation of layout descriptors.

use homepage_engine::{ErrorDescriptor, LayoutDescriptor, LinkDescriptor, Placeholder, Section};

use crate::ui::{BOLD, DIM, RED, RESET, swatch};

const SKELETON_SEARCH: &str = "\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}";
const SKELETON_LINK: &str = "\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}";

/// Draw a layout as terminal lines. `expand` opens the error detail panel.
pub(crate) fn render_terminal(layout: &LayoutDescriptor, expand: bool) -> Vec<String> {
  match layout {
    LayoutDescriptor::Skeleton(slots) => slots
      .iter()
      .map(|slot| match slot {
        Placeholder::Search => format!("  {DIM}[ {SKELETON_SEARCH} ]{RESET}"),
        Placeholder::Link => format!("  {DIM}\u{258c} {SKELETON_LINK}{RESET}"),
      })
      .collect(),
    LayoutDescriptor::Error(err) => render_error(err, expand),
    LayoutDescriptor::Ready { sections, .. } => render_sections(sections),
  }
}

fn render_error(err: &ErrorDescriptor, expand: bool) -> Vec<String> {
  let mut lines = vec![
    format!("  {BOLD}Something went wrong:{RESET}"),
    format!("  {RED}{}{RESET}", err.summary),
  ];
  if expand {
    lines.extend(err.detail.lines().map(|l| format!("    {RED}{l}{RESET}")));
  } else {
    lines.push(format!("  {DIM}expand for more details (--details){RESET}"));
  }
  lines
}

fn render_sections(sections: &[Section]) -> Vec<String> {
  let mut lines = Vec::with_capacity(sections.len() + 1);
  // The search area is always present, empty when search is off.
  let search = sections.iter().find_map(|s| match s {
    Section::Search(search) => Some(search),
    _ => None,
  });
  match search {
    Some(search) => lines.push(format!("  [ {DIM}{}{RESET} ]", search.placeholder)),
    None => lines.push(String::new()),
  }
  for section in sections {
    match section {
      Section::Search(_) => {}
      Section::Widget(widget) => lines.push(format!("  \u{25a3} {DIM}widget{RESET} {}", widget.source)),
      Section::Link(link) => lines.push(render_link(link)),
    }
  }
  lines
}

fn render_link(link: &LinkDescriptor) -> String {
  let title = link.title.as_deref().unwrap_or_default();
  format!("  {} {BOLD}{title}{RESET}  {DIM}{}{RESET}", swatch(&link.color), link.hostname)
}
