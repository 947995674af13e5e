/* src/server/engine/rust/src/render.rs */

//! HTML presentation of a layout descriptor: a two-column grid where the
//! search area spans both columns.

use crate::escape::escape_html;
use crate::layout::{
  ErrorDescriptor, LayoutDescriptor, LinkDescriptor, Placeholder, SearchDescriptor, Section,
  WidgetDescriptor,
};
use crate::model::PageInject;

pub fn render_html(layout: &LayoutDescriptor) -> String {
  let mut html = String::from(r#"<div class="homepage"><div class="homepage-grid">"#);
  match layout {
    LayoutDescriptor::Skeleton(slots) => render_skeleton(&mut html, slots),
    LayoutDescriptor::Error(err) => render_error(&mut html, err),
    LayoutDescriptor::Ready { sections, inject } => render_ready(&mut html, sections, inject),
  }
  html.push_str("</div></div>");
  html
}

fn render_skeleton(html: &mut String, slots: &[Placeholder]) {
  for slot in slots {
    match slot {
      Placeholder::Search => html.push_str(
        r#"<div class="search-area span-2"><div class="skeleton skeleton-search"></div></div>"#,
      ),
      Placeholder::Link => html.push_str(r#"<div class="skeleton skeleton-link"></div>"#),
    }
  }
}

fn render_error(html: &mut String, err: &ErrorDescriptor) {
  html.push_str(r#"<div class="error span-2"><h1>Something went wrong:</h1>"#);
  // Collapsed by default: <details> without the `open` attribute.
  html.push_str(&format!(
    "<details><summary><h2>{}</h2><h4>expand for more details</h4></summary><pre>{}</pre></details>",
    escape_html(&err.summary),
    escape_html(&err.detail),
  ));
  html.push_str("</div>");
}

fn render_ready(html: &mut String, sections: &[Section], inject: &PageInject) {
  if let Some(css) = &inject.css {
    html.push_str(&format!("<style>{css}</style>"));
  }

  // The search area is always laid out; it is empty when search is off.
  html.push_str(r#"<div class="search-area span-2">"#);
  for section in sections {
    if let Section::Search(search) = section {
      render_search(html, search);
    }
  }
  html.push_str("</div>");

  for section in sections {
    match section {
      Section::Search(_) => {}
      Section::Widget(widget) => render_widget(html, widget),
      Section::Link(link) => render_link(html, link),
    }
  }

  if let Some(raw) = &inject.html {
    html.push_str(raw);
  }
  if let Some(js) = &inject.js {
    html.push_str(&format!("<script>{js}</script>"));
  }
}

fn render_search(html: &mut String, search: &SearchDescriptor) {
  html.push_str(&format!(
    r#"<input id="search" class="search" autofocus placeholder="{}""#,
    escape_html(&search.placeholder)
  ));
  if let Some(template) = &search.template {
    html.push_str(&format!(r#" data-template="{}""#, escape_html(template)));
  }
  html.push('>');
}

fn render_widget(html: &mut String, widget: &WidgetDescriptor) {
  html.push_str(&format!(
    r#"<iframe class="widget" frameborder="0" src="{}"></iframe>"#,
    escape_html(&widget.source)
  ));
}

fn render_link(html: &mut String, link: &LinkDescriptor) {
  let color = escape_html(&link.color);
  let gradient = escape_html(&link.gradient);
  html.push_str(r#"<div class="link"><a"#);
  if let Some(href) = &link.href {
    html.push_str(&format!(r#" href="{}""#, escape_html(href)));
  }
  html.push_str(&format!(
    r#" target="_blank" rel="noopener noreferrer" style="border-left: 2px solid {color}; background: linear-gradient(to right, {gradient}, transparent)">"#
  ));
  html.push_str(r#"<div class="link-head">"#);
  if let Some(icon) = &link.icon {
    html.push_str(&format!(r#"<img class="link-icon" src="{}">"#, escape_html(icon)));
  }
  html.push_str(&format!(
    r#"<h1 class="link-title">{}</h1></div><h1 class="link-host">{}</h1></a></div>"#,
    escape_html(link.title.as_deref().unwrap_or_default()),
    escape_html(&link.hostname),
  ));
}
