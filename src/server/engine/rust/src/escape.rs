/* src/server/engine/rust/src/escape.rs */

use std::borrow::Cow;

fn entity(ch: char) -> Option<&'static str> {
  match ch {
    '&' => Some("&amp;"),
    '<' => Some("&lt;"),
    '>' => Some("&gt;"),
    '"' => Some("&quot;"),
    '\'' => Some("&#x27;"),
    _ => None,
  }
}

/// Make configuration text safe inside element content and double-quoted
/// attributes. Most values (colours, hostnames) need no escaping and are
/// returned borrowed.
pub fn escape_html(s: &str) -> Cow<'_, str> {
  let Some(first) = s.find(|c| entity(c).is_some()) else {
    return Cow::Borrowed(s);
  };
  let mut out = String::with_capacity(s.len() + 8);
  out.push_str(&s[..first]);
  for ch in s[first..].chars() {
    match entity(ch) {
      Some(escaped) => out.push_str(escaped),
      None => out.push(ch),
    }
  }
  Cow::Owned(out)
}
