/* src/server/engine/rust/src/color.rs */

/// Convert a hex color (`#rgb` or `#rrggbb`, leading `#` optional) into a CSS
/// `rgba()` string with the given alpha. Unparseable input falls back to white.
pub fn hex_to_rgba(color: &str, alpha: f64) -> String {
  let (r, g, b) = hex_to_rgb(color).unwrap_or((255, 255, 255));
  format!("rgba({r}, {g}, {b}, {alpha})")
}

/// Parse `#rgb` / `#rrggbb` into channels.
pub fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
  let hex = color.trim().trim_start_matches('#');
  if !hex.is_ascii() {
    return None;
  }
  match hex.len() {
    3 => {
      let mut channels = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
      Some((channels.next()??, channels.next()??, channels.next()??))
    }
    6 => {
      let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
      Some((channel(0)?, channel(2)?, channel(4)?))
    }
    _ => None,
  }
}
