/* src/cli/core/src/ui.rs */

// Terminal output for the `homepage` binary. Diagnostics go through tracing
// on stderr; everything here is the command's actual output on stdout.

use homepage_engine::hex_to_rgb;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn status(color: &str, mark: char, msg: &str) {
  println!("  {color}{mark}{RESET} {msg}");
}

pub fn ok(msg: &str) {
  status(GREEN, '\u{2713}', msg);
}

pub fn fail(msg: &str) {
  status(RED, '\u{2717}', msg);
}

pub fn warn(msg: &str) {
  status(YELLOW, '!', msg);
}

pub fn arrow(msg: &str) {
  status(GREEN, '\u{2192}', msg);
}

/// Indented continuation of the previous status line.
pub fn detail(msg: &str) {
  println!("    {DIM}{msg}{RESET}");
}

pub fn banner(cmd: &str) {
  println!("\n  {BOLD}homepage{RESET} {cmd} {DIM}v{VERSION}{RESET}\n");
}

pub fn lines(lines: &[String]) {
  for line in lines {
    println!("{line}");
  }
}

pub fn blank() {
  println!();
}

/// Truecolor accent bar for a link colour; unparseable colours draw white.
pub fn swatch(color: &str) -> String {
  let (r, g, b) = hex_to_rgb(color).unwrap_or((255, 255, 255));
  format!("\x1b[38;2;{r};{g};{b}m\u{258c}{RESET}")
}
