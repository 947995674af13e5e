/* src/cli/core/src/logging.rs */

use tracing::Level;
use tracing_subscriber::filter::EnvFilter;

/// Info by default, debug with `LOG_LEVEL=DEBUG`; `RUST_LOG` directives win over both.
pub(crate) fn init_logging() {
  let filter = EnvFilter::builder()
    .with_default_directive(default_level(std::env::var("LOG_LEVEL").ok().as_deref()).into())
    .from_env_lossy();

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(true)
    .with_writer(std::io::stderr)
    .init();
}

fn default_level(log_level: Option<&str>) -> Level {
  match log_level {
    Some(level) if level.eq_ignore_ascii_case("debug") => Level::DEBUG,
    _ => Level::INFO,
  }
}
