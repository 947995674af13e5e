/* src/server/engine/rust/src/failure.rs */

use std::error::Error;

/// Why a configuration fetch did not produce a page.
/// Carried verbatim as the payload of the error render state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
  /// The service answered with something other than 200 OK.
  #[error("failed with status {code}: {body}")]
  HttpStatus { code: u16, body: String },
  /// No usable response: connection, I/O or decode error.
  #[error("{message}")]
  Transport { message: String, trace: Option<String> },
}

impl Failure {
  pub fn http_status(code: u16, body: impl Into<String>) -> Self {
    Self::HttpStatus { code, body: body.into() }
  }

  pub fn transport(message: impl Into<String>) -> Self {
    Self::Transport { message: message.into(), trace: None }
  }

  /// Build a transport failure from an error, keeping its `source()` chain as the trace.
  pub fn from_error(err: &(dyn Error + 'static)) -> Self {
    let mut causes = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
      causes.push(format!("caused by: {cause}"));
      source = cause.source();
    }
    let trace = if causes.is_empty() { None } else { Some(causes.join("\n")) };
    Self::Transport { message: err.to_string(), trace }
  }

  /// One-line text for the collapsed diagnostic panel.
  pub fn summary(&self) -> String {
    match self {
      Self::HttpStatus { code, .. } => format!("failed with status {code}"),
      Self::Transport { message, .. } => message.clone(),
    }
  }

  /// Full diagnostic text for the expanded panel.
  pub fn detail(&self) -> String {
    match self {
      Self::HttpStatus { body, .. } => body.clone(),
      Self::Transport { message, trace: Some(trace) } => format!("{message}\n{trace}"),
      Self::Transport { message, trace: None } => message.clone(),
    }
  }

  pub fn status(&self) -> Option<u16> {
    match self {
      Self::HttpStatus { code, .. } => Some(*code),
      Self::Transport { .. } => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, thiserror::Error)]
  #[error("outer")]
  struct Outer(#[source] Inner);

  #[derive(Debug, thiserror::Error)]
  #[error("inner")]
  struct Inner;

  #[test]
  fn http_status_summary_and_detail() {
    let failure = Failure::http_status(404, "not found");
    assert_eq!(failure.summary(), "failed with status 404");
    assert_eq!(failure.detail(), "not found");
    assert_eq!(failure.status(), Some(404));
    assert_eq!(failure.to_string(), "failed with status 404: not found");
  }

  #[test]
  fn transport_without_trace() {
    let failure = Failure::transport("connection refused");
    assert_eq!(failure.summary(), "connection refused");
    assert_eq!(failure.detail(), "connection refused");
    assert_eq!(failure.status(), None);
  }

  #[test]
  fn from_error_collects_source_chain() {
    let failure = Failure::from_error(&Outer(Inner));
    assert_eq!(
      failure,
      Failure::Transport { message: "outer".into(), trace: Some("caused by: inner".into()) }
    );
    assert_eq!(failure.detail(), "outer\ncaused by: inner");
  }

  #[test]
  fn from_error_without_source() {
    assert_eq!(Failure::from_error(&Inner), Failure::transport("inner"));
  }
}
