//! Engine error taxonomy.

use std::io;
use thiserror::Error;

/// Errors that abort an engine session.
///
/// Input-stream failures are deliberately absent: per-poll errors are
/// logged and tolerated, and a persistently dead stream stops the
/// session gracefully instead of surfacing here.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Terminal setup failed (raw mode, cursor, screen). Fatal at
    /// startup; the session never starts.
    #[error("failed to configure terminal: {0}")]
    Terminal(#[source] io::Error),

    /// Writing a frame to the terminal failed. The loop aborts; the
    /// terminal is still restored on the way out.
    #[error("failed to write frame to terminal: {0}")]
    Render(#[source] io::Error),
}
