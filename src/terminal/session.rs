//! Terminal session: scoped raw-mode acquisition with guaranteed release.
//!
//! Entering a session switches the terminal to raw (unbuffered, no
//! echo) input, hides the cursor, and clears the screen. Dropping the
//! session restores cooked mode and cursor visibility — on normal quit,
//! on error return, and on panic unwind alike. Restoration failures are
//! logged but never prevent teardown from completing.

use crossterm::{
    cursor, execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use tracing::{debug, warn};

/// RAII guard for the terminal's raw-mode session.
///
/// Construction performs the full screen setup; `Drop` undoes it. Keep
/// the guard alive for as long as the engine owns the terminal.
pub struct TerminalSession {
    alternate_screen: bool,
}

impl TerminalSession {
    /// Enter raw mode, hide the cursor, and clear the screen.
    ///
    /// With `alternate_screen` set, the session runs on the alternate
    /// screen buffer and the user's scrollback is restored on exit;
    /// otherwise the primary screen is cleared in place.
    ///
    /// # Errors
    ///
    /// Returns an error if any step of the terminal setup fails. This
    /// is fatal at startup: the session never starts, and whatever was
    /// already applied is rolled back by the guard.
    pub fn enter(alternate_screen: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        // From here on the guard exists, so an error in the remaining
        // setup still restores raw mode on the way out.
        let session = Self { alternate_screen };

        let mut stdout = io::stdout();
        if alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(
            stdout,
            cursor::Hide,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        debug!("terminal session started");
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, cursor::Show) {
            warn!("failed to restore cursor visibility: {e}");
        }
        if self.alternate_screen {
            if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
                warn!("failed to leave alternate screen: {e}");
            }
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to restore cooked mode: {e}");
        }
        debug!("terminal session restored");
    }
}
