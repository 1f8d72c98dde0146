//! Input actor: dedicated thread for polling terminal keystrokes.
//!
//! The actor polls crossterm events with a bounded timeout so it can
//! observe the shutdown flag promptly even when no keys arrive. Each
//! printable key press is case-folded to lowercase and forwarded as a
//! [`KeyEvent`]; multi-byte sequences (arrows, function keys) are out
//! of scope and dropped at conversion.

use super::keys::KeyEvent;
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::warn;

/// Consecutive poll/read failures tolerated before the actor gives up
/// and reports the input stream dead.
const MAX_CONSECUTIVE_FAILURES: u32 = 8;

/// Input actor that captures keystrokes on a background thread.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Channel to send key events to the run loop.
    /// * `poll_timeout` - How long to wait for events before checking shutdown.
    pub fn spawn(sender: Sender<KeyEvent>, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("gridloop-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    ///
    /// Transient poll/read errors are logged and the loop keeps going;
    /// a run of consecutive failures reports [`KeyEvent::Disconnected`]
    /// so the session stops instead of spinning on a dead stream.
    fn run_loop(sender: &Sender<KeyEvent>, shutdown: &Arc<AtomicBool>, poll_timeout: Duration) {
        let mut failures = 0u32;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        failures = 0;
                        if let Some(key) = Self::convert_event(&ev) {
                            if sender.send(KeyEvent::Key(key)).is_err() {
                                // Receiver dropped, exit
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        warn!("input read failed: {e}");
                        failures += 1;
                    }
                },
                Ok(false) => {
                    // No event this poll window.
                    failures = 0;
                }
                Err(e) => {
                    warn!("input poll failed: {e}");
                    failures += 1;
                }
            }

            if failures >= MAX_CONSECUTIVE_FAILURES {
                warn!("input stream persistently failing; disconnecting capture");
                let _ = sender.send(KeyEvent::Disconnected);
                break;
            }
        }
    }

    /// Convert a crossterm event to a case-folded key, if it is one we
    /// handle.
    fn convert_event(event: &Event) -> Option<char> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char(c) => Some(c.to_ascii_lowercase()),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent as CtKeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(CtKeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_printable_keys_are_case_folded() {
        assert_eq!(InputActor::convert_event(&press(KeyCode::Char('Q'))), Some('q'));
        assert_eq!(InputActor::convert_event(&press(KeyCode::Char('a'))), Some('a'));
        assert_eq!(InputActor::convert_event(&press(KeyCode::Char(' '))), Some(' '));
    }

    #[test]
    fn test_non_printable_keys_are_dropped() {
        assert_eq!(InputActor::convert_event(&press(KeyCode::Esc)), None);
        assert_eq!(InputActor::convert_event(&press(KeyCode::Left)), None);
        assert_eq!(InputActor::convert_event(&press(KeyCode::F(1))), None);
        assert_eq!(InputActor::convert_event(&press(KeyCode::Enter)), None);
    }

    #[test]
    fn test_release_events_are_dropped() {
        let mut ev = CtKeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        assert_eq!(InputActor::convert_event(&Event::Key(ev)), None);
    }
}
