//! Key state: pressed/released sets fed by the capture thread.
//!
//! The capture thread never touches the sets directly — it only sends
//! [`KeyEvent`]s down a bounded channel. The main thread drains the
//! channel into its private sets, so `update` reads key state and
//! `rotate` rewrites it without any lock being held. An event that
//! arrives after a drain simply stays queued and surfaces next frame:
//! preserved, not lost or duplicated.

use crossbeam_channel::{Receiver, TryRecvError};
use std::collections::HashSet;

/// Events from the input capture thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A key was pressed (case-folded to lowercase).
    Key(char),
    /// The capture side hit a persistent failure and is gone.
    Disconnected,
}

/// Main-thread view of keyboard state.
///
/// `pressed` holds keys observed down since the last rotation;
/// `released` holds keys that were down in the prior frame and surfaced
/// for exactly one rotation window. [`Keyboard::rotate`] is the only
/// operation that moves keys between the sets, and the run loop calls
/// it exactly once per rendered frame.
#[derive(Debug)]
pub struct Keyboard {
    events: Receiver<KeyEvent>,
    pressed: HashSet<char>,
    released: HashSet<char>,
    connected: bool,
}

impl Keyboard {
    /// Create a keyboard draining the given event channel.
    pub fn new(events: Receiver<KeyEvent>) -> Self {
        Self {
            events,
            pressed: HashSet::new(),
            released: HashSet::new(),
            connected: true,
        }
    }

    /// Drain pending key events into the pressed set.
    ///
    /// Returns `false` once the capture side has disconnected (either
    /// explicitly or by dropping its sender); the run loop treats that
    /// as a quit signal rather than an error.
    pub fn pump(&mut self) -> bool {
        while self.connected {
            match self.events.try_recv() {
                Ok(KeyEvent::Key(key)) => {
                    self.pressed.insert(key);
                }
                Ok(KeyEvent::Disconnected) | Err(TryRecvError::Disconnected) => {
                    self.connected = false;
                }
                Err(TryRecvError::Empty) => break,
            }
        }
        self.connected
    }

    /// Whether `key` has been observed down since the last rotation.
    #[inline]
    pub fn is_pressed(&self, key: char) -> bool {
        self.pressed.contains(&key)
    }

    /// Whether `key` was down in the prior frame but not this one.
    #[inline]
    pub fn is_released(&self, key: char) -> bool {
        self.released.contains(&key)
    }

    /// Whether the capture side is still alive.
    #[inline]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Rotate key state at the end of a frame: pressed becomes
    /// released, pressed starts empty.
    ///
    /// Called exactly once per rendered frame by the run loop, never by
    /// game code. The sets are swapped rather than reallocated.
    pub fn rotate(&mut self) {
        self.released.clear();
        std::mem::swap(&mut self.pressed, &mut self.released);
    }
}
