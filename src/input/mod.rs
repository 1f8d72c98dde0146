//! Input capture: a background polling thread feeding per-frame key state.
//!
//! Two pieces cooperate across the thread boundary:
//! - [`InputActor`]: polls raw keystrokes with a bounded timeout and
//!   forwards them down a channel
//! - [`Keyboard`]: main-thread pressed/released sets, drained from that
//!   channel and rotated once per rendered frame
//!
//! ```text
//! ┌──────────────┐      KeyEvent       ┌────────────────────┐
//! │ Input Thread │ ─────────────────▶  │ Keyboard (run loop)│
//! └──────────────┘   bounded channel   └────────────────────┘
//! ```
//!
//! The channel is the synchronization: the capture thread only sends,
//! the run loop only drains, and no lock is ever held while a game's
//! `update` reads key state.

mod actor;
mod keys;

pub use actor::InputActor;
pub use keys::{KeyEvent, Keyboard};
