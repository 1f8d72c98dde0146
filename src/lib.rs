//! # Gridloop
//!
//! A fixed-timestep terminal game engine with differential grid
//! rendering.
//!
//! Gridloop is the reusable core underneath small terminal games: a
//! character grid games draw into, a renderer that flushes only the
//! cells that changed, a background key-capture thread that coexists
//! with a raw-mode terminal, and a fixed-timestep loop with a catch-up
//! cap and a frame-rate cap.
//!
//! ## Core Concepts
//!
//! - **Double grids**: the current frame diffs against the last flush,
//!   so output is bounded by the change set (a few moving sprites)
//! - **Fixed timestep**: `update` always gets the same `dt`; wall time
//!   accrues into a lag accumulator drained at most 5 ticks per frame
//! - **Frame key state**: keys surface in `pressed` for one frame,
//!   then in `released` for exactly one more
//! - **Guaranteed restore**: raw mode and cursor visibility come back
//!   on every exit path, panics included
//!
//! ## Example
//!
//! ```rust,no_run
//! use gridloop::{Context, Engine, EngineConfig, Game};
//! use std::time::Duration;
//!
//! struct Blinker {
//!     elapsed: Duration,
//! }
//!
//! impl Game for Blinker {
//!     fn update(&mut self, ctx: &mut Context<'_>, dt: Duration) {
//!         if ctx.is_pressed('q') {
//!             ctx.stop();
//!         }
//!         self.elapsed += dt;
//!         if self.elapsed.as_secs() % 2 == 0 {
//!             ctx.grid().write_text(2, 1, "tick");
//!         }
//!     }
//!
//!     fn reset(&mut self) {
//!         self.elapsed = Duration::ZERO;
//!     }
//! }
//!
//! let mut engine = Engine::new(EngineConfig::default());
//! engine.run(&mut Blinker { elapsed: Duration::ZERO })?;
//! # Ok::<(), gridloop::EngineError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod engine;
pub mod input;
pub mod terminal;

mod error;

// Re-exports for convenience
pub use buffer::{Attrs, Cell, Color, Grid, Style};
pub use engine::{Context, Engine, EngineConfig, FrameClock, Game, LagPolicy};
pub use error::EngineError;
pub use input::{InputActor, KeyEvent, Keyboard};
pub use terminal::{Renderer, TerminalSession};
