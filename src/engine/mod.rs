//! Engine module: the fixed-timestep run loop and its collaborators.
//!
//! This module contains:
//! - [`Engine`]: session lifecycle and the frame loop
//! - [`EngineConfig`]: tunables (grid size, tick rate, frame cap)
//! - [`FrameClock`] / [`LagPolicy`]: the fixed-timestep accumulator
//! - [`Game`] / [`Context`]: the contract concrete games implement
//!
//! # Frame anatomy
//!
//! ```text
//! begin_frame ─▶ pump keys ─▶ update × ticks ─▶ render ─▶ rotate ─▶ sleep
//!   (accrue lag)              (≤ 5, fixed dt)   (diff)    (keys)   (fps cap)
//! ```

mod clock;
mod config;
mod game;
mod runner;

pub use clock::{FrameClock, LagPolicy, MAX_TICKS_PER_FRAME};
pub use config::EngineConfig;
pub use game::{Context, Game};
pub use runner::Engine;
