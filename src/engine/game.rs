//! Game contract: the per-frame interface concrete games implement.
//!
//! The engine is composed with a game rather than subclassed by one:
//! the run loop holds any value implementing [`Game`] and hands it a
//! [`Context`] each tick. The context is the game's whole window into
//! the engine — drawing primitives, key-state queries, and the quit
//! signal — so games stay decoupled from the loop's internals.

use crate::buffer::Grid;
use crate::input::Keyboard;
use std::time::Duration;

/// A concrete game, driven by the engine's fixed-timestep loop.
pub trait Game {
    /// Advance the simulation by exactly `dt` and draw the new state.
    ///
    /// Called zero or more times per frame (bounded by the catch-up
    /// cap) with a constant `dt`. Implementations read input through
    /// `ctx`, draw via the grid primitives, and may call
    /// [`Context::stop`] to end the session.
    fn update(&mut self, ctx: &mut Context<'_>, dt: Duration);

    /// Return the game to its initial state.
    ///
    /// The engine never calls this; a game's own state machine does,
    /// typically on a restart key while in a game-over state. The
    /// engine session (grids, key state, terminal mode) stays up
    /// across a reset.
    fn reset(&mut self);
}

/// Per-tick view of the engine handed to [`Game::update`].
pub struct Context<'a> {
    grid: &'a mut Grid,
    keys: &'a Keyboard,
    stop: bool,
}

impl<'a> Context<'a> {
    pub(crate) fn new(grid: &'a mut Grid, keys: &'a Keyboard) -> Self {
        Self {
            grid,
            keys,
            stop: false,
        }
    }

    /// The drawing surface for this frame.
    pub fn grid(&mut self) -> &mut Grid {
        self.grid
    }

    /// Grid width in columns.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Grid height in rows.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Whether `key` has been observed down since the last rotation.
    pub fn is_pressed(&self, key: char) -> bool {
        self.keys.is_pressed(key)
    }

    /// Whether `key` was down in the prior frame but not this one.
    pub fn is_released(&self, key: char) -> bool {
        self.keys.is_released(key)
    }

    /// Request the session end after this frame.
    ///
    /// The transition is one-way; once requested, the loop renders the
    /// final frame, tears down the input capture, and restores the
    /// terminal.
    pub fn stop(&mut self) {
        self.stop = true;
    }

    pub(crate) const fn stop_requested(&self) -> bool {
        self.stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyEvent;
    use crossbeam_channel::bounded;

    #[test]
    fn test_context_exposes_grid_and_keys() {
        let mut grid = Grid::new(8, 4);
        let (tx, rx) = bounded(8);
        let mut keys = Keyboard::new(rx);
        tx.send(KeyEvent::Key('w')).unwrap();
        keys.pump();

        let mut ctx = Context::new(&mut grid, &keys);
        assert_eq!(ctx.width(), 8);
        assert_eq!(ctx.height(), 4);
        assert!(ctx.is_pressed('w'));
        assert!(!ctx.is_released('w'));

        ctx.grid().write_text(0, 0, "ok");
        assert!(!ctx.stop_requested());
        ctx.stop();
        assert!(ctx.stop_requested());

        assert_eq!(grid.get(0, 0).unwrap().glyph(), 'o');
    }
}
