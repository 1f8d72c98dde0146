//! Engine: session aggregation and the fixed-timestep run loop.
//!
//! `run` owns the whole session lifecycle: enter the raw-mode terminal
//! session, spawn the input capture thread, drive the game, and tear
//! everything down again no matter how the loop ends. The loop body per
//! frame: accrue wall time, pump key events, drain up to the tick cap
//! into `Game::update`, render the diff once, rotate key state, sleep
//! off the remainder of the frame budget.

use super::clock::FrameClock;
use super::config::EngineConfig;
use super::game::{Context, Game};
use crate::buffer::Grid;
use crate::error::EngineError;
use crate::input::{InputActor, Keyboard};
use crate::terminal::{Renderer, TerminalSession};
use crossbeam_channel::bounded;
use std::io::{self, Write};
use std::thread;
use tracing::debug;

/// Capacity of the key-event channel between capture and loop.
const KEY_CHANNEL_CAPACITY: usize = 64;

/// An engine session: the grid pair, key state, clock, and terminal
/// lifecycle, driven by one [`Game`].
pub struct Engine {
    config: EngineConfig,
    grid: Grid,
}

impl Engine {
    /// Create an engine for the configured grid size.
    ///
    /// The grid is allocated here, once, and reused every frame.
    ///
    /// # Panics
    /// Panics if the configured grid dimensions or clock rates are zero.
    pub fn new(config: EngineConfig) -> Self {
        let grid = Grid::new(config.width, config.height);
        Self { config, grid }
    }

    /// The session configuration.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a game to completion.
    ///
    /// Blocks until the game calls `stop`, the input stream dies, or a
    /// render write fails. The terminal is restored to cooked mode with
    /// a visible cursor on every exit path, including panics in
    /// `update` (the raw-mode session is an RAII guard) and error
    /// returns from rendering.
    ///
    /// # Errors
    ///
    /// [`EngineError::Terminal`] if the terminal cannot be put into raw
    /// mode, [`EngineError::Render`] if writing a frame fails.
    pub fn run<G: Game>(&mut self, game: &mut G) -> Result<(), EngineError> {
        let session =
            TerminalSession::enter(self.config.alternate_screen).map_err(EngineError::Terminal)?;

        let (key_tx, key_rx) = bounded(KEY_CHANNEL_CAPACITY);
        let input = InputActor::spawn(key_tx, self.config.input_poll_timeout);
        let mut keyboard = Keyboard::new(key_rx);

        let result = self.run_loop(game, &mut keyboard, io::stdout());

        input.join();
        drop(session);
        result
    }

    /// The loop proper, generic over the output sink so tests can drive
    /// frames against a byte buffer without touching a real terminal.
    fn run_loop<G: Game, W: Write>(
        &mut self,
        game: &mut G,
        keyboard: &mut Keyboard,
        sink: W,
    ) -> Result<(), EngineError> {
        let mut renderer = Renderer::new(self.config.width, self.config.height, sink);
        let mut clock = FrameClock::new(
            self.config.tick_rate,
            self.config.max_fps,
            self.config.lag_policy,
        );
        self.grid.clear();
        let mut running = true;

        while running {
            let frame_start = clock.begin_frame();

            if !keyboard.pump() {
                debug!("input capture gone; stopping session");
                running = false;
            }

            let ticks = clock.drain_ticks();
            if ticks > 0 {
                // Blank canvas once per drawing frame; the diff against
                // the previous flush erases whatever moved.
                self.grid.clear();
                let dt = clock.tick_duration();
                for _ in 0..ticks {
                    let mut ctx = Context::new(&mut self.grid, keyboard);
                    game.update(&mut ctx, dt);
                    if ctx.stop_requested() {
                        running = false;
                    }
                }
            }

            renderer.render(&self.grid).map_err(EngineError::Render)?;
            keyboard.rotate();

            if running {
                let frame_elapsed = frame_start.elapsed();
                let frame_duration = clock.frame_duration();
                if frame_elapsed < frame_duration {
                    thread::sleep(frame_duration - frame_elapsed);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyEvent;
    use std::time::Duration;

    /// Draws one glyph per update and stops after a fixed number.
    struct CountingGame {
        updates: u32,
        limit: u32,
    }

    impl CountingGame {
        fn new(limit: u32) -> Self {
            Self { updates: 0, limit }
        }
    }

    impl Game for CountingGame {
        fn update(&mut self, ctx: &mut Context<'_>, dt: Duration) {
            assert!(dt > Duration::ZERO);
            self.updates += 1;
            ctx.grid().set_glyph(0, 0, '#');
            if self.updates >= self.limit {
                ctx.stop();
            }
        }

        fn reset(&mut self) {
            self.updates = 0;
        }
    }

    fn test_engine() -> Engine {
        Engine::new(EngineConfig {
            width: 6,
            height: 3,
            tick_rate: 500,
            max_fps: 500,
            ..EngineConfig::default()
        })
    }

    #[test]
    fn test_loop_runs_updates_until_game_stops() {
        let mut engine = test_engine();
        let (tx, rx) = bounded(8);
        let mut keyboard = Keyboard::new(rx);
        tx.send(KeyEvent::Key('q')).unwrap();

        let mut game = CountingGame::new(3);
        engine
            .run_loop(&mut game, &mut keyboard, Vec::new())
            .unwrap();

        assert_eq!(game.updates, 3);
        // The loop rotated the queued key out of pressed on its way out.
        assert!(!keyboard.is_pressed('q'));
    }

    #[test]
    fn test_loop_stops_when_capture_disconnects() {
        let mut engine = test_engine();
        let (tx, rx) = bounded(8);
        let mut keyboard = Keyboard::new(rx);
        drop(tx);

        // A game that would never stop on its own.
        let mut game = CountingGame::new(u32::MAX);
        engine
            .run_loop(&mut game, &mut keyboard, Vec::new())
            .unwrap();
        assert!(!keyboard.is_connected());
    }

    #[test]
    fn test_grid_persists_across_runs() {
        let mut engine = test_engine();
        let (_tx, rx) = bounded::<KeyEvent>(8);
        let mut keyboard = Keyboard::new(rx);

        let mut game = CountingGame::new(1);
        engine
            .run_loop(&mut game, &mut keyboard, Vec::new())
            .unwrap();

        // Same allocation, same dimensions, ready for another run.
        assert_eq!(engine.grid.width(), 6);
        assert_eq!(engine.grid.height(), 3);
    }
}
