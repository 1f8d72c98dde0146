//! Bouncer: a minimal game exercising the whole engine surface.
//!
//! A glyph bounces around the grid, leaving a score in the corner.
//! Keys: `q` quits, `r` restarts after a crash into the left wall.

use gridloop::{Attrs, Cell, Color, Context, Engine, EngineConfig, Game, Style};
use std::time::Duration;

const WIDTH: u16 = 60;
const HEIGHT: u16 = 20;

struct Bouncer {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    bounces: u32,
    crashed: bool,
}

impl Bouncer {
    fn new() -> Self {
        Self {
            x: f64::from(WIDTH) / 2.0,
            y: f64::from(HEIGHT) / 2.0,
            vx: 14.0,
            vy: 9.0,
            bounces: 0,
            crashed: false,
        }
    }

    fn draw_frame(&self, ctx: &mut Context<'_>) {
        let (w, h) = (ctx.width(), ctx.height());
        let border = Cell::new('.').with_fg(Color::BrightBlack);
        let grid = ctx.grid();
        grid.fill_rect(0, 0, w, 1, border);
        grid.fill_rect(0, h - 1, w, 1, border);
        grid.fill_rect(0, 0, 1, h, border);
        grid.fill_rect(w - 1, 0, 1, h, border);
        grid.write_styled(
            2,
            0,
            &format!(" bounces: {} ", self.bounces),
            Style::fg(Color::BrightCyan),
        );
    }
}

impl Game for Bouncer {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn update(&mut self, ctx: &mut Context<'_>, dt: Duration) {
        if ctx.is_pressed('q') {
            ctx.stop();
            return;
        }

        if self.crashed {
            if ctx.is_released('r') {
                self.reset();
            }
            self.draw_frame(ctx);
            let msg_x = ctx.width() / 2 - 11;
            let msg_y = ctx.height() / 2;
            ctx.grid().write_styled(
                msg_x,
                msg_y,
                "crashed into the wall!",
                Style::fg(Color::BrightRed).with_attrs(Attrs::BOLD),
            );
            ctx.grid()
                .write_text(msg_x, msg_y + 1, "press 'r' to restart");
            return;
        }

        let dt = dt.as_secs_f64();
        self.x += self.vx * dt;
        self.y += self.vy * dt;

        let max_x = f64::from(WIDTH) - 2.0;
        let max_y = f64::from(HEIGHT) - 2.0;

        if self.x <= 1.0 {
            // Left wall is lava.
            self.crashed = true;
            return;
        }
        if self.x >= max_x {
            self.x = max_x;
            self.vx = -self.vx;
            self.bounces += 1;
        }
        if self.y <= 1.0 || self.y >= max_y {
            self.y = self.y.clamp(1.0, max_y);
            self.vy = -self.vy;
            self.bounces += 1;
        }

        self.draw_frame(ctx);
        ctx.grid().set(
            self.x as u16,
            self.y as u16,
            Cell::new('@').with_fg(Color::BrightYellow).with_attrs(Attrs::BOLD),
        );
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

fn main() -> Result<(), gridloop::EngineError> {
    let mut engine = Engine::new(EngineConfig {
        width: WIDTH,
        height: HEIGHT,
        ..EngineConfig::default()
    });
    engine.run(&mut Bouncer::new())
}
