//! Diffing engine: generate minimal ANSI sequences from grid changes.
//!
//! This is the core of the differential renderer:
//! 1. Compare the previously flushed grid against the current one
//! 2. Emit a cursor-position command plus glyph for each changed cell
//! 3. Skip the cursor move entirely when the cell is adjacent to the
//!    last one written
//! 4. Wrap styled glyphs in an SGR apply / reset pair
//!
//! Output is accumulated into a caller-provided buffer so a frame can be
//! flushed with a single write. A full-screen repaint every frame would
//! be visually noisy and bandwidth-heavy on slow links; the diff bounds
//! output to the actual change set, typically a few moving sprites.

use super::cell::{Attrs, Cell, Color};
use super::grid::Grid;
use std::io::Write;

/// Tracks where the terminal cursor landed after the last emitted cell,
/// so adjacent writes can skip the positioning command.
#[derive(Debug, Clone)]
pub struct CursorTracker {
    x: u16,
    y: u16,
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorTracker {
    /// Create a tracker with unknown cursor position.
    ///
    /// The first emitted cell always gets an explicit move.
    pub const fn new() -> Self {
        Self {
            x: u16::MAX,
            y: u16::MAX,
        }
    }

    /// Forget the cursor position (e.g. after someone else wrote to the
    /// terminal), forcing a move on the next write.
    pub const fn reset(&mut self) {
        self.x = u16::MAX;
        self.y = u16::MAX;
    }
}

/// Statistics from one diff pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Number of cells that differed.
    pub cells_changed: usize,
    /// Number of cursor-position commands emitted.
    pub cursor_moves: usize,
}

/// Render the difference between two grids into an escape-sequence buffer.
///
/// Walks both grids row-major; for each position where
/// `current[x, y] != previous[x, y]` emits a 1-indexed cursor-position
/// command (suppressed when the cursor is already there from the
/// preceding write) followed by the glyph, SGR-wrapped if styled.
/// Identical grids emit nothing.
///
/// The grids must have identical dimensions.
pub fn render_diff(
    previous: &Grid,
    current: &Grid,
    output: &mut Vec<u8>,
    cursor: &mut CursorTracker,
) -> DiffStats {
    debug_assert_eq!(previous.width(), current.width());
    debug_assert_eq!(previous.height(), current.height());

    let mut stats = DiffStats::default();
    let width = current.width();

    for y in 0..current.height() {
        for x in 0..width {
            let idx = (y as usize) * (width as usize) + (x as usize);
            let prev_cell = &previous.cells()[idx];
            let cell = &current.cells()[idx];

            if prev_cell == cell {
                continue;
            }

            stats.cells_changed += 1;

            if cursor.x != x || cursor.y != y {
                emit_cursor_move(output, x, y);
                stats.cursor_moves += 1;
            }

            emit_cell(output, cell);

            // The terminal advances one column per printed glyph.
            cursor.x = x + 1;
            cursor.y = y;
        }
    }

    stats
}

/// Emit a cursor move sequence (ANSI positions are 1-indexed).
///
/// Uses the most compact representation:
/// - `\x1b[H` for home (1,1)
/// - `\x1b[{row}H` for column 1 of row N
/// - `\x1b[{row};{col}H` for absolute positioning
#[inline]
fn emit_cursor_move(output: &mut Vec<u8>, x: u16, y: u16) {
    let row = y + 1;
    let col = x + 1;

    if row == 1 && col == 1 {
        output.extend_from_slice(b"\x1b[H");
    } else if col == 1 {
        let _ = write!(output, "\x1b[{row}H");
    } else {
        let _ = write!(output, "\x1b[{row};{col}H");
    }
}

/// Emit one cell: bare glyph for plain cells, SGR apply + glyph + reset
/// trailer for styled ones.
#[inline]
fn emit_cell(output: &mut Vec<u8>, cell: &Cell) {
    let style = cell.style();
    if style.is_plain() {
        emit_glyph(output, cell.glyph());
    } else {
        emit_attrs(output, style.attrs);
        if let Some(fg) = style.fg {
            emit_fg_color(output, fg);
        }
        emit_glyph(output, cell.glyph());
        output.extend_from_slice(b"\x1b[0m");
    }
}

#[inline]
fn emit_glyph(output: &mut Vec<u8>, glyph: char) {
    let mut buf = [0u8; 4];
    output.extend_from_slice(glyph.encode_utf8(&mut buf).as_bytes());
}

/// Emit a foreground color sequence.
#[inline]
fn emit_fg_color(output: &mut Vec<u8>, color: Color) {
    if let Some(param) = color.sgr_param() {
        let _ = write!(output, "\x1b[{param}m");
    } else if let Color::Rgb(r, g, b) = color {
        let _ = write!(output, "\x1b[38;2;{r};{g};{b}m");
    }
}

/// Emit SGR sequences for a set of attribute flags.
fn emit_attrs(output: &mut Vec<u8>, attrs: Attrs) {
    if attrs.contains(Attrs::BOLD) {
        output.extend_from_slice(b"\x1b[1m");
    }
    if attrs.contains(Attrs::DIM) {
        output.extend_from_slice(b"\x1b[2m");
    }
    if attrs.contains(Attrs::UNDERLINE) {
        output.extend_from_slice(b"\x1b[4m");
    }
    if attrs.contains(Attrs::REVERSED) {
        output.extend_from_slice(b"\x1b[7m");
    }
}
