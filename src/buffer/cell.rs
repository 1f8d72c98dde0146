//! Cell: The atomic unit of the display grid.
//!
//! A cell is a single printable glyph plus an opaque style tag. The
//! engine never interprets the tag beyond turning it into an SGR
//! sequence on output; the default cell is a blank glyph with no style,
//! and cell equality is what drives the differential renderer.

use bitflags::bitflags;

/// A foreground color tag.
///
/// Named variants map to the classic ANSI palette (including the bright
/// half games tend to use); `Rgb` carries 24-bit truecolor. The tag is
/// opaque to the engine: it is compared for diffing and translated to an
/// escape sequence at the output boundary, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// ANSI black (SGR 30).
    Black,
    /// ANSI red (SGR 31).
    Red,
    /// ANSI green (SGR 32).
    Green,
    /// ANSI yellow (SGR 33).
    Yellow,
    /// ANSI blue (SGR 34).
    Blue,
    /// ANSI magenta (SGR 35).
    Magenta,
    /// ANSI cyan (SGR 36).
    Cyan,
    /// ANSI white (SGR 37).
    White,
    /// Bright black / gray (SGR 90).
    BrightBlack,
    /// Bright red (SGR 91).
    BrightRed,
    /// Bright green (SGR 92).
    BrightGreen,
    /// Bright yellow (SGR 93).
    BrightYellow,
    /// Bright blue (SGR 94).
    BrightBlue,
    /// Bright magenta (SGR 95).
    BrightMagenta,
    /// Bright cyan (SGR 96).
    BrightCyan,
    /// Bright white (SGR 97).
    BrightWhite,
    /// 24-bit truecolor (SGR 38;2;r;g;b).
    Rgb(u8, u8, u8),
}

impl Color {
    /// The SGR parameter for a named color.
    ///
    /// Returns `None` for `Rgb`, which needs the extended 38;2 form.
    pub(crate) const fn sgr_param(self) -> Option<u8> {
        Some(match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::BrightBlack => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::BrightWhite => 97,
            Self::Rgb(..) => return None,
        })
    }
}

bitflags! {
    /// Text attribute flags.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use gridloop::Attrs;
    /// let attrs = Attrs::BOLD | Attrs::UNDERLINE;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attrs: u8 {
        /// Bold text.
        const BOLD = 0b0000_0001;
        /// Dim/faint text.
        const DIM = 0b0000_0010;
        /// Underlined text.
        const UNDERLINE = 0b0000_0100;
        /// Reversed colors (fg/bg swapped).
        const REVERSED = 0b0000_1000;
    }
}

impl std::fmt::Debug for Attrs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// An opaque style tag: optional foreground color plus attribute flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color, `None` for the terminal default.
    pub fg: Option<Color>,
    /// Attribute flags.
    pub attrs: Attrs,
}

impl Style {
    /// The unstyled tag (terminal default foreground, no attributes).
    pub const PLAIN: Self = Self {
        fg: None,
        attrs: Attrs::empty(),
    };

    /// Create a style with just a foreground color.
    #[inline]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            attrs: Attrs::empty(),
        }
    }

    /// Add attribute flags (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Whether this is the unstyled tag.
    ///
    /// Plain cells are emitted bare, with no SGR wrapping.
    #[inline]
    pub const fn is_plain(&self) -> bool {
        self.fg.is_none() && self.attrs.is_empty()
    }
}

/// A single grid cell: one printable glyph and its style tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    glyph: char,
    style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell (space, unstyled). This is what `Grid::clear`
    /// resets every position to.
    pub const EMPTY: Self = Self {
        glyph: ' ',
        style: Style::PLAIN,
    };

    /// Create an unstyled cell.
    #[inline]
    pub const fn new(glyph: char) -> Self {
        Self {
            glyph,
            style: Style::PLAIN,
        }
    }

    /// Create a cell with an explicit style tag.
    #[inline]
    pub const fn styled(glyph: char, style: Style) -> Self {
        Self { glyph, style }
    }

    /// Get the glyph.
    #[inline]
    pub const fn glyph(&self) -> char {
        self.glyph
    }

    /// Get the style tag.
    #[inline]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, color: Color) -> Self {
        self.style.fg = Some(color);
        self
    }

    /// Set the attribute flags (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.style.attrs = attrs;
        self
    }

    /// Reset the cell to empty.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_is_blank_unstyled() {
        let cell = Cell::default();
        assert_eq!(cell.glyph(), ' ');
        assert!(cell.style().is_plain());
        assert_eq!(cell, Cell::EMPTY);
    }

    #[test]
    fn test_cell_builder_pattern() {
        let cell = Cell::new('@')
            .with_fg(Color::BrightRed)
            .with_attrs(Attrs::BOLD);

        assert_eq!(cell.glyph(), '@');
        assert_eq!(cell.style().fg, Some(Color::BrightRed));
        assert!(cell.style().attrs.contains(Attrs::BOLD));
        assert!(!cell.style().is_plain());
    }

    #[test]
    fn test_cell_equality_includes_style() {
        let a = Cell::new('x').with_fg(Color::Green);
        let b = Cell::new('x').with_fg(Color::Green);
        let c = Cell::new('x').with_fg(Color::Blue);
        let d = Cell::new('x');

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_named_color_codes() {
        assert_eq!(Color::Black.sgr_param(), Some(30));
        assert_eq!(Color::White.sgr_param(), Some(37));
        assert_eq!(Color::BrightRed.sgr_param(), Some(91));
        assert_eq!(Color::BrightWhite.sgr_param(), Some(97));
        assert_eq!(Color::Rgb(1, 2, 3).sgr_param(), None);
    }

    #[test]
    fn test_attrs_bitflags() {
        let attrs = Attrs::BOLD | Attrs::REVERSED;
        assert!(attrs.contains(Attrs::BOLD));
        assert!(attrs.contains(Attrs::REVERSED));
        assert!(!attrs.contains(Attrs::DIM));
    }

    #[test]
    fn test_cell_reset() {
        let mut cell = Cell::new('#').with_fg(Color::Cyan);
        cell.reset();
        assert_eq!(cell, Cell::EMPTY);
    }
}
