//! Core types for gridbox.
//!
//! These types define the vocabulary the rest of the crate builds on:
//! scalar kinds, part justification, border styles, and render options.

use std::fmt;

// =============================================================================
// Scalar Kinds
// =============================================================================

/// The kind of scalar a grid holds.
///
/// The kind selects the decomposition pattern used when aligning entries.
/// Only `Int`, `Real`, and `Complex` are renderable; other kinds are
/// representable so they can be rejected with a proper error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ScalarKind {
    /// Signed digit sequence, one part.
    Int = 0,
    /// Integer, fraction, and optional exponent parts.
    Real = 1,
    /// Two real-number triples plus a trailing imaginary marker.
    Complex = 2,
    /// Not renderable; kept so boolean grids fail with a clear error.
    Bool = 3,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "integer",
            Self::Real => "real",
            Self::Complex => "complex",
            Self::Bool => "boolean",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Part Justification
// =============================================================================

/// How a part is padded out to its column width.
///
/// Fixed per part role, independent of the data: integer-like parts are
/// right-justified so signs and decimal points line up, fraction and
/// exponent parts are left-justified so digits grow away from the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Right,
}

// =============================================================================
// Border Styles
// =============================================================================

/// Border style for a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BorderStyle {
    /// ─ │ ┌ ┐ └ ┘
    #[default]
    Single = 0,
    /// ╌ ┊ ┌ ┐ └ ┘
    Dashed = 1,
}

impl BorderStyle {
    /// Get the border characters for this style.
    ///
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(&self) -> (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str) {
        match self {
            Self::Single => ("─", "│", "┌", "┐", "┘", "└"),
            Self::Dashed => ("╌", "┊", "┌", "┐", "┘", "└"),
        }
    }
}

// =============================================================================
// Render Options
// =============================================================================

/// Options controlling entry precision and box styling.
///
/// All options are independently toggleable and have defaults matching the
/// classic APL-style display: dashed borders on the side-by-side (odd-depth)
/// boxes, bare inner rows.
///
/// # Examples
///
/// ```
/// use gridbox::RenderOptions;
///
/// let options = RenderOptions::default()
///     .with_max_precision(2)
///     .with_dot_odds(false);
/// assert_eq!(options.max_precision, 2);
/// assert!(!options.dot_odds);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Upper bound on fractional digits shown per scalar.
    pub max_precision: usize,
    /// Use a dashed border for odd-dimensional (side-by-side stacked) boxes.
    pub dot_odds: bool,
    /// Wrap bare 1-D rows in square brackets instead of leaving them open.
    pub bracket_inner_1d: bool,
    /// Wrap 1-D rows in a full border box. Forced on whenever the whole
    /// input is exactly 1-D, so a bare vector is still visibly bounded.
    pub box_inner_1d: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_precision: 4,
            dot_odds: true,
            bracket_inner_1d: false,
            box_inner_1d: false,
        }
    }
}

impl RenderOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upper bound on fractional digits shown per scalar.
    pub fn with_max_precision(mut self, max_precision: usize) -> Self {
        self.max_precision = max_precision;
        self
    }

    /// Set whether odd-dimensional boxes use a dashed border.
    pub fn with_dot_odds(mut self, dot_odds: bool) -> Self {
        self.dot_odds = dot_odds;
        self
    }

    /// Set whether bare 1-D rows are wrapped in square brackets.
    pub fn with_bracket_inner_1d(mut self, bracket_inner_1d: bool) -> Self {
        self.bracket_inner_1d = bracket_inner_1d;
        self
    }

    /// Set whether 1-D rows are wrapped in a full border box.
    pub fn with_box_inner_1d(mut self, box_inner_1d: bool) -> Self {
        self.box_inner_1d = box_inner_1d;
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
