//! # gridbox
//!
//! APL-style boxed pretty-printing for n-dimensional numeric grids.
//!
//! A grid of integers, reals, or complex numbers is rendered as a single
//! block of text: every entry is padded so decimal points, signs, and
//! exponent markers share columns, and nesting depth is drawn with
//! alternating box borders — vertical stacks in solid boxes at even
//! depths, side-by-side stacks in dashed boxes at odd depths.
//!
//! ## Pipeline
//!
//! ```text
//! Grid<T> ── entry::align_entries ──▶ Grid<String> ── layout::compose ──▶ Block ──▶ text
//! ```
//!
//! The pipeline is pure and stateless: entry alignment never looks at
//! layout, layout only needs equal-width strings, and nothing survives an
//! invocation.
//!
//! ## Example
//!
//! ```
//! use gridbox::{Grid, RenderOptions, render_to_string};
//!
//! let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
//! let text = render_to_string(&grid, &RenderOptions::default()).unwrap();
//! assert_eq!(text, "┌─────┐\n│1 2 3│\n│4 5 6│\n└─────┘");
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Scalar kinds, border styles, render options
//! - [`grid`] - Flat-storage n-dimensional grids and views
//! - [`entry`] - Entry alignment (minimal text forms, part grammar, padding)
//! - [`layout`] - Blocks, box/stack operations, depth-parity recursion
//! - [`render`] - Public entry points and buffered output

pub mod entry;
pub mod error;
pub mod grid;
pub mod layout;
pub mod render;
pub mod types;

// Re-export commonly used items
pub use entry::{Scalar, align_entries};
pub use error::RenderError;
pub use grid::{Grid, GridView};
pub use layout::{Block, compose, hstack, vstack};
pub use render::{OutputBuffer, render, render_to, render_to_string};
pub use types::{BorderStyle, Justify, RenderOptions, ScalarKind};
