//! Entry alignment.
//!
//! Converts a grid of scalars into a grid of equal-length strings whose
//! decimal points, signs, and exponent markers share columns across the
//! whole grid. The flow is decompose → measure → pad → rebuild:
//!
//! 1. Every scalar's minimal text form is split into its kind's parts.
//! 2. Each part role's maximum width across the grid is measured.
//! 3. Every entry is rebuilt by padding each part to its role's width with
//!    the role's fixed justification, then concatenating in role order.
//!
//! The output grid always has the input's shape.

mod parts;
pub mod scalar;

pub use scalar::Scalar;

use crate::error::RenderError;
use crate::grid::Grid;
use crate::types::Justify;

use parts::PartSpec;

/// Align every entry of a grid into fixed-width, column-aligned strings.
///
/// Fails with [`RenderError::UnsupportedKind`] before any entry is
/// processed when the scalar kind is not renderable, and with
/// [`RenderError::MalformedEntry`] when an entry's text form does not
/// match its kind's grammar.
pub fn align_entries<T: Scalar>(
    grid: &Grid<T>,
    max_precision: usize,
) -> Result<Grid<String>, RenderError> {
    let specs = parts::parts_for(T::KIND).ok_or(RenderError::UnsupportedKind(T::KIND))?;

    let mut split = Vec::with_capacity(grid.len());
    for value in grid.iter() {
        let text = value.minimal_text(max_precision);
        split.push(parts::split_parts(T::KIND, &text)?);
    }

    // Parts are ASCII by grammar, so byte length is column width here.
    let mut widths = vec![0usize; specs.len()];
    for entry_parts in &split {
        for (width, piece) in widths.iter_mut().zip(entry_parts) {
            *width = (*width).max(piece.len());
        }
    }

    let entries = split
        .iter()
        .map(|entry_parts| rebuild(entry_parts, &widths, specs))
        .collect();
    Grid::from_shape_vec(grid.shape().to_vec(), entries)
}

/// Pad each part to its role's width and concatenate in role order.
fn rebuild(entry_parts: &[String], widths: &[usize], specs: &[PartSpec]) -> String {
    let total: usize = widths.iter().sum();
    let mut entry = String::with_capacity(total);
    for ((piece, &width), spec) in entry_parts.iter().zip(widths).zip(specs) {
        let pad = width - piece.len();
        match spec.justify {
            Justify::Right => {
                for _ in 0..pad {
                    entry.push(' ');
                }
                entry.push_str(piece);
            }
            Justify::Left => {
                entry.push_str(piece);
                for _ in 0..pad {
                    entry.push(' ');
                }
            }
        }
    }
    entry
}

// =============================================================================
// Tests
// =============================================================================
