//! Public entry points and buffered output.
//!
//! Rendering is align → compose → join: the entry formatter produces the
//! aligned-string grid, the layout engine folds it into a block, and the
//! joined lines are written in one batched, flushed write. The text is
//! fully composed before the first byte goes out, so a failing pipeline
//! never leaves partial output behind.

use std::io::{self, Write};

use crate::entry::{self, Scalar};
use crate::error::RenderError;
use crate::grid::Grid;
use crate::layout;
use crate::types::RenderOptions;

// =============================================================================
// OutputBuffer
// =============================================================================

/// A buffer that accumulates output for batch writing.
///
/// Instead of many small writes to stdout, everything is accumulated and
/// flushed once.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no data.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// The accumulated bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Flush the buffer to stdout in a single locked write.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.data)?;
        stdout.flush()?;
        self.data.clear();
        Ok(())
    }

    /// Flush the buffer to a writer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        self.data.clear();
        Ok(())
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Render a grid as newline-joined text.
///
/// When the whole input is exactly 1-D, `box_inner_1d` is forced on so a
/// bare vector is still visibly bounded; nested 1-D rows inside a deeper
/// grid obey the caller's options as given.
pub fn render_to_string<T: Scalar>(
    grid: &Grid<T>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let mut options = *options;
    if grid.ndim() == 1 {
        options.box_inner_1d = true;
    }
    let aligned = entry::align_entries(grid, options.max_precision)?;
    let block = layout::compose(aligned.view(), &options);
    Ok(block.into_lines().join("\n"))
}

/// Render a grid to standard output, followed by a newline.
///
/// Writing to stdout is the only observable side effect; the whole text is
/// batched through an [`OutputBuffer`] and flushed in one write.
pub fn render<T: Scalar>(grid: &Grid<T>, options: &RenderOptions) -> Result<(), RenderError> {
    let text = render_to_string(grid, options)?;
    let mut out = OutputBuffer::new();
    out.write_str(&text);
    out.write_str("\n");
    out.flush_stdout()?;
    Ok(())
}

/// Render a grid to an arbitrary writer, followed by a newline.
pub fn render_to<T: Scalar, W: Write>(
    grid: &Grid<T>,
    options: &RenderOptions,
    writer: &mut W,
) -> Result<(), RenderError> {
    let text = render_to_string(grid, options)?;
    let mut out = OutputBuffer::new();
    out.write_str(&text);
    out.write_str("\n");
    out.flush_to(writer)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
