//! Recursive block layout.
//!
//! A [`Block`] is an ordered list of equal-width text lines. The layout
//! engine folds an aligned-string grid into one block by recursing on the
//! remaining dimensionality:
//!
//! - **0-D**: the entry itself, as a one-line block.
//! - **1-D**: the entries joined by single spaces, optionally bracketed or
//!   boxed.
//! - **N-D**: each slice along the outermost dimension becomes a sub-block;
//!   even depths stack vertically inside a solid box, odd depths stack
//!   side-by-side inside a dashed box (when `dot_odds` is set).
//!
//! Widths are display columns, not bytes, so box-drawing characters keep
//! lines flush.

use unicode_width::UnicodeWidthStr;

use crate::grid::GridView;
use crate::types::{BorderStyle, RenderOptions};

// =============================================================================
// Block
// =============================================================================

/// An ordered sequence of equal-width text lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    lines: Vec<String>,
}

impl Block {
    /// A block holding a single line.
    pub fn line(line: String) -> Self {
        Self { lines: vec![line] }
    }

    /// The lines of this block.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the block, yielding its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of lines.
    #[inline]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Display width of the widest line.
    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| l.width()).max().unwrap_or(0)
    }

    /// Wrap the block in a border box.
    ///
    /// The result is two lines taller and two columns wider: a top border,
    /// each content line padded to the block width between vertical rules,
    /// and a bottom border.
    pub fn boxed(self, style: BorderStyle) -> Self {
        let (h, v, tl, tr, br, bl) = style.chars();
        let width = self.width();
        let fill = h.repeat(width);
        let mut lines = Vec::with_capacity(self.lines.len() + 2);
        lines.push(format!("{tl}{fill}{tr}"));
        for line in self.lines {
            lines.push(format!("{v}{}{v}", pad_to(line, width)));
        }
        lines.push(format!("{bl}{fill}{br}"));
        Self { lines }
    }
}

/// Right-pad a line to a display width.
fn pad_to(mut line: String, width: usize) -> String {
    let current = line.width();
    for _ in current..width {
        line.push(' ');
    }
    line
}

// =============================================================================
// Stacking
// =============================================================================

/// Stack blocks vertically.
///
/// All lines are concatenated in order and padded to the widest line in
/// the combined set.
pub fn vstack(blocks: Vec<Block>) -> Block {
    let lines: Vec<String> = blocks.into_iter().flat_map(Block::into_lines).collect();
    let width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    Block {
        lines: lines.into_iter().map(|l| pad_to(l, width)).collect(),
    }
}

/// Stack blocks side by side.
///
/// Shorter blocks are bottom-padded with blank lines of their own width,
/// then corresponding lines are joined with `spacing` spaces between
/// blocks.
pub fn hstack(blocks: Vec<Block>, spacing: usize) -> Block {
    let height = blocks.iter().map(Block::height).max().unwrap_or(0);
    let gap = " ".repeat(spacing);
    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let mut line = String::new();
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                line.push_str(&gap);
            }
            match block.lines.get(row) {
                Some(l) => line.push_str(l),
                None => line.push_str(&" ".repeat(block.width())),
            }
        }
        lines.push(line);
    }
    Block { lines }
}

// =============================================================================
// Recursive Composition
// =============================================================================

/// Fold an aligned-string grid into a single bordered block.
pub fn compose(view: GridView<'_, String>, options: &RenderOptions) -> Block {
    match view.ndim() {
        0 => Block::line(view.entry().clone()),
        1 => {
            let row = view.entries().join(" ");
            if options.bracket_inner_1d {
                Block::line(format!("[{row}]"))
            } else if options.box_inner_1d {
                Block::line(row).boxed(odd_border(options))
            } else {
                Block::line(row)
            }
        }
        n => {
            let blocks: Vec<Block> = view.outer().map(|sub| compose(sub, options)).collect();
            if n % 2 == 0 {
                vstack(blocks).boxed(BorderStyle::Single)
            } else {
                hstack(blocks, 0).boxed(odd_border(options))
            }
        }
    }
}

/// Border style for odd-depth (side-by-side) boxes.
fn odd_border(options: &RenderOptions) -> BorderStyle {
    if options.dot_odds {
        BorderStyle::Dashed
    } else {
        BorderStyle::Single
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn strings(values: &[&str]) -> Grid<String> {
        Grid::from_vec(values.iter().map(|s| s.to_string()).collect())
    }

    fn block(lines: &[&str]) -> Block {
        Block {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_boxed_invariant() {
        let boxed = block(&["ab", "c"]).boxed(BorderStyle::Single);
        assert_eq!(boxed.lines(), &["┌──┐", "│ab│", "│c │", "└──┘"]);
        assert_eq!(boxed.width(), 4);
        assert_eq!(boxed.height(), 4);
    }

    #[test]
    fn test_boxed_dashed() {
        let boxed = block(&["x"]).boxed(BorderStyle::Dashed);
        assert_eq!(boxed.lines(), &["┌╌┐", "┊x┊", "└╌┘"]);
    }

    #[test]
    fn test_boxed_empty_block() {
        let boxed = Block::default().boxed(BorderStyle::Single);
        assert_eq!(boxed.lines(), &["┌┐", "└┘"]);
    }

    #[test]
    fn test_vstack_pads_to_widest() {
        let stacked = vstack(vec![block(&["aaa"]), block(&["b"])]);
        assert_eq!(stacked.lines(), &["aaa", "b  "]);
    }

    #[test]
    fn test_hstack_bottom_pads() {
        let stacked = hstack(vec![block(&["11", "22"]), block(&["3"])], 0);
        assert_eq!(stacked.lines(), &["113", "22 "]);
    }

    #[test]
    fn test_hstack_spacing() {
        let stacked = hstack(vec![block(&["a"]), block(&["b"])], 2);
        assert_eq!(stacked.lines(), &["a  b"]);
    }

    #[test]
    fn test_compose_zero_dim() {
        let grid = Grid::scalar("7".to_string());
        let composed = compose(grid.view(), &RenderOptions::default());
        assert_eq!(composed.lines(), &["7"]);
    }

    #[test]
    fn test_compose_one_dim_variants() {
        let grid = strings(&["-1", " 0", "12"]);
        let options = RenderOptions::default();
        assert_eq!(compose(grid.view(), &options).lines(), &["-1  0 12"]);

        let bracketed = options.with_bracket_inner_1d(true);
        assert_eq!(compose(grid.view(), &bracketed).lines(), &["[-1  0 12]"]);

        let boxed = options.with_box_inner_1d(true);
        assert_eq!(
            compose(grid.view(), &boxed).lines(),
            &["┌╌╌╌╌╌╌╌╌┐", "┊-1  0 12┊", "└╌╌╌╌╌╌╌╌┘"]
        );

        // Bracketing wins when both toggles are set.
        let both = boxed.with_bracket_inner_1d(true);
        assert_eq!(compose(grid.view(), &both).lines(), &["[-1  0 12]"]);
    }

    #[test]
    fn test_compose_two_dim_solid_box() {
        let grid = Grid::from_shape_vec(
            vec![2, 3],
            ["1", "2", "3", "4", "5", "6"].iter().map(|s| s.to_string()).collect(),
        )
        .unwrap();
        let composed = compose(grid.view(), &RenderOptions::default());
        assert_eq!(
            composed.lines(),
            &["┌─────┐", "│1 2 3│", "│4 5 6│", "└─────┘"]
        );
    }

    #[test]
    fn test_compose_three_dim_dashed_outer() {
        let grid = Grid::from_shape_vec(
            vec![2, 2, 2],
            ["1", "2", "3", "4", "5", "6", "7", "8"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();
        let composed = compose(grid.view(), &RenderOptions::default());
        assert_eq!(
            composed.lines(),
            &[
                "┌╌╌╌╌╌╌╌╌╌╌┐",
                "┊┌───┐┌───┐┊",
                "┊│1 2││5 6│┊",
                "┊│3 4││7 8│┊",
                "┊└───┘└───┘┊",
                "└╌╌╌╌╌╌╌╌╌╌┘",
            ]
        );
    }

    #[test]
    fn test_compose_lines_equal_width() {
        let grid = Grid::from_shape_vec(
            vec![1, 2, 1, 2],
            ["1", "22", "333", "4"].iter().map(|s| s.to_string()).collect(),
        )
        .unwrap();
        let composed = compose(grid.view(), &RenderOptions::default());
        let widths: Vec<_> = composed.lines().iter().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_compose_empty_row() {
        let grid = strings(&[]);
        let options = RenderOptions::default().with_box_inner_1d(true);
        assert_eq!(compose(grid.view(), &options).lines(), &["┌┐", "┊┊", "└┘"]);
    }
}
