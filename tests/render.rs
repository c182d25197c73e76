//! End-to-end rendering scenarios over the public API.

use gridbox::{Grid, RenderError, RenderOptions, render_to_string};
use num_complex::Complex64;
use pretty_assertions::assert_eq;
use unicode_width::UnicodeWidthStr;

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

#[test]
fn integer_vector_is_boxed_and_right_justified() {
    let grid = Grid::from_vec(vec![-1i64, 0, 12]);
    let text = render_to_string(&grid, &RenderOptions::default()).unwrap();
    assert_eq!(
        text,
        ["┌╌╌╌╌╌╌╌╌┐", "┊-1  0 12┊", "└╌╌╌╌╌╌╌╌┘"].join("\n")
    );
}

#[test]
fn real_vector_aligns_decimal_points() {
    let grid = Grid::from_vec(vec![1.5f64, -2.25]);
    let text = render_to_string(&grid, &RenderOptions::default()).unwrap();
    assert_eq!(
        text,
        ["┌╌╌╌╌╌╌╌╌╌╌╌┐", "┊ 1.5  -2.25┊", "└╌╌╌╌╌╌╌╌╌╌╌┘"].join("\n")
    );
    // Entries are " 1.5 " and "-2.25": both decimal points sit two columns
    // into their own entry, one entry width plus the joining space apart.
    let content = lines(&text)[1];
    let dot_positions: Vec<usize> = content
        .chars()
        .enumerate()
        .filter(|(_, c)| *c == '.')
        .map(|(i, _)| i)
        .collect();
    assert_eq!(dot_positions, vec![3, 9]);
}

#[test]
fn max_precision_caps_fractional_digits() {
    let grid = Grid::from_vec(vec![3.14159f64]);
    let options = RenderOptions::default().with_max_precision(2);
    let text = render_to_string(&grid, &options).unwrap();
    assert_eq!(text, ["┌╌╌╌╌┐", "┊3.14┊", "└╌╌╌╌┘"].join("\n"));
}

#[test]
fn two_dim_grid_stacks_rows_in_a_solid_box() {
    let grid = Grid::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]]).unwrap();
    let text = render_to_string(&grid, &RenderOptions::default()).unwrap();
    assert_eq!(
        text,
        ["┌─────┐", "│1 2 3│", "│4 5 6│", "└─────┘"].join("\n")
    );
}

#[test]
fn two_dim_grid_with_boxed_rows() {
    let grid = Grid::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]]).unwrap();
    let options = RenderOptions::default().with_box_inner_1d(true);
    let text = render_to_string(&grid, &options).unwrap();
    assert_eq!(
        text,
        [
            "┌───────┐",
            "│┌╌╌╌╌╌┐│",
            "│┊1 2 3┊│",
            "│└╌╌╌╌╌┘│",
            "│┌╌╌╌╌╌┐│",
            "│┊4 5 6┊│",
            "│└╌╌╌╌╌┘│",
            "└───────┘",
        ]
        .join("\n")
    );
}

#[test]
fn two_dim_grid_with_bracketed_rows() {
    let grid = Grid::from_rows(vec![vec![1i64, 2], vec![3, 4]]).unwrap();
    let options = RenderOptions::default().with_bracket_inner_1d(true);
    let text = render_to_string(&grid, &options).unwrap();
    assert_eq!(text, ["┌─────┐", "│[1 2]│", "│[3 4]│", "└─────┘"].join("\n"));
}

#[test]
fn three_dim_grid_stacks_planes_side_by_side() {
    let grid = Grid::from_shape_vec(vec![2, 2, 2], (1i64..=8).collect()).unwrap();
    let text = render_to_string(&grid, &RenderOptions::default()).unwrap();
    assert_eq!(
        text,
        [
            "┌╌╌╌╌╌╌╌╌╌╌┐",
            "┊┌───┐┌───┐┊",
            "┊│1 2││5 6│┊",
            "┊│3 4││7 8│┊",
            "┊└───┘└───┘┊",
            "└╌╌╌╌╌╌╌╌╌╌┘",
        ]
        .join("\n")
    );
}

#[test]
fn three_dim_grid_all_solid_without_dot_odds() {
    let grid = Grid::from_shape_vec(vec![2, 2, 2], (1i64..=8).collect()).unwrap();
    let options = RenderOptions::default().with_dot_odds(false);
    let text = render_to_string(&grid, &options).unwrap();
    assert_eq!(
        text,
        [
            "┌──────────┐",
            "│┌───┐┌───┐│",
            "││1 2││5 6││",
            "││3 4││7 8││",
            "│└───┘└───┘│",
            "└──────────┘",
        ]
        .join("\n")
    );
}

#[test]
fn complex_vector_aligns_both_components() {
    let grid = Grid::from_vec(vec![Complex64::new(1.5, 2.0), Complex64::new(-1.0, -0.5)]);
    let text = render_to_string(&grid, &RenderOptions::default()).unwrap();
    assert_eq!(
        text,
        [
            "┌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌┐",
            "┊ 1.5+2. j -1. -0.5j┊",
            "└╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌╌┘",
        ]
        .join("\n")
    );
}

#[test]
fn every_output_line_has_the_same_display_width() {
    let grid = Grid::from_shape_vec(vec![2, 3, 2], (0i64..12).map(|v| v * 7 - 40).collect()).unwrap();
    let text = render_to_string(&grid, &RenderOptions::default()).unwrap();
    let widths: Vec<usize> = lines(&text).iter().map(|l| l.width()).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]), "ragged output: {widths:?}");
}

#[test]
fn four_dim_outer_box_is_solid() {
    let grid = Grid::from_shape_vec(vec![1, 2, 1, 2], (1i64..=4).collect()).unwrap();
    let text = render_to_string(&grid, &RenderOptions::default()).unwrap();
    let first = lines(&text)[0];
    assert!(first.starts_with('┌'));
    assert!(first.contains('─'), "even-depth outer box must be solid: {first}");
}

#[test]
fn boolean_grid_is_rejected() {
    let grid = Grid::from_vec(vec![true, false]);
    let err = render_to_string(&grid, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, RenderError::UnsupportedKind(_)));
}

#[test]
fn ragged_rows_are_rejected() {
    let err = Grid::from_rows(vec![vec![1i64, 2], vec![3]]).unwrap_err();
    assert!(matches!(err, RenderError::InvalidInput(_)));
}

#[test]
fn nan_fails_instead_of_misaligning() {
    let grid = Grid::from_vec(vec![1.0f64, f64::NAN]);
    let err = render_to_string(&grid, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, RenderError::MalformedEntry { .. }));
}
