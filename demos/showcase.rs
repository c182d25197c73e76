//! Showcase - boxed rendering across dimensionalities
//!
//! Renders integer, real, and complex grids of increasing depth with the
//! default options, plus a few option variations.
//!
//! Run with: cargo run --example showcase

use gridbox::{Grid, RenderError, RenderOptions, render};
use num_complex::Complex64;

fn main() -> Result<(), RenderError> {
    let options = RenderOptions::default();

    println!("=== 1-D integer vector (box forced on) ===");
    render(&Grid::from_vec(vec![-18i64, -3, 0, 7, 12]), &options)?;

    println!("\n=== 2-D real grid ===");
    let reals = Grid::from_rows(vec![
        vec![1.5f64, -2.25, 0.5],
        vec![-10.0, 3.14159, 0.0],
    ])?;
    render(&reals, &options)?;

    println!("\n=== 3-D integer grid (6 x 3 x 2) ===");
    let cube = Grid::from_shape_vec(vec![6, 3, 2], (0i64..36).map(|v| v * 5 - 90).collect())?;
    render(&cube, &options)?;

    println!("\n=== complex vector ===");
    let complexes = Grid::from_vec(vec![
        Complex64::new(1.5, 2.0),
        Complex64::new(-1.0, -0.5),
        Complex64::new(0.0, 1.0),
    ]);
    render(&complexes, &options)?;

    println!("\n=== 2-D with bracketed rows ===");
    let ints = Grid::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]])?;
    render(&ints, &options.with_bracket_inner_1d(true))?;

    println!("\n=== 2-D with boxed rows, solid borders everywhere ===");
    render(&ints, &options.with_box_inner_1d(true).with_dot_odds(false))?;

    Ok(())
}
