//! Minimal textual representations of scalars.
//!
//! [`Scalar`] is the seam between numeric values and the aligner: it turns
//! one scalar into the shortest text form the part grammar understands,
//! capped at a precision bound. The grammar and these producers must stay
//! in sync; the aligner's parser rejects anything that drifts.
//!
//! Real numbers use fixed notation for `1e-4 <= |v| < 1e8` (and for zero)
//! and scientific notation outside that range, with the minimum number of
//! fractional digits after rounding to at most `max_precision` digits. The
//! integer part always carries its trailing decimal point (`1.`, `-0.5`),
//! and exponents are signed with at least two digits (`1.5e-05`).

use num_complex::{Complex32, Complex64};

use crate::types::ScalarKind;

/// Largest magnitude rendered in fixed notation.
const FIXED_MAX: f64 = 1e8;
/// Smallest nonzero magnitude rendered in fixed notation.
const FIXED_MIN: f64 = 1e-4;

/// A value the entry formatter can render.
///
/// `KIND` selects the decomposition pattern; `minimal_text` produces the
/// text that pattern is applied to.
pub trait Scalar {
    /// The scalar kind, fixed per implementing type.
    const KIND: ScalarKind;

    /// The minimal text form, showing at most `max_precision` fractional
    /// digits.
    fn minimal_text(&self, max_precision: usize) -> String;
}

macro_rules! impl_int_scalar {
    ($($t:ty),+ $(,)?) => {$(
        impl Scalar for $t {
            const KIND: ScalarKind = ScalarKind::Int;

            fn minimal_text(&self, _max_precision: usize) -> String {
                self.to_string()
            }
        }
    )+};
}

impl_int_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Scalar for f64 {
    const KIND: ScalarKind = ScalarKind::Real;

    fn minimal_text(&self, max_precision: usize) -> String {
        real_minimal(*self, max_precision)
    }
}

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::Real;

    fn minimal_text(&self, max_precision: usize) -> String {
        real_minimal(f64::from(*self), max_precision)
    }
}

impl Scalar for Complex64 {
    const KIND: ScalarKind = ScalarKind::Complex;

    fn minimal_text(&self, max_precision: usize) -> String {
        complex_minimal(self.re, self.im, max_precision)
    }
}

impl Scalar for Complex32 {
    const KIND: ScalarKind = ScalarKind::Complex;

    fn minimal_text(&self, max_precision: usize) -> String {
        complex_minimal(f64::from(self.re), f64::from(self.im), max_precision)
    }
}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn minimal_text(&self, _max_precision: usize) -> String {
        self.to_string()
    }
}

// =============================================================================
// Real Formatting
// =============================================================================

/// Format a real number in its minimal form.
///
/// Non-finite values fall through as `NaN`/`inf`; they do not match the
/// real grammar, so the aligner reports them instead of mis-aligning the
/// grid.
fn real_minimal(v: f64, max_precision: usize) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let magnitude = v.abs();
    if magnitude != 0.0 && (magnitude >= FIXED_MAX || magnitude < FIXED_MIN) {
        scientific(v, max_precision)
    } else {
        fixed(v, max_precision)
    }
}

/// Fixed notation: round to at most `prec` fractional digits, then drop
/// trailing zeros. The decimal point stays attached to the integer part.
fn fixed(v: f64, prec: usize) -> String {
    let mut s = format!("{v:.prec$}");
    if !s.contains('.') {
        s.push('.');
    }
    while s.ends_with('0') {
        s.pop();
    }
    s
}

/// Scientific notation with a signed, zero-padded two-digit exponent.
fn scientific(v: f64, prec: usize) -> String {
    let s = format!("{v:.prec$e}");
    let (mantissa, exponent) = s.split_once('e').unwrap();
    let mut m = mantissa.to_string();
    if !m.contains('.') {
        m.push('.');
    }
    while m.ends_with('0') {
        m.pop();
    }
    let e: i32 = exponent.parse().unwrap_or(0);
    let sign = if e < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", m, sign, e.unsigned_abs())
}

/// Real + imaginary with a mandatory middle sign and the trailing `j`.
fn complex_minimal(re: f64, im: f64, max_precision: usize) -> String {
    let re = real_minimal(re, max_precision);
    let im = real_minimal(im, max_precision);
    let sign = if im.starts_with('-') { "" } else { "+" };
    format!("{re}{sign}{im}j")
}

// =============================================================================
// Tests
// =============================================================================
