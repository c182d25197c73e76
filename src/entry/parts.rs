//! Table-driven part grammar.
//!
//! Each renderable scalar kind has a fixed pattern of part tokens; applying
//! the pattern to an entry's minimal text splits it into the justified
//! parts the aligner pads. The tokens consume prefixes of the text and the
//! whole text must be consumed — a partial match is a malformed entry, not
//! a shorter one.

use crate::error::RenderError;
use crate::types::{Justify, ScalarKind};

// =============================================================================
// Tokens
// =============================================================================

/// One token of a kind's part pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PartToken {
    /// Optional sign followed by one or more digits.
    SignedDigits,
    /// Sign (optional or required), one or more digits, and the decimal
    /// point that stays attached to the integer part.
    IntDot { sign_required: bool },
    /// Zero or more fractional digits.
    Fraction,
    /// `e`, a mandatory sign, and one or more digits; absent entirely when
    /// the next character is not `e`.
    Exponent,
    /// The literal `j` suffix.
    ImaginaryUnit,
}

impl PartToken {
    /// Split `input` into this token's part and the remaining text.
    ///
    /// Returns `None` when the token cannot be matched at the front of
    /// `input`. Optional tokens (`Fraction`, a missing `Exponent`) match an
    /// empty part rather than failing.
    fn take<'a>(&self, input: &'a str) -> Option<(&'a str, &'a str)> {
        let bytes = input.as_bytes();
        match self {
            Self::SignedDigits => {
                let sign = usize::from(matches!(bytes.first(), Some(&(b'+' | b'-'))));
                let digits = digit_run(&bytes[sign..]);
                if digits == 0 {
                    return None;
                }
                Some(input.split_at(sign + digits))
            }
            Self::IntDot { sign_required } => {
                let sign = usize::from(matches!(bytes.first(), Some(&(b'+' | b'-'))));
                if *sign_required && sign == 0 {
                    return None;
                }
                let digits = digit_run(&bytes[sign..]);
                if digits == 0 || bytes.get(sign + digits) != Some(&b'.') {
                    return None;
                }
                Some(input.split_at(sign + digits + 1))
            }
            Self::Fraction => Some(input.split_at(digit_run(bytes))),
            Self::Exponent => {
                if bytes.first() != Some(&b'e') {
                    return Some(("", input));
                }
                if !matches!(bytes.get(1), Some(&(b'+' | b'-'))) {
                    return None;
                }
                let digits = digit_run(&bytes[2..]);
                if digits == 0 {
                    return None;
                }
                Some(input.split_at(2 + digits))
            }
            Self::ImaginaryUnit => {
                if bytes.first() != Some(&b'j') {
                    return None;
                }
                Some(input.split_at(1))
            }
        }
    }
}

/// Length of the leading digit run.
fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// =============================================================================
// Per-Kind Patterns
// =============================================================================

/// One slot of a kind's pattern: the token and its fixed justification.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PartSpec {
    pub token: PartToken,
    pub justify: Justify,
}

const fn part(token: PartToken, justify: Justify) -> PartSpec {
    PartSpec { token, justify }
}

const INT_PARTS: &[PartSpec] = &[part(PartToken::SignedDigits, Justify::Right)];

const REAL_PARTS: &[PartSpec] = &[
    part(PartToken::IntDot { sign_required: false }, Justify::Right),
    part(PartToken::Fraction, Justify::Left),
    part(PartToken::Exponent, Justify::Left),
];

const COMPLEX_PARTS: &[PartSpec] = &[
    part(PartToken::IntDot { sign_required: false }, Justify::Right),
    part(PartToken::Fraction, Justify::Left),
    part(PartToken::Exponent, Justify::Left),
    part(PartToken::IntDot { sign_required: true }, Justify::Right),
    part(PartToken::Fraction, Justify::Left),
    part(PartToken::Exponent, Justify::Left),
    part(PartToken::ImaginaryUnit, Justify::Right),
];

/// The part pattern for a kind, or `None` if the kind is not renderable.
pub(crate) fn parts_for(kind: ScalarKind) -> Option<&'static [PartSpec]> {
    match kind {
        ScalarKind::Int => Some(INT_PARTS),
        ScalarKind::Real => Some(REAL_PARTS),
        ScalarKind::Complex => Some(COMPLEX_PARTS),
        ScalarKind::Bool => None,
    }
}

/// Split an entry's minimal text into its kind's parts.
///
/// Fails with [`RenderError::MalformedEntry`] when a token cannot be
/// matched or the pattern leaves text unconsumed.
pub(crate) fn split_parts(kind: ScalarKind, text: &str) -> Result<Vec<String>, RenderError> {
    let specs = parts_for(kind).ok_or(RenderError::UnsupportedKind(kind))?;
    let malformed = || RenderError::MalformedEntry {
        kind,
        text: text.to_string(),
    };

    let mut rest = text;
    let mut parts = Vec::with_capacity(specs.len());
    for spec in specs {
        let (piece, remaining) = spec.token.take(rest).ok_or_else(malformed)?;
        parts.push(piece.to_string());
        rest = remaining;
    }
    if !rest.is_empty() {
        return Err(malformed());
    }
    Ok(parts)
}

// =============================================================================
// Tests
// =============================================================================
