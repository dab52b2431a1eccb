use num_bigint::BigInt;
use num_traits::Zero;
use thiserror::Error;

/**
 * base.rs decodes digit strings written in an arbitrary radix (2 through 36)
 * into exact arbitrary precision integers. digits are 0-9 then a-z, case
 * insensitive, most significant digit first.
 */

// smallest and largest supported radix
pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unsupported base {base}, expected {}..={}", MIN_BASE, MAX_BASE)]
    UnsupportedBase { base: u32 },
    #[error("invalid digit '{ch}' at position {pos} for base {base}")]
    InvalidDigit { ch: char, pos: usize, base: u32 },
}

// true if base lies in [MIN_BASE, MAX_BASE]
pub fn is_supported_base(base: u32) -> bool {
    (MIN_BASE..=MAX_BASE).contains(&base)
}

// value of a single digit character under base, if any
pub fn digit_value(ch: char, base: u32) -> Option<u32> {
    // to_digit(36) covers the whole 0-9a-z alphabet in either case
    ch.to_digit(MAX_BASE).filter(|d| *d < base)
}

/// Decodes `digits` as a non-negative integer written in `base`.
///
/// Surrounding whitespace is ignored. No sign prefix is recognized, so `-`
/// is reported as an invalid digit like any other foreign character.
pub fn decode(digits: &str, base: u32) -> Result<BigInt, DecodeError> {
    if !is_supported_base(base) {
        return Err(DecodeError::UnsupportedBase { base });
    }

    // positional accumulation, most significant digit first
    let radix = BigInt::from(base);
    digits
        .trim()
        .chars()
        .enumerate()
        .try_fold(BigInt::zero(), |acc, (pos, ch)| {
            digit_value(ch, base)
                .map(|d| acc * &radix + d)
                .ok_or(DecodeError::InvalidDigit { ch, pos, base })
        })
}
