use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};

/**
 * pretty.rs renders a low to high coefficient sequence as a sum of terms,
 * highest degree first, e.g. [6, -5, 1] -> "x^2 - 5*x + 6". zero terms are
 * dropped and unit coefficients are left implicit.
 */

// a single term without its sign
fn term(abs: &BigInt, degree: usize) -> String {
    let var = match degree {
        0 => return abs.to_string(),
        1 => "x".to_string(),
        d => format!("x^{}", d),
    };
    if abs.is_one() { var } else { format!("{}*{}", abs, var) }
}

/// Renders `coeffs` (index `i` is the coefficient of `x^i`) as an expression.
///
/// The zero polynomial, including the empty sequence, renders as `"0"`.
pub fn format(coeffs: &[BigInt]) -> String {
    let rendered = coeffs
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, c)| !c.is_zero())
        .fold(String::new(), |mut out, (degree, c)| {
            let negative = c.sign() == Sign::Minus;
            match (out.is_empty(), negative) {
                (true, true) => out.push('-'),
                (true, false) => {}
                (false, true) => out.push_str(" - "),
                (false, false) => out.push_str(" + "),
            }
            out.push_str(&term(&c.abs(), degree));
            out
        });

    if rendered.is_empty() { "0".to_string() } else { rendered }
}
