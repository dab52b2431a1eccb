use crate::modules::pretty;
use std::ops::Mul;
use std::fmt;
use num_bigint::BigInt;
use num_traits::{Zero, One};


/**
 * univariate_poly.rs implements exact polynomial arithmetic over the integers:
 * convolution, horner evaluation, and construction of the monic polynomial
 * vanishing on a given list of roots. coefficients are arbitrary precision,
 * nothing is ever reduced or truncated.
 */

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Polynomial {
    pub coeffs: Vec<BigInt>,
}

// multiply two coefficient sequences by convolution
pub fn multiply(a: &[BigInt], b: &[BigInt]) -> Vec<BigInt> {

    // an empty operand is the zero polynomial
    if a.is_empty() || b.is_empty() { return vec![]; }

    // accumulate every pairwise product into degree i + j
    a.iter().enumerate().fold(
        vec![BigInt::zero(); a.len() + b.len() - 1],
        |mut acc, (i, c1)| {
            for (j, c2) in b.iter().enumerate() {
                acc[i + j] += c1 * c2;
            }
            acc
        },
    )
}

// evaluate coefficient sequence at x with horner's method
pub fn evaluate(coeffs: &[BigInt], x: &BigInt) -> BigInt {
    coeffs.iter().rev().fold(BigInt::zero(), |acc, c| acc * x + c)
}

// polynomial constructor
impl Polynomial {

    // coefficients stored lowest to highest degree
    pub fn new(coeffs: Vec<BigInt>) -> Self {
        Polynomial { coeffs }
    }

    // the constant polynomial 1, identity for multiplication
    pub fn one() -> Self {
        Polynomial { coeffs: vec![BigInt::one()] }
    }

    // linear factor (x - root)
    pub fn linear_factor(root: &BigInt) -> Self {
        Polynomial { coeffs: vec![-root, BigInt::one()] }
    }

    /// Builds the monic polynomial `(x - r_1)(x - r_2)...(x - r_m)`.
    ///
    /// The result has degree `roots.len()` and leading coefficient 1. Repeated
    /// roots keep their multiplicity. An empty root list gives the constant 1.
    pub fn from_roots(roots: &[BigInt]) -> Self {
        roots.iter().fold(Polynomial::one(), |acc, r| &acc * &Polynomial::linear_factor(r))
    }

    // evaluate polynomial at x
    pub fn eval(&self, x: &BigInt) -> BigInt {
        evaluate(&self.coeffs, x)
    }

    // evaluate over a list of points
    pub fn eval_domain(&self, domain: &[BigInt]) -> Vec<BigInt> {
        domain.iter().map(|x| self.eval(x)).collect()
    }

    // get degree of polynomial, ignoring zero high terms; the zero polynomial reports 0
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|c| !c.is_zero()).unwrap_or(0)
    }

    // coefficient of the highest non zero term
    pub fn leading_coefficient(&self) -> BigInt {
        self.coeffs.iter().rev().find(|c| !c.is_zero()).cloned().unwrap_or_else(BigInt::zero)
    }

    // checks for monic polynomial
    pub fn is_monic(&self) -> bool {
        self.leading_coefficient().is_one()
    }

    // coefficients from highest degree down to the constant term
    pub fn coefficients_desc(&self) -> impl Iterator<Item = &BigInt> {
        self.coeffs.iter().rev()
    }
}

// polynomial multiplication
impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl<'a, 'b> Mul<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &'b Polynomial) -> Polynomial {
        Polynomial::new(multiply(&self.coeffs, &rhs.coeffs))
    }
}

// prints formatted polynomial, highest degree first
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", pretty::format(&self.coeffs))
    }
}
