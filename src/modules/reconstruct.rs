use crate::modules::input::ParsedInput;
use crate::modules::univariate_poly::Polynomial;
use num_bigint::BigInt;
use num_traits::Zero;
use tracing::{info, warn};

/**
 * reconstruct.rs applies the threshold rule: the first m = k - 1 roots fix a
 * monic polynomial of degree m, every later root is checked against it.
 * thresholds of 0 or 1 and short root lists are ordinary outcomes, not errors.
 */

// evaluation of the built polynomial at one extra root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub index: usize,
    pub root: BigInt,
    pub value: BigInt,
}

impl Verification {
    pub fn passed(&self) -> bool {
        self.value.is_zero()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NothingToBuild { k: usize },
    InsufficientRoots { degree: usize, available: usize },
    Built { degree: usize, polynomial: Polynomial, checks: Vec<Verification> },
}

// evaluate p at every root, numbering them from first_index
pub fn verify(polynomial: &Polynomial, roots: &[BigInt], first_index: usize) -> Vec<Verification> {
    roots
        .iter()
        .zip(polynomial.eval_domain(roots))
        .enumerate()
        .map(|(i, (root, value))| Verification {
            index: first_index + i,
            root: root.clone(),
            value,
        })
        .collect()
}

/// Builds the monic polynomial from the first `k - 1` roots and verifies the rest.
pub fn reconstruct(input: &ParsedInput) -> Outcome {
    let degree = match input.degree() {
        Some(m) if m > 0 => m,
        _ => return Outcome::NothingToBuild { k: input.k },
    };

    let available = input.roots.len();
    if available < degree {
        return Outcome::InsufficientRoots { degree, available };
    }

    let (used, extra) = input.roots.split_at(degree);
    let polynomial = Polynomial::from_roots(used);
    info!(degree, extra = extra.len(), "built monic polynomial");

    let checks = verify(&polynomial, extra, degree + 1);
    for check in checks.iter().filter(|c| !c.passed()) {
        warn!(index = check.index, root = %check.root, value = %check.value, "extra root does not vanish");
    }

    Outcome::Built { degree, polynomial, checks }
}
