use crate::modules::input::ParsedInput;
use crate::modules::reconstruct::Outcome;
use std::fmt;

/**
 * report.rs prints the plain text run report: parsed summary, coefficient
 * line, formatted polynomial, and one line per verified extra root.
 */

pub struct Report<'a> {
    pub input: &'a ParsedInput,
    pub outcome: &'a Outcome,
}

impl<'a> Report<'a> {
    pub fn new(input: &'a ParsedInput, outcome: &'a Outcome) -> Self {
        Report { input, outcome }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (degree, polynomial, checks) = match self.outcome {
            Outcome::NothingToBuild { k } => {
                return writeln!(f, "k must be >= 2 to build a polynomial. Got k={}", k);
            }
            Outcome::InsufficientRoots { degree, available } => {
                return writeln!(
                    f,
                    "Not enough roots to build degree {} polynomial. Need {}, got {}",
                    degree, degree, available
                );
            }
            Outcome::Built { degree, polynomial, checks } => (degree, polynomial, checks),
        };

        // parsed summary
        writeln!(f, "Parsed:")?;
        writeln!(f, "  n = {}, k = {}  => degree m = {}", self.input.n, self.input.k, degree)?;
        for (i, root) in self.input.roots.iter().enumerate() {
            writeln!(f, "  root[{}] = {}", i + 1, root)?;
        }

        // coefficients, highest degree first
        writeln!(f)?;
        writeln!(f, "Monic polynomial coefficients (highest degree -> constant):")?;
        let line: Vec<String> = polynomial.coefficients_desc().map(|c| c.to_string()).collect();
        writeln!(f, "{}", line.join(" "))?;

        writeln!(f)?;
        writeln!(f, "P(x) = {}", polynomial)?;

        if !checks.is_empty() {
            writeln!(f)?;
            writeln!(f, "Verification on extra roots:")?;
            for check in checks {
                let tag = if check.passed() { "[OK]" } else { "[FAIL]" };
                writeln!(f, "  P({}) = {}  {}", check.root, check.value, tag)?;
            }
        }
        Ok(())
    }
}
