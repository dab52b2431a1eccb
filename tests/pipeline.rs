use root_poly::modules::input::{parse, InputError};
use root_poly::modules::reconstruct::{reconstruct, Outcome};
use root_poly::modules::report::Report;
use root_poly::modules::base::DecodeError;
use num_bigint::BigInt;

fn run(text: &str) -> Result<String, InputError> {
    let parsed = parse(text)?;
    let outcome = reconstruct(&parsed);
    Ok(Report::new(&parsed, &outcome).to_string())
}

#[test]
fn consistent_extra_root_is_ok() {
    let text = r#"{
        "keys": { "n": 3, "k": 3 },
        "1": { "base": "10", "value": "2" },
        "2": { "base": "10", "value": "3" },
        "3": { "base": "10", "value": "2" }
    }"#;
    let report = run(text).unwrap();

    assert!(report.contains("  n = 3, k = 3  => degree m = 2\n"));
    assert!(report.contains("\n1 -5 6\n"));
    assert!(report.contains("P(x) = x^2 - 5*x + 6\n"));
    assert!(report.ends_with("  P(2) = 0  [OK]\n"));
}

#[test]
fn inconsistent_extra_root_fails() {
    let text = r#"{
        "keys": { "n": 3, "k": 3 },
        "1": { "base": "2", "value": "10" },
        "2": { "base": "16", "value": "3" },
        "3": { "base": "36", "value": "5" }
    }"#;
    let report = run(text).unwrap();
    assert!(report.ends_with("  P(5) = 6  [FAIL]\n"));
}

#[test]
fn threshold_one_prints_no_polynomial() {
    let text = r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": "10", "value": "7" } }"#;
    let report = run(text).unwrap();
    assert!(!report.contains("P(x)"));
    assert!(report.starts_with("k must be >= 2"));
}

#[test]
fn too_few_roots_prints_no_polynomial() {
    let text = r#"{ "keys": { "n": 2, "k": 5 },
        "1": { "base": "10", "value": "1" },
        "2": { "base": "10", "value": "2" } }"#;
    let report = run(text).unwrap();
    assert_eq!(report, "Not enough roots to build degree 4 polynomial. Need 4, got 2\n");
}

#[test]
fn large_mixed_base_roots_vanish() {
    // roots past 64 bits, the fourth repeats the first
    let text = r#"{
        "keys": { "n": 6, "k": 4 },
        "1": { "base": "16", "value": "ffffffffffffffffffffffffffffffff" },
        "2": { "base": "36", "value": "ZZZZZZZZZZZZZZZZZZZZ" },
        "3": { "base": "7", "value": "6543210123456" },
        "4": { "base": "2", "value": "11111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111" },
        "5": { "base": "10", "value": "34359738367" },
        "6": { "base": "8", "value": "17" }
    }"#;
    let parsed = parse(text).unwrap();
    assert_eq!(parsed.roots[0], BigInt::from(u128::MAX));
    assert_eq!(parsed.roots[3], BigInt::from(u128::MAX));

    match reconstruct(&parsed) {
        Outcome::Built { degree, polynomial, checks } => {
            assert_eq!(degree, 3);
            assert!(polynomial.is_monic());
            assert_eq!(checks.len(), 3);
            assert!(checks[0].passed());
            assert!(!checks[1].passed());
            assert!(!checks[2].passed());
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn bad_digit_aborts_the_run() {
    let text = r#"{ "keys": { "n": 2, "k": 2 },
        "1": { "base": "10", "value": "5" },
        "2": { "base": "2", "value": "102" } }"#;
    match run(text) {
        Err(InputError::Decode { index: 2, source }) => {
            assert_eq!(source, DecodeError::InvalidDigit { ch: '2', pos: 2, base: 2 });
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
