use tiny_calc::{Calculator, OverflowError, add_integers};

#[test]
fn wrapper_matches_primitive() {
    let calc = Calculator::new();
    for (a, b) in [(100, 23), (0, 0), (-5, 5), (i64::MAX, -1), (i64::MIN, 1)] {
        assert_eq!(calc.add(a, b), add_integers(a, b));
    }
}

#[test]
fn demo_scenarios() {
    let calc = Calculator::new();
    assert_eq!(calc.add(100, 23), Ok(123));
    assert_eq!(calc.add(0, 0), Ok(0));
    assert_eq!(calc.add(-5, 5), Ok(0));
}

#[test]
fn overflow_is_an_error() {
    let calc = Calculator::new();
    assert_eq!(
        calc.add(i64::MAX, 1),
        Err(OverflowError { a: i64::MAX, b: 1 })
    );
    assert!(calc.add(i64::MIN, -1).is_err());
}
