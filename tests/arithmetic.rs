use parseva::evaluate;

fn assert_evaluates(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(actual) => assert_eq!(actual, expected, "'{src}' evaluated to {actual}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_evaluates("2 + 2", 4.0);
    assert_evaluates("2 - 2", 0.0);
    assert_evaluates("2 * 3", 6.0);
    assert_evaluates("2 / 2", 1.0);
    assert_evaluates("42.0", 42.0);
}

#[test]
fn precedence_and_associativity() {
    assert_evaluates("2 + 3 * 4", 14.0);
    assert_evaluates("(2 + 3) * 4", 20.0);
    assert_evaluates("8 - 3 - 2", 3.0);
    assert_evaluates("16 / 4 / 2", 2.0);
    assert_evaluates("2 * 3 / 4", 1.5);
    assert_evaluates("10 - 4 / 2", 8.0);
}

#[test]
fn unary_minus() {
    assert_evaluates("2 + -1", 1.0);
    assert_evaluates("-3", -3.0);
    assert_evaluates("--2", 2.0);
    assert_evaluates("-(2 + 3)", -5.0);
    assert_evaluates("2 * -3", -6.0);
}

#[test]
fn division_by_zero_is_a_value() {
    assert!(evaluate("0/0").unwrap().is_nan());
    assert_evaluates("1/0", f64::INFINITY);
    assert_evaluates("-1/0", f64::NEG_INFINITY);
}

#[test]
fn builtin_functions() {
    assert_evaluates("sqrt(7)", 2.645_751_311_064_590_7);
    assert_evaluates("sqrt(7)", 7.0_f64.sqrt());
    assert_evaluates("sin(7)", 7.0_f64.sin());
    assert_evaluates("abs(-30.0)", 30.0);
    assert_evaluates("pow(2.0,2.0)", 4.0);
    assert_evaluates("max(1, 2) + min(1, 2)", 3.0);
    assert_evaluates("sign(-42)", -1.0);
    assert_evaluates("hypot(3, 4)", 5.0);
    assert!(evaluate("sqrt(-1)").unwrap().is_nan());
}

#[test]
fn compound_expression() {
    assert_evaluates("sqrt(7) + (2*3*6) + sin(32)",
                     7.0_f64.sqrt() + 36.0 + 32.0_f64.sin());
}

#[test]
fn nested_function_calls() {
    assert_evaluates("sqrt(2 + 2)", 2.0);
    assert_evaluates("sqrt(sin(0) + 20 + sqrt(25))", 5.0);
    assert_evaluates("sqrt(sin(0) + 20 + sqrt(50 - pow(5, 2)))", 5.0);
    assert_evaluates("abs(abs(abs(-1)))", 1.0);
}

#[test]
fn factorial() {
    assert_evaluates("13!", 6_227_020_800.0);
    assert_evaluates("0!", 1.0);
    assert_evaluates("-2!", -2.0);
    assert_evaluates("3! * 2", 12.0);
    assert_evaluates("(1 + 2)!", 6.0);
    assert_evaluates("171!", f64::INFINITY);
    assert!(evaluate("(-2)!").unwrap().is_nan());

    let half = evaluate("0.5!").unwrap();
    assert!((half - std::f64::consts::PI.sqrt() / 2.0).abs() < 1e-12);

    // Γ(171.5) is still finite even though 171! is not.
    let large = evaluate("170.5!").unwrap();
    assert!(large.is_finite());
    assert!((large / 9.483_367_566_824_801e307 - 1.0).abs() < 1e-10);
    assert_evaluates("171.7!", f64::INFINITY);
}

#[test]
fn whitespace_is_insignificant() {
    assert_evaluates("  pow ( 2 ,\t3 )\n", 8.0);
    assert_evaluates("1+2*3", 7.0);
    assert_evaluates("1\u{a0}+\u{b}2\u{2003}", 3.0);
}

#[test]
fn every_builtin_is_callable() {
    use parseva::interpreter::function::core::{BUILTIN_FUNCTIONS, lookup};

    for name in BUILTIN_FUNCTIONS {
        let builtin = lookup(name).unwrap_or_else(|| panic!("'{name}' is listed but not found"));
        let args = vec!["0.5"; builtin.arity()].join(", ");
        let src = format!("{name}({args})");
        if let Err(e) = evaluate(&src) {
            panic!("'{src}' failed: {e}");
        }
    }
}
