use parseva::{
    ast::{BinaryOperator, Expr},
    parse,
};
use proptest::prelude::*;

fn boxed(value: f64) -> Box<Expr> {
    Box::new(Expr::number(value))
}

fn same_value(actual: f64, expected: f64) -> bool {
    if expected.is_nan() { actual.is_nan() } else { actual == expected }
}

#[test]
fn hand_built_tree_matches_closed_form() {
    // (1.5 * 4) - 10 / -4
    let expr = Expr::Subtraction { left:  Box::new(Expr::Multiplication { left:  boxed(1.5),
                                                                         right: boxed(4.0), }),
                                   right: Box::new(Expr::Division { left:  boxed(10.0),
                                                                    right: Box::new(Expr::Negate { inner: boxed(4.0) }), }), };

    assert_eq!(expr.evaluate(), 1.5 * 4.0 - 10.0 / -4.0);
    assert_eq!(expr.node_count(), 8);
}

#[test]
fn parser_builds_expected_shapes() {
    let two = || Expr::number(2.0);
    let one = || Expr::number(1.0);

    assert_eq!(parse("2 + -1").unwrap(),
               BinaryOperator::Add.node(two(), Expr::Negate { inner: Box::new(one()) }));
    assert_eq!(parse("-2!").unwrap(),
               Expr::Negate { inner: Box::new(Expr::Factorial { inner: Box::new(two()) }) });
    assert_eq!(parse("pow(2, 1)").unwrap(),
               Expr::Call { name: "pow".to_string(),
                            args: vec![two(), one()], });
    assert_eq!(parse("((2))").unwrap(), two());
}

#[test]
fn display_shows_grouping() {
    assert_eq!(parse("8 - 3 - 2").unwrap().to_string(), "((8 - 3) - 2)");
    assert_eq!(parse("2 + 3 * 4").unwrap().to_string(), "(2 + (3 * 4))");
    assert_eq!(parse("sqrt(2 + 2)").unwrap().to_string(), "sqrt((2 + 2))");
    assert_eq!(parse("pow(5, 2)!").unwrap().to_string(), "(pow(5, 2))!");
}

#[test]
fn evaluation_is_repeatable() {
    let expr = parse("sqrt(7) + (2*3*6) + sin(32) / 3! - 0.1").unwrap();
    let first = expr.evaluate();
    let second = expr.evaluate();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn trees_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expr>();

    let expr = parse("pow(2, 10) - 24").unwrap();
    let results = std::thread::scope(|s| {
                      let handles = (0..4).map(|_| s.spawn(|| expr.evaluate()))
                                          .collect::<Vec<_>>();
                      handles.into_iter()
                             .map(|h| h.join().unwrap())
                             .collect::<Vec<_>>()
                  });
    assert!(results.iter().all(|&r| r == 1000.0));
}

#[test]
fn invalid_hand_built_calls_are_nan() {
    let unknown = Expr::Call { name: "foo".to_string(),
                               args: vec![Expr::number(1.0)], };
    assert!(unknown.evaluate().is_nan());

    let wrong_arity = Expr::Call { name: "sqrt".to_string(),
                                   args: vec![Expr::number(1.0), Expr::number(2.0)], };
    assert!(wrong_arity.evaluate().is_nan());
}

// Arithmetic trees paired with the value computed directly while building
// them.
fn arithmetic() -> impl Strategy<Value = (Expr, f64)> {
    let leaf = (-1.0e3..1.0e3f64).prop_map(|v| (Expr::number(v), v));
    leaf.prop_recursive(6, 64, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone())
                    .prop_map(|((l, a), (r, b))| (BinaryOperator::Add.node(l, r), a + b)),
                (inner.clone(), inner.clone())
                    .prop_map(|((l, a), (r, b))| (BinaryOperator::Sub.node(l, r), a - b)),
                (inner.clone(), inner.clone())
                    .prop_map(|((l, a), (r, b))| (BinaryOperator::Mul.node(l, r), a * b)),
                (inner.clone(), inner.clone())
                    .prop_map(|((l, a), (r, b))| (BinaryOperator::Div.node(l, r), a / b)),
                inner.prop_map(|(e, a)| (Expr::Negate { inner: Box::new(e) }, -a)),
            ]
        })
}

proptest! {
    #[test]
    fn evaluate_matches_closed_form((expr, expected) in arithmetic()) {
        let actual = expr.evaluate();
        prop_assert!(same_value(actual, expected), "{expr} gave {actual}, expected {expected}");
        prop_assert!(same_value(expr.evaluate(), actual));
    }

    #[test]
    fn display_reparses_to_same_value((expr, expected) in arithmetic()) {
        let reparsed = parse(&expr.to_string()).unwrap();
        prop_assert!(same_value(reparsed.evaluate(), expected));
    }
}
