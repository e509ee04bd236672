use crate::{
    ast::Expr,
    interpreter::evaluator::{function::eval_call, unary::factorial},
};

/// Evaluates an expression and returns the resulting value.
///
/// This is the main entry point for expression evaluation. The evaluator
/// dispatches on the expression variant and recurses into the children,
/// left operand first.
///
/// Evaluation is total: numeric edge cases are ordinary IEEE-754 values, so
/// `0 / 0` is NaN and `1 / 0` is infinity. The tree is only read, so
/// evaluating the same tree twice gives bit-identical results.
///
/// # Example
/// ```
/// use parseva::{interpreter::evaluator::core::evaluate, parse};
///
/// let expr = parse("sqrt(2 + 2)").unwrap();
/// assert_eq!(evaluate(&expr), 2.0);
///
/// let expr = parse("0 / 0").unwrap();
/// assert!(evaluate(&expr).is_nan());
/// ```
#[must_use]
pub fn evaluate(expr: &Expr) -> f64 {
    match expr {
        Expr::Number { value } => *value,
        Expr::Addition { left, right } => evaluate(left) + evaluate(right),
        Expr::Subtraction { left, right } => evaluate(left) - evaluate(right),
        Expr::Multiplication { left, right } => evaluate(left) * evaluate(right),
        Expr::Division { left, right } => evaluate(left) / evaluate(right),
        Expr::Negate { inner } => -evaluate(inner),
        Expr::Factorial { inner } => factorial(evaluate(inner)),
        Expr::Call { name, args } => eval_call(name, args),
    }
}

impl Expr {
    /// Evaluates `self`. See [`evaluate`].
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        evaluate(self)
    }
}
