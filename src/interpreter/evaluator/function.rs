use log::warn;

use crate::{
    ast::Expr,
    interpreter::{evaluator::core::evaluate, function::core::lookup},
};

/// Evaluates a function call.
///
/// Arguments are evaluated left to right and handed to the builtin
/// registered under `name`.
///
/// The parser only builds calls to known builtins with the right number of
/// arguments. A hand-built [`Expr::Call`] that breaks either rule evaluates to
/// NaN and logs a warning.
///
/// # Example
/// ```
/// use parseva::{ast::Expr, interpreter::evaluator::function::eval_call};
///
/// let args = [Expr::number(2.0), Expr::number(3.0)];
/// assert_eq!(eval_call("pow", &args), 8.0);
/// assert!(eval_call("nope", &args).is_nan());
/// ```
#[must_use]
pub fn eval_call(name: &str, args: &[Expr]) -> f64 {
    let values = args.iter().map(evaluate).collect::<Vec<_>>();

    let Some(builtin) = lookup(name) else {
        warn!("call to unknown function '{name}' evaluated to NaN");
        return f64::NAN;
    };

    builtin.call(&values).unwrap_or_else(|| {
                             warn!("'{name}' takes {} argument(s) but was called with {}",
                                   builtin.arity(),
                                   values.len());
                             f64::NAN
                         })
}
