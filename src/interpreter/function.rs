/// The builtin table and its lookup.
///
/// Declares every callable name together with its native implementation.
/// Consulted by the parser for arity checks and by the evaluator for
/// dispatch.
pub mod core;
/// Native implementations that have no direct `f64` method counterpart.
pub mod builtin;
