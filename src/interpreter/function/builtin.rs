/// Returns `-1`, `0` or `1` according to the sign of `x`.
///
/// Unlike [`f64::signum`], zero maps to zero. NaN stays NaN.
///
/// # Example
/// ```
/// use parseva::interpreter::function::builtin::sign;
///
/// assert_eq!(sign(-42.0), -1.0);
/// assert_eq!(sign(0.0), 0.0);
/// assert_eq!(sign(11.0), 1.0);
/// assert!(sign(f64::NAN).is_nan());
/// ```
#[must_use]
pub fn sign(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x.signum() }
}

/// Converts an angle from degrees to radians.
///
/// # Example
/// ```
/// use parseva::interpreter::function::builtin::radians;
///
/// assert_eq!(radians(180.0), std::f64::consts::PI);
/// ```
#[must_use]
pub fn radians(x: f64) -> f64 {
    x.to_radians()
}

/// Converts an angle from radians to degrees.
#[must_use]
pub fn degrees(x: f64) -> f64 {
    x.to_degrees()
}

/// Smaller of two values. NaN in either argument gives NaN.
#[must_use]
pub fn min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

/// Larger of two values. NaN in either argument gives NaN.
#[must_use]
pub fn max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}
