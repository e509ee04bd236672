/// Largest `n` whose factorial is finite as an `f64` (`170! ≈ 7.26e306`).
pub const MAX_FINITE_FACTORIAL: f64 = 170.0;

/// Computes `x!`.
///
/// - Non-negative integers give the exact product `1 × 2 × … × x`, with
///   `0! = 1`. Integers above [`MAX_FINITE_FACTORIAL`] overflow to infinity
///   without looping.
/// - Negative integers give NaN; they sit on the poles of the gamma function.
/// - Other finite values give `Γ(x + 1)` (see [`euler_gamma`]), which stays
///   finite up to about `171.62`.
/// - NaN gives NaN, `+∞` gives `+∞` and `-∞` gives NaN.
///
/// # Example
/// ```
/// use parseva::interpreter::evaluator::unary::factorial;
///
/// assert_eq!(factorial(0.0), 1.0);
/// assert_eq!(factorial(13.0), 6_227_020_800.0);
/// assert!(factorial(-2.0).is_nan());
/// assert_eq!(factorial(171.0), f64::INFINITY);
/// assert!(factorial(170.5).is_finite());
///
/// // 0.5! = Γ(1.5) = √π / 2
/// let half = factorial(0.5);
/// assert!((half - std::f64::consts::PI.sqrt() / 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn factorial(x: f64) -> f64 {
    if x.is_nan() || x == f64::NEG_INFINITY {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return f64::INFINITY;
    }

    if x.fract() != 0.0 {
        return euler_gamma(x + 1.0);
    }
    if x < 0.0 {
        return f64::NAN;
    }
    if x > MAX_FINITE_FACTORIAL {
        return f64::INFINITY;
    }

    let mut result = 1.0;
    let mut k = 2.0;
    while k <= x {
        result *= k;
        k += 1.0;
    }
    result
}

/// Computes the gamma function Γ(z) using the Lanczos approximation.
///
/// This implementation uses the standard 9-term Lanczos coefficients
/// (`g = 7`). For `z < 0.5`, the reflection formula is applied:
///
/// `Γ(z) = π / (sin(πz) * Γ(1 − z))`
///
/// Non-positive integers are poles and give NaN. Arguments past the range
/// of `f64` give infinity.
///
/// # Example
/// ```
/// use parseva::interpreter::evaluator::unary::euler_gamma;
///
/// // Γ(5) = 4! = 24
/// let g = euler_gamma(5.0);
/// assert!((g - 24.0).abs() < 1e-9);
/// assert!(euler_gamma(-1.0).is_nan());
/// ```
#[must_use]
pub fn euler_gamma(z: f64) -> f64 {
    // Lanczos coefficients, g = 7, n = 9.
    const COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                              676.520_368_121_885_1,
                              -1_259.139_216_722_402_8,
                              771.323_428_777_653_1,
                              -176.615_029_162_140_6,
                              12.507_343_278_686_905,
                              -0.138_571_095_265_720_12,
                              9.984_369_578_019_572e-6,
                              1.505_632_735_149_311_6e-7];
    const G: f64 = 7.0;
    // Γ(171.7) already exceeds f64::MAX.
    const OVERFLOW: f64 = 171.7;

    if z.is_nan() || (z <= 0.0 && z.fract() == 0.0) {
        return f64::NAN;
    }
    if z > OVERFLOW {
        return f64::INFINITY;
    }

    if z < 0.5 {
        std::f64::consts::PI / ((std::f64::consts::PI * z).sin() * euler_gamma(1.0 - z))
    } else {
        let z_minus_1 = z - 1.0;
        let mut x = COEFFS[0];
        let mut offset = 0.0;

        for &c in &COEFFS[1..] {
            offset += 1.0;
            x += c / (z_minus_1 + offset);
        }

        let t = z_minus_1 + G + 0.5;
        // t^(z - 1/2) is split in two halves so it does not overflow before
        // e^-t scales it back down.
        let half_power = t.powf((z_minus_1 + 0.5) / 2.0);

        std::f64::consts::TAU.sqrt() * half_power * (-t).exp() * half_power * x
    }
}
