use crate::interpreter::function::builtin;

/// A native implementation together with its shape.
///
/// The arity of a builtin is whatever its function pointer accepts, so the
/// argument count and the implementation can never disagree.
#[derive(Debug, Clone, Copy)]
pub enum Native {
    /// `f64 -> f64`
    Unary(fn(f64) -> f64),
    /// `(f64, f64) -> f64`
    Binary(fn(f64, f64) -> f64),
}

/// One entry of the builtin table.
#[derive(Debug)]
pub struct Builtin {
    name:   &'static str,
    native: Native,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and the [`Native`] implementing it.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $native:expr
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, native: $native },
            )*
        ];
        /// Every callable function name, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"    => Native::Unary(f64::sqrt),
    "cbrt"    => Native::Unary(f64::cbrt),
    "sin"     => Native::Unary(f64::sin),
    "cos"     => Native::Unary(f64::cos),
    "tan"     => Native::Unary(f64::tan),
    "asin"    => Native::Unary(f64::asin),
    "acos"    => Native::Unary(f64::acos),
    "atan"    => Native::Unary(f64::atan),
    "sinh"    => Native::Unary(f64::sinh),
    "cosh"    => Native::Unary(f64::cosh),
    "tanh"    => Native::Unary(f64::tanh),
    "exp"     => Native::Unary(f64::exp),
    "expm1"   => Native::Unary(f64::exp_m1),
    "ln"      => Native::Unary(f64::ln),
    "log"     => Native::Unary(f64::ln),
    "log10"   => Native::Unary(f64::log10),
    "log2"    => Native::Unary(f64::log2),
    "log1p"   => Native::Unary(f64::ln_1p),
    "abs"     => Native::Unary(f64::abs),
    "floor"   => Native::Unary(f64::floor),
    "ceil"    => Native::Unary(f64::ceil),
    "round"   => Native::Unary(f64::round),
    "trunc"   => Native::Unary(f64::trunc),
    "sign"    => Native::Unary(builtin::sign),
    "radians" => Native::Unary(builtin::radians),
    "degrees" => Native::Unary(builtin::degrees),
    "pow"     => Native::Binary(f64::powf),
    "atan2"   => Native::Binary(f64::atan2),
    "hypot"   => Native::Binary(f64::hypot),
    "min"     => Native::Binary(builtin::min),
    "max"     => Native::Binary(builtin::max),
}

impl Builtin {
    /// The name the function is called by.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The exact number of arguments the function takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self.native {
            Native::Unary(_) => 1,
            Native::Binary(_) => 2,
        }
    }

    /// Applies the function to already evaluated arguments.
    ///
    /// Returns `None` when `args` does not match [`Builtin::arity`].
    ///
    /// # Example
    /// ```
    /// use parseva::interpreter::function::core::lookup;
    ///
    /// let pow = lookup("pow").unwrap();
    /// assert_eq!(pow.call(&[2.0, 10.0]), Some(1024.0));
    /// assert_eq!(pow.call(&[2.0]), None);
    /// ```
    #[must_use]
    pub fn call(&self, args: &[f64]) -> Option<f64> {
        match (self.native, args) {
            (Native::Unary(f), &[x]) => Some(f(x)),
            (Native::Binary(f), &[a, b]) => Some(f(a, b)),
            _ => None,
        }
    }
}

/// Looks up a builtin by name.
///
/// The table is a `static`, built at compile time and never mutated, so
/// lookups are safe from any thread without locking.
///
/// # Example
/// ```
/// use parseva::interpreter::function::core::lookup;
///
/// assert_eq!(lookup("sqrt").map(|b| b.arity()), Some(1));
/// assert_eq!(lookup("pow").map(|b| b.arity()), Some(2));
/// assert!(lookup("foo").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}
