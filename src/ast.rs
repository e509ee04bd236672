use std::fmt;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The variant set is closed: every consumer matches on it exhaustively, so
/// adding a variant forces every match site to be updated. Each node owns its
/// children outright and nothing mutates a tree once it is built, so a parsed
/// `Expr` can be evaluated any number of times, from any number of threads.
///
/// # Example
/// ```
/// use parseva::ast::Expr;
///
/// // 2 + -1
/// let expr = Expr::Addition { left:  Box::new(Expr::Number { value: 2.0 }),
///                             right: Box::new(Expr::Negate { inner:
///                                                                Box::new(Expr::Number { value: 1.0 }) }), };
///
/// assert_eq!(expr.evaluate(), 1.0);
/// assert_eq!(expr.to_string(), "(2 + (-1))");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal's value.
        value: f64,
    },
    /// `left + right`
    Addition {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `left - right`
    Subtraction {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `left * right`
    Multiplication {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `left / right`
    Division {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Unary minus, `-inner`.
    Negate {
        /// The negated operand.
        inner: Box<Self>,
    },
    /// Postfix factorial, `inner!`.
    Factorial {
        /// The operand.
        inner: Box<Self>,
    },
    /// Builtin function call, e.g. `pow(2, 3)`.
    Call {
        /// Name of the builtin being called.
        name: String,
        /// Arguments in source order.
        args: Vec<Self>,
    },
}

impl Expr {
    /// Shorthand for a numeric literal node.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value }
    }

    /// Returns the number of nodes in the tree, including `self`.
    ///
    /// ## Example
    /// ```
    /// use parseva::parse;
    ///
    /// let expr = parse("pow(2, 3) + 1").unwrap();
    /// assert_eq!(expr.node_count(), 5);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::Addition { left, right }
            | Self::Subtraction { left, right }
            | Self::Multiplication { left, right }
            | Self::Division { left, right } => 1 + left.node_count() + right.node_count(),
            Self::Negate { inner } | Self::Factorial { inner } => 1 + inner.node_count(),
            Self::Call { args, .. } => 1 + args.iter().map(Self::node_count).sum::<usize>(),
        }
    }
}

/// Renders the tree fully parenthesized, so the grouping the parser chose is
/// visible.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::Addition { left, right } => write!(f, "({left} {} {right})", BinaryOperator::Add),
            Self::Subtraction { left, right } => {
                write!(f, "({left} {} {right})", BinaryOperator::Sub)
            },
            Self::Multiplication { left, right } => {
                write!(f, "({left} {} {right})", BinaryOperator::Mul)
            },
            Self::Division { left, right } => write!(f, "({left} {} {right})", BinaryOperator::Div),
            Self::Negate { inner } => write!(f, "(-{inner})"),
            Self::Factorial { inner } => write!(f, "({inner})!"),
            Self::Call { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Represents a binary operator.
///
/// Used by the parser to map an operator token onto the node it builds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Builds the node applying `self` to `left` and `right`.
    ///
    /// ## Example
    /// ```
    /// use parseva::ast::{BinaryOperator, Expr};
    ///
    /// let node = BinaryOperator::Sub.node(Expr::number(8.0), Expr::number(3.0));
    /// assert_eq!(node,
    ///            Expr::Subtraction { left:  Box::new(Expr::number(8.0)),
    ///                                right: Box::new(Expr::number(3.0)), });
    /// ```
    #[must_use]
    pub fn node(self, left: Expr, right: Expr) -> Expr {
        let (left, right) = (Box::new(left), Box::new(right));
        match self {
            Self::Add => Expr::Addition { left, right },
            Self::Sub => Expr::Subtraction { left, right },
            Self::Mul => Expr::Multiplication { left, right },
            Self::Div => Expr::Division { left, right },
        }
    }

    /// `true` for the operators of the `+`/`-` precedence tier.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// `true` for the operators of the `*`/`/` precedence tier.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
