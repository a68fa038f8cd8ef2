use std::fmt;

/// An abstract syntax tree (AST) node representing an integer expression.
///
/// `Expr` is a closed set of variants: two leaves (`Number`, `Variable`) and
/// four binary arithmetic nodes. Every binary node exclusively owns both of its
/// children, so a parsed expression is always a finite tree with no shared
/// subtrees. Trees are built bottom-up by the parser and never mutated
/// afterwards; evaluation only borrows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number(i64),
    /// Reference to a variable by name.
    Variable(String),
    /// Addition (`left + right`).
    Add {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Subtraction (`left - right`).
    Subtract {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Multiplication (`left * right`).
    Multiply {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Floor division (`left / right`).
    Divide {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds the binary node matching `op`.
    ///
    /// ## Example
    /// ```
    /// use minicalc::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Mul, Expr::Number(6), Expr::Number(7));
    /// assert_eq!(expr.operator(), Some(BinaryOperator::Mul));
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        let left = Box::new(left);
        let right = Box::new(right);
        match op {
            BinaryOperator::Add => Self::Add { left, right },
            BinaryOperator::Sub => Self::Subtract { left, right },
            BinaryOperator::Mul => Self::Multiply { left, right },
            BinaryOperator::Div => Self::Divide { left, right },
        }
    }

    /// Returns the operator of a binary node, or `None` for leaves.
    #[must_use]
    pub const fn operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Number(_) | Self::Variable(_) => None,
            Self::Add { .. } => Some(BinaryOperator::Add),
            Self::Subtract { .. } => Some(BinaryOperator::Sub),
            Self::Multiply { .. } => Some(BinaryOperator::Mul),
            Self::Divide { .. } => Some(BinaryOperator::Div),
        }
    }

    /// Returns the `(left, right)` children of a binary node.
    #[must_use]
    pub fn operands(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Number(_) | Self::Variable(_) => None,
            Self::Add { left, right }
            | Self::Subtract { left, right }
            | Self::Multiply { left, right }
            | Self::Divide { left, right } => Some((left, right)),
        }
    }

    /// Lists the distinct variable names referenced by the tree, in the order
    /// they first appear when reading the source left to right.
    ///
    /// ## Example
    /// ```
    /// let expr = minicalc::parse("x * (y + x) / z").unwrap();
    /// assert_eq!(expr.variables(), vec!["x", "y", "z"]);
    /// ```
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Number(_) => {},
            Self::Variable(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            },
            Self::Add { left, right }
            | Self::Subtract { left, right }
            | Self::Multiply { left, right }
            | Self::Divide { left, right } => {
                left.collect_variables(names);
                right.collect_variables(names);
            },
        }
    }
}

/// Renders the tree fully parenthesised, e.g. `((x + y) * z)`.
///
/// For trees produced by the parser the output parses back into an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Add { left, right } => write!(f, "({left} + {right})"),
            Self::Subtract { left, right } => write!(f, "({left} - {right})"),
            Self::Multiply { left, right } => write!(f, "({left} * {right})"),
            Self::Divide { left, right } => write!(f, "({left} / {right})"),
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
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
