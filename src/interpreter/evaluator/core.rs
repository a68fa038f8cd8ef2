use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
};

use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the variable bindings an expression is evaluated against.
///
/// ## Usage
///
/// A `Context` is seeded with [`Context::set`] and then passed by shared
/// reference to [`Context::eval`] (or [`crate::evaluate`]). Evaluation never
/// mutates it, so one context can serve any number of trees, and one tree can
/// be evaluated against any number of contexts.
///
/// ```
/// use minicalc::{Context, parse};
///
/// let mut context = Context::new();
/// context.set("x", 10);
/// context.set("y", 5);
///
/// let expr = parse("x * y").unwrap();
/// assert_eq!(context.eval(&expr), Ok(50));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    variables: HashMap<String, i64>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, returning the previous value if there was one.
    pub fn set(&mut self, name: impl Into<String>, value: i64) -> Option<i64> {
        self.variables.insert(name.into(), value)
    }

    /// Looks up the value bound to `name`.
    ///
    /// # Errors
    /// `UndefinedVariable` if `name` has no binding.
    pub fn get(&self, name: &str) -> EvalResult<i64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Removes the binding for `name`, returning its value if it was bound.
    pub fn remove(&mut self, name: &str) -> Option<i64> {
        self.variables.remove(name)
    }

    /// Whether `name` has a binding.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the context has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over the bindings sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        let mut bindings: Vec<_> = self.variables
                                       .iter()
                                       .map(|(name, value)| (name.as_str(), *value))
                                       .collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings.into_iter()
    }

    /// Evaluates an expression tree and returns its integer value.
    ///
    /// This is the main entry point for expression evaluation. Leaves yield
    /// their literal value or their binding; binary nodes evaluate their
    /// operands recursively and combine them with
    /// [`Context::eval_binary`]. Neither the tree nor the context is
    /// modified, so repeated calls give the same result.
    ///
    /// # Errors
    /// - `UndefinedVariable` for a variable with no binding.
    /// - `DivisionByZero` when a divisor evaluates to zero.
    /// - `Overflow` when an intermediate result does not fit an `i64`.
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        let value = self.eval_node(expr);
        debug!(%expr, ?value, "evaluated expression");
        value
    }

    fn eval_node(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Number(value) => Ok(*value),
            Expr::Variable(name) => self.get(name),
            Expr::Add { left, right } => self.eval_operands(BinaryOperator::Add, left, right),
            Expr::Subtract { left, right } => self.eval_operands(BinaryOperator::Sub, left, right),
            Expr::Multiply { left, right } => self.eval_operands(BinaryOperator::Mul, left, right),
            Expr::Divide { left, right } => {
                // The divisor is checked before the dividend is evaluated.
                let divisor = self.eval_node(right)?;
                if divisor == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                let dividend = self.eval_node(left)?;
                Self::eval_binary(BinaryOperator::Div, dividend, divisor)
            },
        }
    }

    fn eval_operands(&self, op: BinaryOperator, left: &Expr, right: &Expr) -> EvalResult<i64> {
        let left = self.eval_node(left)?;
        let right = self.eval_node(right)?;
        Self::eval_binary(op, left, right)
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Context {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        let mut context = Self::new();
        context.extend(iter);
        context
    }
}

impl<S: Into<String>> Extend<(S, i64)> for Context {
    fn extend<T: IntoIterator<Item = (S, i64)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

/// A single `name=value` variable assignment, as given on the command line.
///
/// ```
/// use minicalc::interpreter::evaluator::core::Binding;
///
/// let binding: Binding = "x=10".parse().unwrap();
/// assert_eq!(binding, Binding { name: "x".to_string(), value: 10 });
/// assert!("x=ten".parse::<Binding>().is_err());
/// assert!("x1=3".parse::<Binding>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The variable name; ASCII letters only, like identifiers in expressions.
    pub name:  String,
    /// The value it is bound to.
    pub value: i64,
}

/// Why a `name=value` string could not be read as a [`Binding`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// There was no `=` separating name and value.
    #[error("expected NAME=VALUE but found '{0}'")]
    MissingEquals(String),
    /// The name is empty or contains characters other than ASCII letters.
    #[error("'{0}' is not a valid variable name")]
    InvalidName(String),
    /// The value is not an `i64`.
    #[error("'{0}' is not a valid integer")]
    InvalidValue(String),
}

impl FromStr for Binding {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s.split_once('=')
                             .ok_or_else(|| BindingError::MissingEquals(s.to_string()))?;
        let name = name.trim();
        let value = value.trim();

        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(BindingError::InvalidName(name.to_string()));
        }
        let value = value.parse()
                         .map_err(|_| BindingError::InvalidValue(value.to_string()))?;

        Ok(Self { name: name.to_string(),
                  value })
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
