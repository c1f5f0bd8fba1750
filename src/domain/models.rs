use serde::{Deserialize, Serialize};
use std::fmt;

/// A single calculator request with its operands.
///
/// Serialized as an internally tagged object, e.g. `{"op":"divide","a":7.0,"b":2.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// `a + b`
    Add { a: f64, b: f64 },
    /// `a - b`
    Subtract { a: f64, b: f64 },
    /// `a * b`
    Multiply { a: f64, b: f64 },
    /// `a / b`, rejected when `b` is zero
    Divide { a: f64, b: f64 },
    /// `base` raised to `exponent`
    Power { base: f64, exponent: f64 },
    /// Square root, rejected for negative `n`
    SquareRoot { n: f64 },
    /// `n!`, rejected for negative or fractional `n`
    Factorial { n: f64 },
    /// Primality check by trial division
    IsPrime { n: f64 },
}

impl Operation {
    /// Returns the tag this operation serializes under.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Subtract { .. } => "subtract",
            Operation::Multiply { .. } => "multiply",
            Operation::Divide { .. } => "divide",
            Operation::Power { .. } => "power",
            Operation::SquareRoot { .. } => "square_root",
            Operation::Factorial { .. } => "factorial",
            Operation::IsPrime { .. } => "is_prime",
        }
    }
}

/// Result of evaluating an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    /// A numeric result
    Number(f64),
    /// The answer to a primality check
    Boolean(bool),
}

impl Outcome {
    /// Returns the value if this is a numeric outcome.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Outcome::Number(value) => Some(*value),
            Outcome::Boolean(_) => None,
        }
    }

    /// Returns the flag if this is a boolean outcome.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Outcome::Boolean(value) => Some(*value),
            Outcome::Number(_) => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Number(value) => write!(f, "{}", value),
            Outcome::Boolean(value) => write!(f, "{}", value),
        }
    }
}
