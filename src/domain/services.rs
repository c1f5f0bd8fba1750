//! Calculator operations.
//!
//! This module provides the stateless [`Calculator`] with its eight
//! operations and a dispatcher that evaluates [`Operation`] requests.
//! All arithmetic follows IEEE-754 double precision rules; only the
//! operations with a restricted domain return errors.

use super::errors::{CalcResult, CalculatorError};
use super::models::{Operation, Outcome};
use tracing::debug;

const NEGATIVE_SQUARE_ROOT: &str = "Cannot calculate square root of negative number";
const NEGATIVE_FACTORIAL: &str = "Factorial is not defined for negative numbers";
const FRACTIONAL_FACTORIAL: &str = "Factorial is only defined for whole numbers";

/// A stateless calculator.
///
/// Every operation is a pure function of its arguments. The struct exists
/// only to group the operations; it holds no data and can be copied freely.
///
/// # Examples
///
/// ```
/// use calckit::Calculator;
///
/// let calc = Calculator::new();
///
/// assert_eq!(calc.add(2.0, 3.0), 5.0);
/// assert_eq!(calc.divide(7.0, 2.0), Ok(3.5));
/// assert!(calc.divide(5.0, 0.0).is_err());
/// assert!(calc.is_prime(11.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Creates a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// Adds two numbers.
    pub fn add(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    /// Subtracts `b` from `a`.
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    /// Multiplies two numbers.
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    /// Divides `a` by `b`.
    ///
    /// The divisor is checked before dividing, so `0 / 0` reports an error
    /// instead of producing NaN.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::DivisionByZero`] when `b` is zero of either sign.
    ///
    /// # Examples
    ///
    /// ```
    /// use calckit::{Calculator, CalculatorError};
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.divide(10.0, 2.0), Ok(5.0));
    /// assert_eq!(calc.divide(5.0, 0.0), Err(CalculatorError::DivisionByZero));
    /// ```
    pub fn divide(&self, a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            debug!(a, "rejecting division by zero");
            return Err(CalculatorError::DivisionByZero);
        }
        debug!(a, b, "performing division");
        Ok(a / b)
    }

    /// Raises `base` to `exponent`.
    ///
    /// Fractional and negative exponents follow `f64::powf`; a negative base
    /// with a fractional exponent yields NaN rather than an error.
    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        debug!(base, exponent, "performing exponentiation");
        base.powf(exponent)
    }

    /// Returns the square root of `n`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::InvalidDomain`] when `n` is negative.
    /// NaN is not negative and propagates as NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use calckit::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.square_root(9.0), Ok(3.0));
    ///
    /// let err = calc.square_root(-4.0).unwrap_err();
    /// assert_eq!(err.to_string(), "Cannot calculate square root of negative number");
    /// ```
    pub fn square_root(&self, n: f64) -> CalcResult<f64> {
        if n < 0.0 {
            debug!(n, "rejecting negative square root input");
            return Err(CalculatorError::invalid_domain(NEGATIVE_SQUARE_ROOT));
        }
        debug!(n, "performing square root");
        Ok(n.sqrt())
    }

    /// Computes `n!`.
    ///
    /// `0! = 1! = 1` and `n! = n * (n - 1)!`. The product is built in
    /// ascending order, which matches the recursive definition term for
    /// term. Results are exact up to `22!`; beyond that they are rounded,
    /// and from `171!` on they overflow to infinity.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::InvalidDomain`] when `n` is negative, or when
    /// it is not a finite whole number.
    ///
    /// # Examples
    ///
    /// ```
    /// use calckit::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.factorial(5.0), Ok(120.0));
    ///
    /// let err = calc.factorial(-1.0).unwrap_err();
    /// assert_eq!(err.to_string(), "Factorial is not defined for negative numbers");
    /// ```
    pub fn factorial(&self, n: f64) -> CalcResult<f64> {
        if n < 0.0 {
            debug!(n, "rejecting negative factorial input");
            return Err(CalculatorError::invalid_domain(NEGATIVE_FACTORIAL));
        }
        if !is_whole(n) {
            debug!(n, "rejecting fractional factorial input");
            return Err(CalculatorError::invalid_domain(FRACTIONAL_FACTORIAL));
        }

        debug!(n, "computing factorial");
        let mut result: f64 = 1.0;
        let mut k = 2.0;
        // Once the product overflows every further step stays infinite.
        while k <= n && result.is_finite() {
            result *= k;
            k += 1.0;
        }
        Ok(result)
    }

    /// Checks whether `n` is prime using trial division.
    ///
    /// Numbers below 2, even numbers above 2, and anything that is not a
    /// finite whole number are never prime. Odd candidates are tested
    /// against odd divisors from 3 up to `isqrt(n)` inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use calckit::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert!(calc.is_prime(2.0));
    /// assert!(calc.is_prime(11.0));
    /// assert!(!calc.is_prime(15.0));
    /// assert!(!calc.is_prime(1.0));
    /// ```
    pub fn is_prime(&self, n: f64) -> bool {
        if !is_whole(n) {
            debug!(n, "non-integer input is never prime");
            return false;
        }
        if n < 2.0 {
            return false;
        }
        if n == 2.0 {
            return true;
        }
        if n % 2.0 == 0.0 {
            return false;
        }

        // Every f64 at or above 2^53 is even, so an odd n converts exactly.
        let n = n as u64;
        debug!(n, "running trial division");
        let limit = n.isqrt();
        (3..=limit).step_by(2).all(|divisor| n % divisor != 0)
    }

    /// Evaluates an [`Operation`] by dispatching to the matching method.
    ///
    /// # Arguments
    ///
    /// * `operation` - The operation and its operands
    ///
    /// # Returns
    ///
    /// [`Outcome::Boolean`] for primality checks, [`Outcome::Number`] for
    /// everything else, or the error raised by the underlying operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use calckit::{Calculator, Operation, Outcome};
    ///
    /// let calc = Calculator::new();
    /// let op = Operation::Power { base: 2.0, exponent: 3.0 };
    /// assert_eq!(calc.evaluate(&op), Ok(Outcome::Number(8.0)));
    /// ```
    pub fn evaluate(&self, operation: &Operation) -> CalcResult<Outcome> {
        debug!(op = operation.name(), "evaluating operation");
        let outcome = match *operation {
            Operation::Add { a, b } => Outcome::Number(self.add(a, b)),
            Operation::Subtract { a, b } => Outcome::Number(self.subtract(a, b)),
            Operation::Multiply { a, b } => Outcome::Number(self.multiply(a, b)),
            Operation::Divide { a, b } => Outcome::Number(self.divide(a, b)?),
            Operation::Power { base, exponent } => Outcome::Number(self.power(base, exponent)),
            Operation::SquareRoot { n } => Outcome::Number(self.square_root(n)?),
            Operation::Factorial { n } => Outcome::Number(self.factorial(n)?),
            Operation::IsPrime { n } => Outcome::Boolean(self.is_prime(n)),
        };
        Ok(outcome)
    }
}

fn is_whole(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}
