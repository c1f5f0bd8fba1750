//! calckit - Stateless Calculator Library
//!
//! Arithmetic, power, square root, factorial and primality operations over
//! `f64`, with explicit errors for inputs outside an operation's domain.

pub mod domain;

pub use domain::*;
