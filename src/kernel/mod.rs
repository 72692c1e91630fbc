//! Sparse multivariate polynomial algebra over signed 64-bit coefficients.
//!
//! A [`Polynomial`] is either a [`Polynomial::Constant`] coefficient or a
//! [`Polynomial::Composite`] — an exponent-ordered list of [`Monomial`]s in
//! the outermost variable, each carrying a nested `Polynomial` coefficient in
//! the remaining variables. Every operation in this module takes its operands
//! by shared reference and returns a freshly owned, canonical result; none of
//! them mutate their inputs or alias monomials between caller and callee.
//!
//! Canonical form (maintained by every constructor in this module):
//! 1. A composite's exponents are strictly increasing.
//! 2. No monomial carries a zero coefficient.
//! 3. A composite has at least one monomial.
//! 4. A single-monomial, exponent-zero, constant-coefficient composite is
//!    never produced — it collapses to the constant directly.
//!
//! These invariants make structural equality (`#[derive(PartialEq)]`)
//! coincide with semantic equality.

mod analysis;
mod eval;
mod ops;

pub use analysis::{degree, degree_by};
pub use eval::{at, compose};
pub use ops::{add, add_monos, add_monos_cloned, mul, neg, sub};

use std::fmt;

/// A sparse multivariate polynomial with signed 64-bit integer coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Polynomial {
    /// A coefficient not depending on any variable.
    Constant(i64),
    /// An exponent-ordered, non-empty list of monomials in the outermost variable.
    Composite(Vec<Monomial>),
}

/// One term of a composite polynomial: a coefficient polynomial and its
/// exponent of the enclosing composite's variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monomial {
    /// The term's coefficient, itself a polynomial in the remaining variables.
    pub coefficient: Polynomial,
    /// The nonnegative exponent of this term's variable, bounded by `i32::MAX`.
    pub exponent: u32,
}

impl Polynomial {
    /// The zero polynomial.
    pub const ZERO: Polynomial = Polynomial::Constant(0);
    /// The multiplicative identity.
    pub const ONE: Polynomial = Polynomial::Constant(1);

    /// Whether this value is the `Constant` variant (any value, not just zero).
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self, Polynomial::Constant(_))
    }

    /// Whether this value is the zero polynomial.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        matches!(self, Polynomial::Constant(0))
    }

    /// The number of distinct variables nested inside this polynomial.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Polynomial::Constant(_) => 0,
            Polynomial::Composite(monos) => monos
                .iter()
                .map(|m| 1 + m.coefficient.depth())
                .max()
                .unwrap_or(0),
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polynomial::Constant(c) => write!(f, "{c}"),
            Polynomial::Composite(monos) => {
                for (i, mono) in monos.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "({},{})", mono.coefficient, mono.exponent)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composite(monos: Vec<Monomial>) -> Polynomial {
        Polynomial::Composite(monos)
    }

    fn mono(coefficient: Polynomial, exponent: u32) -> Monomial {
        Monomial {
            coefficient,
            exponent,
        }
    }

    #[test]
    fn display_constant() {
        assert_eq!(Polynomial::Constant(-5).to_string(), "-5");
        assert_eq!(Polynomial::Constant(0).to_string(), "0");
    }

    #[test]
    fn display_composite_matches_reference_scenario() {
        // (1,2)+(2,3)
        let p = composite(vec![
            mono(Polynomial::Constant(1), 2),
            mono(Polynomial::Constant(2), 3),
        ]);
        assert_eq!(p.to_string(), "(1,2)+(2,3)");
    }

    #[test]
    fn depth_counts_nested_variables() {
        let inner = composite(vec![mono(Polynomial::Constant(1), 1)]);
        let p = composite(vec![mono(inner, 2)]);
        assert_eq!(p.depth(), 2);
        assert_eq!(Polynomial::Constant(7).depth(), 0);
    }

    #[test]
    fn is_zero_and_is_constant() {
        assert!(Polynomial::Constant(0).is_zero());
        assert!(!Polynomial::Constant(1).is_zero());
        assert!(Polynomial::Constant(1).is_constant());
        assert!(!composite(vec![mono(Polynomial::Constant(1), 1)]).is_constant());
    }
}
