//! Substitution operations: `At` (evaluate the outermost variable at an
//! integer) and `Compose` (substitute every variable with a polynomial, or
//! zero beyond the supplied count), plus the power-by-squaring helpers both
//! are built on.

use super::ops::{add, mul};
use super::{Monomial, Polynomial};

/// Integer exponentiation by squaring, with wrapping arithmetic.
fn wrapping_pow(base: i64, exponent: u32) -> i64 {
    match exponent {
        0 => 1,
        1 => base,
        e if e % 2 == 0 => wrapping_pow(base.wrapping_mul(base), e / 2),
        e => {
            let half = wrapping_pow(base.wrapping_mul(base), (e - 1) / 2);
            base.wrapping_mul(half)
        }
    }
}

/// Polynomial exponentiation by squaring.
fn poly_power(p: &Polynomial, exponent: u32) -> Polynomial {
    match exponent {
        0 => Polynomial::ONE,
        1 => p.clone(),
        e if e % 2 == 0 => poly_power(&mul(p, p), e / 2),
        e => mul(p, &poly_power(&mul(p, p), (e - 1) / 2)),
    }
}

/// Substitute the outermost variable with the integer `x`. A constant is
/// returned unchanged; what was variable 1 becomes the result's outer
/// variable.
#[must_use]
pub fn at(p: &Polynomial, x: i64) -> Polynomial {
    match p {
        Polynomial::Constant(c) => Polynomial::Constant(*c),
        Polynomial::Composite(monos) => {
            let mut acc = Polynomial::Constant(0);
            for mono in monos {
                let power = Polynomial::Constant(wrapping_pow(x, mono.exponent));
                acc = add(&acc, &mul(&mono.coefficient, &power));
            }
            acc
        }
    }
}

/// Substitute variable `level` of `p` with `q`, where `p` is known to begin
/// `level` structural levels above its own bottom. Levels above `level` are
/// walked through unchanged; the substitution itself happens once the
/// target level is reached.
fn single_compose(p: &Polynomial, q: &Polynomial, level: usize) -> Polynomial {
    match p {
        Polynomial::Constant(c) => Polynomial::Constant(*c),
        Polynomial::Composite(monos) => {
            if level > 0 {
                Polynomial::Composite(
                    monos
                        .iter()
                        .map(|m| Monomial {
                            coefficient: single_compose(&m.coefficient, q, level - 1),
                            exponent: m.exponent,
                        })
                        .collect(),
                )
            } else {
                let mut acc = Polynomial::Constant(0);
                for mono in monos {
                    let power = poly_power(q, mono.exponent);
                    acc = add(&acc, &mul(&mono.coefficient, &power));
                }
                acc
            }
        }
    }
}

/// Substitute variable `i` of `p` with `qs[i]` for every `i < k`, and with
/// `Constant(0)` for every other variable `p` has (`i` ranging from
/// `depth(p)-1` down to `0`).
///
/// # Panics
/// Panics if `qs.len() < k`; callers (the command interpreter) are
/// responsible for supplying exactly `k` substitution polynomials.
#[must_use]
pub fn compose(p: &Polynomial, k: u64, qs: &[Polynomial]) -> Polynomial {
    assert!(
        qs.len() as u64 >= k,
        "compose requires at least k substitution polynomials"
    );
    let zero = Polynomial::Constant(0);
    let depth = p.depth();
    let mut sol = p.clone();
    for level in (0..depth).rev() {
        let q = if (level as u64) < k {
            &qs[level]
        } else {
            &zero
        };
        sol = single_compose(&sol, q, level);
    }
    sol
}
