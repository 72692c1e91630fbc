//! Additive and multiplicative kernel operations: `Add`, `AddMonos`, `Neg`,
//! `Sub`, `Mul`.
//!
//! `AddMonos` is the single canonicalization sweep every other constructor
//! routes through: it sorts by exponent, merges equal-exponent runs via
//! recursive `Add`, drops zero coefficients, and collapses a lone
//! constant-coefficient, exponent-zero monomial to a bare constant.

use super::{Monomial, Polynomial};

/// Sum two polynomials, preserving canonical form.
#[must_use]
pub fn add(p: &Polynomial, q: &Polynomial) -> Polynomial {
    match (p, q) {
        (Polynomial::Constant(a), Polynomial::Constant(b)) => {
            Polynomial::Constant(a.wrapping_add(*b))
        }
        (Polynomial::Constant(c), Polynomial::Composite(monos))
        | (Polynomial::Composite(monos), Polynomial::Constant(c)) => {
            if *c == 0 {
                return Polynomial::Composite(monos.clone());
            }
            let mut combined: Vec<Monomial> = monos.clone();
            combined.push(Monomial {
                coefficient: Polynomial::Constant(*c),
                exponent: 0,
            });
            add_monos(combined)
        }
        (Polynomial::Composite(left), Polynomial::Composite(right)) => {
            add_monos(ordered_merge(left, right))
        }
    }
}

/// Parallel ordered merge of two already-canonical monomial lists by
/// exponent, recursively adding coefficients on ties. The result may still
/// contain zero coefficients if two equal-but-opposite coefficients met;
/// callers feed the result through [`add_monos`] to clean that up.
fn ordered_merge(left: &[Monomial], right: &[Monomial]) -> Vec<Monomial> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0usize, 0usize);
    while i < left.len() && j < right.len() {
        match left[i].exponent.cmp(&right[j].exponent) {
            std::cmp::Ordering::Less => {
                result.push(left[i].clone());
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                result.push(right[j].clone());
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                result.push(Monomial {
                    coefficient: add(&left[i].coefficient, &right[j].coefficient),
                    exponent: left[i].exponent,
                });
                i += 1;
                j += 1;
            }
        }
    }
    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}

/// Canonicalize an owned, possibly-unsorted, possibly-zero-containing
/// monomial array: sort by exponent, merge equal-exponent runs, drop zero
/// coefficients, and collapse a single constant-at-zero monomial.
///
/// This is the "adopt" ownership variant: the input array's monomials are
/// consumed directly, never cloned.
#[must_use]
pub fn add_monos(mut monos: Vec<Monomial>) -> Polynomial {
    if monos.is_empty() {
        return Polynomial::Constant(0);
    }
    monos.sort_by_key(|m| m.exponent);

    let mut merged: Vec<Monomial> = Vec::with_capacity(monos.len());
    let mut iter = monos.into_iter();
    let Some(mut current) = iter.next() else {
        return Polynomial::Constant(0);
    };
    for next in iter {
        if next.exponent == current.exponent {
            current = Monomial {
                coefficient: add(&current.coefficient, &next.coefficient),
                exponent: current.exponent,
            };
        } else {
            if !current.coefficient.is_zero() {
                merged.push(current);
            }
            current = next;
        }
    }
    if !current.coefficient.is_zero() {
        merged.push(current);
    }

    match merged.len() {
        0 => Polynomial::Constant(0),
        1 if merged[0].exponent == 0 && merged[0].coefficient.is_constant() => {
            let Monomial { coefficient, .. } = merged
                .into_iter()
                .next()
                .unwrap_or(Monomial {
                    coefficient: Polynomial::Constant(0),
                    exponent: 0,
                });
            coefficient
        }
        _ => Polynomial::Composite(merged),
    }
}

/// Canonicalize a *borrowed* monomial slice by cloning each element before
/// adopting it — the clone-ownership counterpart to [`add_monos`], for
/// callers that must retain their own input array.
#[must_use]
pub fn add_monos_cloned(monos: &[Monomial]) -> Polynomial {
    add_monos(monos.to_vec())
}

/// Negate a polynomial by recursively negating every coefficient; exponents
/// and term count are untouched, so canonical form is preserved trivially.
#[must_use]
pub fn neg(p: &Polynomial) -> Polynomial {
    match p {
        Polynomial::Constant(c) => Polynomial::Constant(c.wrapping_neg()),
        Polynomial::Composite(monos) => Polynomial::Composite(
            monos
                .iter()
                .map(|m| Monomial {
                    coefficient: neg(&m.coefficient),
                    exponent: m.exponent,
                })
                .collect(),
        ),
    }
}

/// `p - q`, defined as `Add(p, Neg(q))`.
#[must_use]
pub fn sub(p: &Polynomial, q: &Polynomial) -> Polynomial {
    add(p, &neg(q))
}

/// Multiply two polynomials, preserving canonical form.
#[must_use]
pub fn mul(p: &Polynomial, q: &Polynomial) -> Polynomial {
    if p.is_zero() || q.is_zero() {
        return Polynomial::Constant(0);
    }
    match (p, q) {
        (Polynomial::Constant(a), Polynomial::Constant(b)) => {
            Polynomial::Constant(a.wrapping_mul(*b))
        }
        (Polynomial::Constant(_), Polynomial::Composite(_)) => mul(q, p),
        (Polynomial::Composite(monos), Polynomial::Constant(_)) => {
            let scaled = monos
                .iter()
                .map(|m| Monomial {
                    coefficient: mul(&m.coefficient, q),
                    exponent: m.exponent,
                })
                .collect();
            add_monos(scaled)
        }
        (Polynomial::Composite(left), Polynomial::Composite(right)) => {
            let mut product = Vec::with_capacity(left.len() * right.len());
            for l in left {
                for r in right {
                    product.push(Monomial {
                        coefficient: mul(&l.coefficient, &r.coefficient),
                        exponent: l.exponent + r.exponent,
                    });
                }
            }
            add_monos(product)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(v: i64) -> Polynomial {
        Polynomial::Constant(v)
    }

    fn m(coefficient: Polynomial, exponent: u32) -> Monomial {
        Monomial {
            coefficient,
            exponent,
        }
    }

    #[test]
    fn add_constants_wraps_on_overflow() {
        assert_eq!(add(&c(i64::MAX), &c(1)), c(i64::MIN));
    }

    #[test]
    fn add_zero_constant_to_composite_is_identity() {
        let p = Polynomial::Composite(vec![m(c(1), 1)]);
        assert_eq!(add(&p, &c(0)), p);
    }

    #[test]
    fn add_collapses_to_constant_when_only_term_cancels() {
        // (1,1) + (-1,1) == 0
        let p = Polynomial::Composite(vec![m(c(1), 1)]);
        let q = Polynomial::Composite(vec![m(c(-1), 1)]);
        assert_eq!(add(&p, &q), c(0));
    }

    #[test]
    fn add_merges_equal_exponents_from_scenario_two() {
        // (1,0)+(1,2) cloned and added to itself -> (2,0)+(2,2)
        let p = Polynomial::Composite(vec![m(c(1), 0), m(c(1), 2)]);
        let expected = Polynomial::Composite(vec![m(c(2), 0), m(c(2), 2)]);
        assert_eq!(add(&p, &p.clone()), expected);
    }

    #[test]
    fn sub_matches_reference_pop_order_scenario() {
        // stack ends [5, 3]; pop p1=3, pop p2=5; Sub(p1,p2) = 3-5 = -2
        assert_eq!(sub(&c(3), &c(5)), c(-2));
    }

    #[test]
    fn mul_by_zero_is_zero() {
        let p = Polynomial::Composite(vec![m(c(1), 1)]);
        assert_eq!(mul(&p, &c(0)), c(0));
    }

    #[test]
    fn mul_composite_cartesian_product() {
        // (1,1) * (1,1) = (1,2)
        let p = Polynomial::Composite(vec![m(c(1), 1)]);
        assert_eq!(mul(&p, &p), Polynomial::Composite(vec![m(c(1), 2)]));
    }

    #[test]
    fn neg_twice_is_identity() {
        let p = Polynomial::Composite(vec![m(c(3), 0), m(c(-7), 5)]);
        assert_eq!(neg(&neg(&p)), p);
    }

    #[test]
    fn add_monos_drops_zero_and_sorts() {
        let monos = vec![m(c(0), 5), m(c(2), 1), m(c(3), 0)];
        assert_eq!(
            add_monos(monos),
            Polynomial::Composite(vec![m(c(3), 0), m(c(2), 1)])
        );
    }

    #[test]
    fn add_monos_cloned_does_not_consume_input() {
        let monos = vec![m(c(1), 0)];
        let result = add_monos_cloned(&monos);
        assert_eq!(result, c(1));
        assert_eq!(monos.len(), 1); // still usable
    }
}
