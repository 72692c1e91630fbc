//! Degree queries: `Deg` and `DegBy`.

use super::Polynomial;

/// Total degree: the maximum, over every monomial, of exponent plus the
/// degree of its coefficient. Zero is degree `-1` by convention; any other
/// constant is degree `0`.
#[must_use]
pub fn degree(p: &Polynomial) -> i64 {
    match p {
        Polynomial::Constant(0) => -1,
        Polynomial::Constant(_) => 0,
        Polynomial::Composite(monos) => monos
            .iter()
            .map(|m| i64::from(m.exponent) + degree(&m.coefficient))
            .max()
            .unwrap_or(-1),
    }
}

/// Degree with respect to the variable at nesting depth `k` (0 is outermost).
#[must_use]
pub fn degree_by(p: &Polynomial, k: u64) -> i64 {
    match p {
        Polynomial::Constant(0) => -1,
        Polynomial::Constant(_) => 0,
        Polynomial::Composite(monos) => {
            if k == 0 {
                monos.iter().map(|m| i64::from(m.exponent)).max().unwrap_or(-1)
            } else {
                monos
                    .iter()
                    .map(|m| degree_by(&m.coefficient, k - 1))
                    .max()
                    .unwrap_or(-1)
            }
        }
    }
}
