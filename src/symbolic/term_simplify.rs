//! # Term Simplification
//!
//! Structural, bottom-up, single-pass rewrite. Children are simplified first, then the node
//! itself is folded with the following rules:
//!
//! - `0 + x → x` (zero summands are dropped, an empty sum is `0`, a single summand stands alone)
//! - `0·x → 0`, `x·0 → 0`, `1·x → x`, `x·1 → x`
//! - `x^0 → 1` (checked first, so `0^0 → 1`), `x^1 → x`, `0^x → 0`
//! - `-(-x) → x`, `-0 → 0`, `-(c) → |c|` for a negative literal `c`
//!
//! The result is a fresh tree sharing nothing with the input, and simplifying it again renders
//! identically.

use crate::symbolic::term_engine::Term;

impl Term {
    pub fn simplify(&self) -> Term {
        match self {
            // normalizes -0.0 to 0.0
            Term::Scalar(value) => Term::Scalar(*value + 0.0),
            Term::Variable(_) => self.clone(),
            Term::Sum(summands) => {
                let mut kept: Vec<Term> = summands
                    .iter()
                    .map(|s| s.simplify())
                    .filter(|s| !s.is_zero())
                    .collect();
                match kept.len() {
                    0 => Term::Scalar(0.0),
                    1 => kept.remove(0),
                    _ => Term::Sum(kept),
                }
            }
            Term::Scale(scale, vector) => {
                let s = scale.simplify();
                let v = vector.simplify();
                if s.is_zero() || v.is_zero() {
                    Term::Scalar(0.0)
                } else if s.is_one() {
                    v
                } else if v.is_one() {
                    s
                } else {
                    Term::scale(s, v)
                }
            }
            Term::Negate(term) => match term.simplify() {
                Term::Negate(inner) => *inner,
                Term::Scalar(value) if value == 0.0 => Term::Scalar(0.0),
                Term::Scalar(value) if value < 0.0 => Term::Scalar(-value),
                other => Term::negate(other),
            },
            Term::Power(base, exponent) => {
                let b = base.simplify();
                let e = exponent.simplify();
                if e.is_zero() {
                    Term::Scalar(1.0)
                } else if e.is_one() {
                    b
                } else if b.is_zero() {
                    Term::Scalar(0.0)
                } else {
                    Term::power(b, e)
                }
            }
            Term::Indicator {
                lower,
                upper,
                variable,
                closed,
            } => Term::Indicator {
                lower: lower.simplify().boxed(),
                upper: upper.simplify().boxed(),
                variable: variable.simplify().boxed(),
                closed: *closed,
            },
            Term::PiecewiseFunction {
                lower,
                upper,
                image,
                variable,
            } => Term::piecewise_function(
                lower.simplify(),
                upper.simplify(),
                image.simplify(),
                variable.simplify(),
            ),
        }
    }
}
