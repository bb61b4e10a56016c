//! # Term Engine Module
//!
//! Symbolic tree used to describe piecewise polynomial functions independently of the notation
//! they are finally written in.
//!
//! ## Main Structures and Methods
//!
//! ### `Term` Enum
//! - **Leaves**: `Scalar(f64)`, `Variable(String)`
//! - **Arithmetic**: `Sum`, `Scale`, `Negate`, `Power`
//! - **Piecewise machinery**: `Indicator` (1 on an interval, 0 elsewhere) and
//!   `PiecewiseFunction` (a body restricted to a closed domain)
//!
//! ### Key Methods
//! - builders `Term::add`, `Term::subtract`, `Term::scale`, `Term::negate`, `Term::power`, ...
//!   Every builder consumes its operands and returns a new node, nothing is mutated in place
//! - `simplify()` - one-pass algebraic clean-up (see `term_simplify`)
//! - `latex()`, `geogebra()`, `pgf()`, `Display` - renderers (see `term_render`)
//! - `evaluate()`, `lambdify()` - numerical evaluation (see `term_lambdify`)
//!
//! Numbers are never coerced implicitly: a constant must be wrapped with `Term::scalar` at the
//! call site.

use std::collections::BTreeSet;

/// Expression node. Children are exclusively owned by their parent, trees are acyclic and never
/// mutated after construction.
///
/// # Examples
/// ```rust, ignore
/// let x = Term::variable("x");
/// // 2·(x - 5)^3
/// let t = Term::scale(
///     Term::scalar(2.0),
///     Term::power(Term::subtract(x, Term::scalar(5.0)), Term::scalar(3.0)),
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    /// Numerical constant
    Scalar(f64),
    /// Named variable
    Variable(String),
    /// Ordered sum of its summands
    Sum(Vec<Term>),
    /// Product scale·vector
    Scale(Box<Term>, Box<Term>),
    /// Additive inverse
    Negate(Box<Term>),
    /// base ^ exponent
    Power(Box<Term>, Box<Term>),
    /// 1 when `lower <= variable < upper` (or `<= upper` when `closed`), 0 otherwise
    Indicator {
        lower: Box<Term>,
        upper: Box<Term>,
        variable: Box<Term>,
        closed: bool,
    },
    /// `image` on `[lower, upper]`; evaluating outside the domain is an error
    PiecewiseFunction {
        lower: Box<Term>,
        upper: Box<Term>,
        image: Box<Term>,
        variable: Box<Term>,
    },
}

impl Term {
    //___________________________________BUILDERS____________________________________

    pub fn scalar(value: f64) -> Term {
        Term::Scalar(value)
    }

    pub fn variable(name: &str) -> Term {
        Term::Variable(name.to_string())
    }

    /// lhs + rhs as a two-summand `Sum`
    pub fn add(lhs: Term, rhs: Term) -> Term {
        Term::Sum(vec![lhs, rhs])
    }

    pub fn sum(summands: Vec<Term>) -> Term {
        Term::Sum(summands)
    }

    /// lhs - rhs, built as lhs + (-rhs)
    pub fn subtract(lhs: Term, rhs: Term) -> Term {
        Term::add(lhs, Term::negate(rhs))
    }

    pub fn scale(scale: Term, vector: Term) -> Term {
        Term::Scale(scale.boxed(), vector.boxed())
    }

    pub fn negate(term: Term) -> Term {
        Term::Negate(term.boxed())
    }

    pub fn power(base: Term, exponent: Term) -> Term {
        Term::Power(base.boxed(), exponent.boxed())
    }

    /// indicator of the half-open interval [lower, upper)
    pub fn indicator(lower: Term, upper: Term, variable: Term) -> Term {
        Term::Indicator {
            lower: lower.boxed(),
            upper: upper.boxed(),
            variable: variable.boxed(),
            closed: false,
        }
    }

    /// indicator of the closed interval [lower, upper]
    pub fn closed_indicator(lower: Term, upper: Term, variable: Term) -> Term {
        Term::Indicator {
            lower: lower.boxed(),
            upper: upper.boxed(),
            variable: variable.boxed(),
            closed: true,
        }
    }

    pub fn piecewise_function(lower: Term, upper: Term, image: Term, variable: Term) -> Term {
        Term::PiecewiseFunction {
            lower: lower.boxed(),
            upper: upper.boxed(),
            image: image.boxed(),
            variable: variable.boxed(),
        }
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    //___________________________________INSPECTION____________________________________

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Term::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// true for `Scalar(0)` (and `Scalar(-0)`)
    pub fn is_zero(&self) -> bool {
        matches!(self, Term::Scalar(value) if *value == 0.0)
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Term::Scalar(value) if *value == 1.0)
    }

    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Term::Scalar(_) => false,
            Term::Variable(name) => name == var_name,
            Term::Sum(summands) => summands.iter().any(|s| s.contains_variable(var_name)),
            Term::Scale(lhs, rhs) | Term::Power(lhs, rhs) => {
                lhs.contains_variable(var_name) || rhs.contains_variable(var_name)
            }
            Term::Negate(term) => term.contains_variable(var_name),
            Term::Indicator {
                lower,
                upper,
                variable,
                ..
            } => {
                lower.contains_variable(var_name)
                    || upper.contains_variable(var_name)
                    || variable.contains_variable(var_name)
            }
            Term::PiecewiseFunction {
                lower,
                upper,
                image,
                variable,
            } => {
                lower.contains_variable(var_name)
                    || upper.contains_variable(var_name)
                    || image.contains_variable(var_name)
                    || variable.contains_variable(var_name)
            }
        }
    }

    /// sorted list of the distinct variable names appearing in the tree
    pub fn extract_variables(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names.into_iter().collect()
    }

    fn collect_variables(&self, names: &mut BTreeSet<String>) {
        match self {
            Term::Scalar(_) => {}
            Term::Variable(name) => {
                names.insert(name.clone());
            }
            Term::Sum(summands) => summands.iter().for_each(|s| s.collect_variables(names)),
            Term::Scale(lhs, rhs) | Term::Power(lhs, rhs) => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
            Term::Negate(term) => term.collect_variables(names),
            Term::Indicator {
                lower,
                upper,
                variable,
                ..
            } => {
                lower.collect_variables(names);
                upper.collect_variables(names);
                variable.collect_variables(names);
            }
            Term::PiecewiseFunction {
                lower,
                upper,
                image,
                variable,
            } => {
                lower.collect_variables(names);
                upper.collect_variables(names);
                image.collect_variables(names);
                variable.collect_variables(names);
            }
        }
    }

    /// Substitutes a variable with a constant value throughout the tree, returning a new tree.
    pub fn set_variable(&self, var: &str, value: f64) -> Term {
        match self {
            Term::Variable(name) if name == var => Term::Scalar(value),
            Term::Scalar(_) | Term::Variable(_) => self.clone(),
            Term::Sum(summands) => Term::Sum(
                summands
                    .iter()
                    .map(|s| s.set_variable(var, value))
                    .collect(),
            ),
            Term::Scale(lhs, rhs) => {
                Term::scale(lhs.set_variable(var, value), rhs.set_variable(var, value))
            }
            Term::Negate(term) => Term::negate(term.set_variable(var, value)),
            Term::Power(base, exp) => {
                Term::power(base.set_variable(var, value), exp.set_variable(var, value))
            }
            Term::Indicator {
                lower,
                upper,
                variable,
                closed,
            } => Term::Indicator {
                lower: lower.set_variable(var, value).boxed(),
                upper: upper.set_variable(var, value).boxed(),
                variable: variable.set_variable(var, value).boxed(),
                closed: *closed,
            },
            Term::PiecewiseFunction {
                lower,
                upper,
                image,
                variable,
            } => Term::piecewise_function(
                lower.set_variable(var, value),
                upper.set_variable(var, value),
                image.set_variable(var, value),
                variable.set_variable(var, value),
            ),
        }
    }
}
