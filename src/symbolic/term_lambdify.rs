use crate::symbolic::term_engine::Term;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TermError {
    /// a `PiecewiseFunction` was evaluated outside of `[lower, upper]`
    Domain { value: f64, lower: f64, upper: f64 },
    UnboundVariable(String),
    ArityMismatch { expected: usize, got: usize },
    TooManyVariables(Vec<String>),
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TermError::Domain {
                value,
                lower,
                upper,
            } => write!(
                f,
                "Domain error: {} is outside of the domain [{}, {}]",
                value, lower, upper
            ),
            TermError::UnboundVariable(name) => write!(f, "Variable '{}' has no value", name),
            TermError::ArityMismatch { expected, got } => write!(
                f,
                "Expected {} argument values, got {}",
                expected, got
            ),
            TermError::TooManyVariables(vars) => write!(
                f,
                "Expected an expression of at most one variable, found {:?}",
                vars
            ),
        }
    }
}

impl std::error::Error for TermError {}

/// evaluated closure returned by `lambdify`
pub type TermFn = Box<dyn Fn(&[f64]) -> Result<f64, TermError> + Send + Sync>;
/// evaluated closure returned by `lambdify1D`
pub type TermFn1D = Box<dyn Fn(f64) -> Result<f64, TermError> + Send + Sync>;

impl Term {
    /// Numerical value of the tree for the given variable bindings.
    ///
    /// Indicator-gated sums never fail for a bound variable: outside every interval they are 0.
    /// Only a `PiecewiseFunction` rejects values outside of its declared domain.
    pub fn evaluate(&self, bindings: &HashMap<String, f64>) -> Result<f64, TermError> {
        match self {
            Term::Scalar(value) => Ok(*value),
            Term::Variable(name) => bindings
                .get(name)
                .copied()
                .ok_or_else(|| TermError::UnboundVariable(name.clone())),
            Term::Sum(summands) => summands
                .iter()
                .try_fold(0.0, |acc, s| s.evaluate(bindings).map(|v| acc + v)),
            Term::Scale(scale, vector) => {
                Ok(scale.evaluate(bindings)? * vector.evaluate(bindings)?)
            }
            Term::Negate(term) => Ok(-term.evaluate(bindings)?),
            Term::Power(base, exp) => {
                let b = base.evaluate(bindings)?;
                let e = exp.evaluate(bindings)?;
                // integral exponents keep exact results for negative bases
                if e.fract() == 0.0 && e.abs() <= i32::MAX as f64 {
                    Ok(b.powi(e as i32))
                } else {
                    Ok(b.powf(e))
                }
            }
            Term::Indicator {
                lower,
                upper,
                variable,
                closed,
            } => {
                let lo = lower.evaluate(bindings)?;
                let hi = upper.evaluate(bindings)?;
                let v = variable.evaluate(bindings)?;
                let below_upper = if *closed { v <= hi } else { v < hi };
                Ok(if lo <= v && below_upper { 1.0 } else { 0.0 })
            }
            Term::PiecewiseFunction {
                lower,
                upper,
                image,
                variable,
            } => {
                let lo = lower.evaluate(bindings)?;
                let hi = upper.evaluate(bindings)?;
                let v = variable.evaluate(bindings)?;
                if !(lo <= v && v <= hi) {
                    return Err(TermError::Domain {
                        value: v,
                        lower: lo,
                        upper: hi,
                    });
                }
                image.evaluate(bindings)
            }
        }
    }

    /// Converts the tree into a closure taking the values of `vars` positionally,
    /// i.e. `t.lambdify(&["x", "y"])(&[2.0, 5.0])` is `t.evaluate({x: 2, y: 5})`.
    pub fn lambdify(&self, vars: &[&str]) -> TermFn {
        let term = self.clone();
        let names: Vec<String> = vars.iter().map(|v| v.to_string()).collect();
        Box::new(move |values: &[f64]| {
            if values.len() != names.len() {
                return Err(TermError::ArityMismatch {
                    expected: names.len(),
                    got: values.len(),
                });
            }
            let bindings: HashMap<String, f64> = names
                .iter()
                .cloned()
                .zip(values.iter().copied())
                .collect();
            term.evaluate(&bindings)
        })
    }

    /// closure of the single variable found in the tree (constant trees ignore their argument)
    pub fn lambdify1D(&self) -> Result<TermFn1D, TermError> {
        let vars = self.extract_variables();
        if vars.len() > 1 {
            return Err(TermError::TooManyVariables(vars));
        }
        let term = self.clone();
        Ok(Box::new(move |x: f64| {
            let bindings: HashMap<String, f64> =
                vars.iter().map(|name| (name.clone(), x)).collect();
            term.evaluate(&bindings)
        }))
    }
}
