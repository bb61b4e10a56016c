//! # Term Rendering
//!
//! One rendering function per target notation, each an exhaustive match over the node kinds:
//! - `Display` - plain text for logs and debugging
//! - `latex()` - LaTeX mathematics
//! - `geogebra()` - GeoGebra input bar syntax
//! - `pgf()` - PGF/TikZ drawing macros (`\draw ... plot(\x, {...});`)
//!
//! Compound nodes are always parenthesized, so the output never depends on the precedence rules
//! of the target language.

use crate::symbolic::term_engine::Term;
use itertools::Itertools;
use std::fmt;
use strum_macros::{EnumIter, EnumString};

/// samples used by `\draw[smooth, samples=...]` when nothing else is asked for
pub const DEFAULT_PGF_SAMPLES: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, strum_macros::Display)]
#[strum(ascii_case_insensitive)]
pub enum Notation {
    #[strum(to_string = "plain", serialize = "text")]
    Plain,
    #[strum(to_string = "latex", serialize = "tex")]
    Latex,
    #[strum(to_string = "geogebra", serialize = "ggb")]
    Geogebra,
    #[strum(to_string = "pgf", serialize = "tikz")]
    Pgf,
}

/// Shortest round-trip representation of a float (`2` for 2.0, `0.5` for 0.5), or a fixed
/// number of decimals. Negative zero prints as `0`.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => format!("{}", value),
    }
}

fn scalar_text(value: f64) -> String {
    let text = format_number(value, None);
    if value < 0.0 {
        format!("({})", text)
    } else {
        text
    }
}

fn joined_sum(summands: Vec<String>, separator: &str) -> String {
    if summands.is_empty() {
        "0".to_string()
    } else {
        format!("({})", summands.iter().join(separator))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Scalar(value) => write!(f, "{}", scalar_text(*value)),
            Term::Variable(name) => write!(f, "{}", name),
            Term::Sum(summands) => write!(
                f,
                "{}",
                joined_sum(summands.iter().map(|s| s.to_string()).collect(), " + ")
            ),
            Term::Scale(scale, vector) => write!(f, "({} * {})", scale, vector),
            Term::Negate(term) => write!(f, "(-{})", term),
            Term::Power(base, exp) => write!(f, "({} ^ {})", base, exp),
            Term::Indicator {
                lower,
                upper,
                variable,
                closed,
            } => write!(
                f,
                "1[{}, {}{}({})",
                lower,
                upper,
                if *closed { "]" } else { ")" },
                variable
            ),
            Term::PiecewiseFunction {
                lower,
                upper,
                image,
                variable,
            } => write!(f, "{} in [{}, {}] -> {}", variable, lower, upper, image),
        }
    }
}

impl Term {
    pub fn render(&self, notation: Notation) -> String {
        match notation {
            Notation::Plain => self.to_string(),
            Notation::Latex => self.latex(),
            Notation::Geogebra => self.geogebra(),
            Notation::Pgf => self.pgf(),
        }
    }

    pub fn latex(&self) -> String {
        match self {
            Term::Scalar(value) => scalar_text(*value),
            Term::Variable(name) => name.clone(),
            Term::Sum(summands) => joined_sum(summands.iter().map(|s| s.latex()).collect(), "+"),
            Term::Scale(scale, vector) => format!("({}\\cdot {})", scale.latex(), vector.latex()),
            Term::Negate(term) => format!("(-({}))", term.latex()),
            Term::Power(base, exp) => format!("({}^{{{}}})", base.latex(), exp.latex()),
            Term::Indicator {
                lower,
                upper,
                variable,
                closed,
            } => format!(
                "\\mathbb{{1}}_{{\\left[{}, {}\\right{}}}({})",
                lower.latex(),
                upper.latex(),
                if *closed { "]" } else { "[" },
                variable.latex()
            ),
            Term::PiecewiseFunction {
                lower,
                upper,
                image,
                variable,
            } => format!(
                "{} \\in \\left[{}, {}\\right] \\longmapsto {}",
                variable.latex(),
                lower.latex(),
                upper.latex(),
                image.latex()
            ),
        }
    }

    pub fn geogebra(&self) -> String {
        match self {
            Term::Scalar(value) => scalar_text(*value),
            Term::Variable(name) => name.clone(),
            Term::Sum(summands) => {
                joined_sum(summands.iter().map(|s| s.geogebra()).collect(), "+")
            }
            Term::Scale(scale, vector) => format!("({}*{})", scale.geogebra(), vector.geogebra()),
            Term::Negate(term) => format!("(-({}))", term.geogebra()),
            Term::Power(base, exp) => format!("({}^{})", base.geogebra(), exp.geogebra()),
            Term::Indicator {
                lower,
                upper,
                variable,
                closed,
            } => {
                let v = variable.geogebra();
                format!(
                    "If[{}>={} && {}{}{},1,0]",
                    v,
                    lower.geogebra(),
                    v,
                    if *closed { "<=" } else { "<" },
                    upper.geogebra()
                )
            }
            Term::PiecewiseFunction {
                lower,
                upper,
                image,
                ..
            } => format!(
                "Function[{},{},{}]",
                image.geogebra(),
                lower.geogebra(),
                upper.geogebra()
            ),
        }
    }

    pub fn pgf(&self) -> String {
        self.pgf_with_samples(DEFAULT_PGF_SAMPLES)
    }

    /// PGF/TikZ rendering; `samples` only affects `PiecewiseFunction` nodes
    pub fn pgf_with_samples(&self, samples: usize) -> String {
        match self {
            Term::Scalar(value) => scalar_text(*value),
            // pgfmath refers to the plot variable as a macro
            Term::Variable(name) => format!("\\{}", name),
            Term::Sum(summands) => joined_sum(
                summands
                    .iter()
                    .map(|s| s.pgf_with_samples(samples))
                    .collect(),
                "+",
            ),
            Term::Scale(scale, vector) => format!(
                "({}*{})",
                scale.pgf_with_samples(samples),
                vector.pgf_with_samples(samples)
            ),
            Term::Negate(term) => format!("(-({}))", term.pgf_with_samples(samples)),
            Term::Power(base, exp) => format!(
                "({}^{})",
                base.pgf_with_samples(samples),
                exp.pgf_with_samples(samples)
            ),
            Term::Indicator {
                lower,
                upper,
                variable,
                closed,
            } => {
                let v = variable.pgf_with_samples(samples);
                format!(
                    "and({}>={},{}{}{})",
                    v,
                    lower.pgf_with_samples(samples),
                    v,
                    if *closed { "<=" } else { "<" },
                    upper.pgf_with_samples(samples)
                )
            }
            Term::PiecewiseFunction {
                lower,
                upper,
                image,
                variable,
            } => format!(
                "\\draw[smooth,samples={},domain={}:{}] plot({},{{{}}});",
                samples,
                pgf_domain_bound(lower, samples),
                pgf_domain_bound(upper, samples),
                variable.pgf_with_samples(samples),
                image.pgf_with_samples(samples)
            ),
        }
    }
}

/// domain=a:b does not accept parenthesized literals
fn pgf_domain_bound(bound: &Term, samples: usize) -> String {
    match bound {
        Term::Scalar(value) => format_number(*value, None),
        other => other.pgf_with_samples(samples),
    }
}
