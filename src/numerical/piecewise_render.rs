//! # Piecewise Renderer
//!
//! Writes a piecewise polynomial, given by ascending boundaries `b_0 < ... < b_n` and one
//! coefficient tuple per segment, as
//!
//! `Σ_i poly_i(x - b_i) · 1_{[b_i, b_{i+1})}(x)`
//!
//! in one of four output formats: LaTeX (`Typeset`), GeoGebra (`PlotTool`), PGF/TikZ
//! (`VectorMacro`, one `\draw` per segment restricted by its `domain`) or an evaluable
//! `Term` tree (`EvaluableTree`).
//!
//! Interval convention, identical in every format: each segment is `[b_i, b_{i+1})` except the
//! last one which is closed, `[b_{n-1}, b_n]`.

use crate::numerical::polynomial_format::{
    PolynomialTemplate, polynomial_term, polynomial_text, shifted_indeterminate,
};
use crate::symbolic::term_engine::Term;
use crate::symbolic::term_render::{DEFAULT_PGF_SAMPLES, format_number};
use itertools::Itertools;
use log::debug;
use std::fmt;
use strum_macros::{EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, strum_macros::Display)]
#[strum(ascii_case_insensitive)]
pub enum OutputFormat {
    #[strum(to_string = "latex", serialize = "typeset")]
    Typeset,
    #[strum(to_string = "geogebra", serialize = "plot-tool")]
    PlotTool,
    #[strum(to_string = "pgf", serialize = "tikz", serialize = "vector-macro")]
    VectorMacro,
    #[strum(to_string = "tree", serialize = "evaluable-tree")]
    EvaluableTree,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// name of the free variable
    pub variable: String,
    /// `samples=` of the PGF `\draw` directives
    pub samples: usize,
    /// decimals of the numbers written in text formats
    pub precision: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            variable: "x".to_string(),
            samples: DEFAULT_PGF_SAMPLES,
            precision: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Text(String),
    Tree(Term),
}

impl Rendered {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Rendered::Text(text) => Some(text),
            Rendered::Tree(_) => None,
        }
    }

    pub fn into_tree(self) -> Option<Term> {
        match self {
            Rendered::Tree(term) => Some(term),
            Rendered::Text(_) => None,
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rendered::Text(text) => write!(f, "{}", text),
            Rendered::Tree(term) => write!(f, "{}", term),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    Empty,
    MismatchedLengths { boundaries: usize, coefficients: usize },
    UnsortedBoundaries { index: usize },
    NonFiniteBoundary(f64),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RenderError::Empty => write!(f, "Nothing to render: no segments given"),
            RenderError::MismatchedLengths {
                boundaries,
                coefficients,
            } => write!(
                f,
                "{} boundaries given for {} coefficient tuples, expected {}",
                boundaries,
                coefficients,
                coefficients + 1
            ),
            RenderError::UnsortedBoundaries { index } => write!(
                f,
                "Boundaries must be strictly ascending (violated at index {})",
                index
            ),
            RenderError::NonFiniteBoundary(value) => {
                write!(f, "Boundary {} is not a finite number", value)
            }
        }
    }
}

impl std::error::Error for RenderError {}

fn validate<C: AsRef<[f64]>>(boundaries: &[f64], coefficients: &[C]) -> Result<(), RenderError> {
    if coefficients.is_empty() {
        return Err(RenderError::Empty);
    }
    if boundaries.len() != coefficients.len() + 1 {
        return Err(RenderError::MismatchedLengths {
            boundaries: boundaries.len(),
            coefficients: coefficients.len(),
        });
    }
    if let Some(b) = boundaries.iter().find(|b| !b.is_finite()) {
        return Err(RenderError::NonFiniteBoundary(*b));
    }
    if let Some(index) = boundaries.windows(2).position(|w| !(w[0] < w[1])) {
        return Err(RenderError::UnsortedBoundaries { index: index + 1 });
    }
    Ok(())
}

/// (lower, upper, coefficients, is_last) for every segment
fn pieces<'a, C: AsRef<[f64]>>(
    boundaries: &'a [f64],
    coefficients: &'a [C],
) -> impl Iterator<Item = (f64, f64, &'a [f64], bool)> + 'a {
    let last = coefficients.len() - 1;
    boundaries
        .windows(2)
        .zip(coefficients.iter())
        .enumerate()
        .map(move |(i, (w, c))| (w[0], w[1], c.as_ref(), i == last))
}

pub fn render_piecewise<C: AsRef<[f64]>>(
    boundaries: &[f64],
    coefficients: &[C],
    format: OutputFormat,
    settings: &RenderSettings,
) -> Result<Rendered, RenderError> {
    validate(boundaries, coefficients)?;
    debug!(
        "rendering {} segments on [{}, {}] as {}",
        coefficients.len(),
        boundaries[0],
        boundaries[boundaries.len() - 1],
        format
    );
    let rendered = match format {
        OutputFormat::Typeset => Rendered::Text(typeset_text(boundaries, coefficients, settings)),
        OutputFormat::PlotTool => {
            Rendered::Text(plot_tool_text(boundaries, coefficients, settings))
        }
        OutputFormat::VectorMacro => {
            Rendered::Text(vector_macro_text(boundaries, coefficients, settings))
        }
        OutputFormat::EvaluableTree => Rendered::Tree(piecewise_polynomial(
            &settings.variable,
            boundaries,
            coefficients,
        )?),
    };
    Ok(rendered)
}

/// `\left(poly\right)\cdot\mathbb{1}_{\left[a, b\right[}(x) + ...`
fn typeset_text<C: AsRef<[f64]>>(
    boundaries: &[f64],
    coefficients: &[C],
    settings: &RenderSettings,
) -> String {
    let p = settings.precision;
    let var = &settings.variable;
    pieces(boundaries, coefficients)
        .map(|(a, b, coefs, last)| {
            let template =
                PolynomialTemplate::latex(&shifted_indeterminate(var, a, p)).with_precision(p);
            format!(
                "\\left({}\\right)\\cdot\\mathbb{{1}}_{{\\left[{}, {}\\right{}}}({})",
                polynomial_text(coefs, &template),
                format_number(a, p),
                format_number(b, p),
                if last { "]" } else { "[" },
                var
            )
        })
        .join(" + ")
}

/// `Function[If[x>=a && x<b,poly,0]+...,b_0,b_n]`
fn plot_tool_text<C: AsRef<[f64]>>(
    boundaries: &[f64],
    coefficients: &[C],
    settings: &RenderSettings,
) -> String {
    let p = settings.precision;
    let var = &settings.variable;
    let body = pieces(boundaries, coefficients)
        .map(|(a, b, coefs, last)| {
            let template =
                PolynomialTemplate::geogebra(&shifted_indeterminate(var, a, p)).with_precision(p);
            format!(
                "If[{}>={} && {}{}{},{},0]",
                var,
                format_number(a, p),
                var,
                if last { "<=" } else { "<" },
                format_number(b, p),
                polynomial_text(coefs, &template)
            )
        })
        .join("+");
    format!(
        "Function[{},{},{}]",
        body,
        format_number(boundaries[0], p),
        format_number(boundaries[boundaries.len() - 1], p)
    )
}

/// one `\draw[smooth,samples=N,domain=a:b] plot(\x,{poly});` line per segment
fn vector_macro_text<C: AsRef<[f64]>>(
    boundaries: &[f64],
    coefficients: &[C],
    settings: &RenderSettings,
) -> String {
    let p = settings.precision;
    let var = format!("\\{}", settings.variable);
    pieces(boundaries, coefficients)
        .map(|(a, b, coefs, _)| {
            let template =
                PolynomialTemplate::pgf(&shifted_indeterminate(&var, a, p)).with_precision(p);
            format!(
                "\\draw[smooth,samples={},domain={}:{}] plot({},{{{}}});",
                settings.samples,
                format_number(a, p),
                format_number(b, p),
                var,
                polynomial_text(coefs, &template)
            )
        })
        .join("\n")
}

/// `PiecewiseFunction(b_0, b_n, Σ Scale(Indicator(b_i, b_{i+1}, x), poly_i(x - b_i)), x)`
pub fn piecewise_polynomial<C: AsRef<[f64]>>(
    variable: &str,
    boundaries: &[f64],
    coefficients: &[C],
) -> Result<Term, RenderError> {
    validate(boundaries, coefficients)?;
    let var = Term::variable(variable);
    let summands: Vec<Term> = pieces(boundaries, coefficients)
        .map(|(a, b, coefs, last)| {
            let shifted = Term::subtract(var.clone(), Term::scalar(a));
            let gate = if last {
                Term::closed_indicator(Term::scalar(a), Term::scalar(b), var.clone())
            } else {
                Term::indicator(Term::scalar(a), Term::scalar(b), var.clone())
            };
            Term::scale(gate, polynomial_term(coefs, &shifted))
        })
        .collect();
    Ok(Term::piecewise_function(
        Term::scalar(boundaries[0]),
        Term::scalar(boundaries[boundaries.len() - 1]),
        Term::sum(summands),
        var,
    ))
}
