#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// # Term engine
/// expression tree describing piecewise polynomials independently of any notation
///# Example
/// ```
/// use RustedInterp::symbolic::term_engine::Term;
/// let x = Term::variable("x");
/// let t = Term::add(Term::scale(Term::scalar(0.0), x.clone()), x);
/// assert_eq!(t.simplify(), Term::variable("x"));
/// ```
pub mod term_engine;
/// one-pass algebraic simplification of a Term
pub mod term_simplify;
/// LaTeX, GeoGebra, PGF/TikZ and plain text renderings of a Term
///# Example
/// ```
/// use RustedInterp::symbolic::term_engine::Term;
/// let gate = Term::indicator(Term::scalar(0.0), Term::scalar(5.0), Term::variable("x"));
/// assert_eq!(gate.geogebra(), "If[x>=0 && x<5,1,0]");
/// ```
pub mod term_render;
/// numerical evaluation of a Term and conversion into closures
pub mod term_lambdify;
mod term_engine_tests;
