/// # Spline solver
/// per-segment cubic coefficients of natural cubic and cubic Hermite splines
///  Example#1
/// ```
/// use RustedInterp::numerical::spline_solver::solve_natural_cubic;
/// let coefs = solve_natural_cubic(&[(0.0, 0.0), (5.0, 2.0), (7.0, 1.0), (10.0, 0.0)]).unwrap();
/// assert_eq!(coefs.len(), 3);
/// assert_eq!(coefs[0][0], 0.0);
/// ```
/// Example#2
/// ```
/// use RustedInterp::numerical::spline_solver::solve_hermite;
/// let coefs = solve_hermite(&[(0.0, 0.0, 1.0), (5.0, 0.0, 0.0), (7.0, 1.0, 1.0)]).unwrap();
/// assert_eq!(coefs.len(), 2);
/// ```
pub mod spline_solver;
mod spline_solver_tests;
/// textual and tree forms of a polynomial given by its ascending coefficients
pub mod polynomial_format;
/// piecewise polynomial rendered as LaTeX, GeoGebra, PGF/TikZ or an evaluable tree
pub mod piecewise_render;
/// user-facing spline: fit, evaluate, render, sample
///# Example
/// ```
/// use RustedInterp::numerical::spline_api::Spline;
/// use RustedInterp::numerical::piecewise_render::{OutputFormat, RenderSettings};
/// let spline = Spline::natural_cubic(&[(0.0, 0.0), (5.0, 2.0), (7.0, 1.0), (10.0, 0.0)]).unwrap();
/// let text = spline.render(OutputFormat::PlotTool, &RenderSettings::default()).unwrap();
/// assert!(text.to_string().starts_with("Function[If[x>=0 && x<5,"));
/// ```
pub mod spline_api;
