//! examples of usage of RustedInterp
/// splines, renderings and task documents
pub mod spline_examples;
