//! # Spline Solver
//!
//! Computes per-segment cubic coefficients `(a0, a1, a2, a3)` from sample points. On the segment
//! starting at knot `x_i` the local polynomial is
//! `a0 + a1·X + a2·X² + a3·X³` with the shifted coordinate `X = x - x_i`.
//!
//! Two methods:
//! - **natural cubic spline**: continuous value, first and second derivative at every interior
//!   knot, zero second derivative at both ends. The second derivatives `m_i` at the knots solve
//!   a tridiagonal system (Thomas algorithm).
//! - **cubic Hermite spline**: value and slope prescribed at every knot, each segment is obtained
//!   from the 4×4 Hermite basis matrix.
//!
//! Input points may come in any order; they are sorted by abscissa first. Both methods are pure
//! functions of their input.

use crate::somelinalg::linear_sys_diagnostics::linear_system_diagnostics;
use crate::somelinalg::tridiagonal::{TridiagonalError, TridiagonalSystem};
use log::{Level, debug, info, log_enabled};
use nalgebra::{Matrix4, Vector4};
use std::fmt;

/// sample point (x, y)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// sample point with prescribed slope (x, y, y')
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermitePoint {
    pub x: f64,
    pub y: f64,
    pub slope: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl HermitePoint {
    pub fn new(x: f64, y: f64, slope: f64) -> Self {
        HermitePoint { x, y, slope }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64, f64)> for HermitePoint {
    fn from((x, y, slope): (f64, f64, f64)) -> Self {
        HermitePoint { x, y, slope }
    }
}

/// One polynomial piece on `[lower, upper)` (the last piece of a spline includes `upper`).
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub lower: f64,
    pub upper: f64,
    /// ascending powers of `x - lower`
    pub coefficients: [f64; 4],
}

impl Segment {
    pub fn value(&self, x: f64) -> f64 {
        let X = x - self.lower;
        let [a0, a1, a2, a3] = self.coefficients;
        ((a3 * X + a2) * X + a1) * X + a0
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let X = x - self.lower;
        let [_, a1, a2, a3] = self.coefficients;
        (3.0 * a3 * X + 2.0 * a2) * X + a1
    }

    pub fn second_derivative(&self, x: f64) -> f64 {
        let X = x - self.lower;
        let [_, _, a2, a3] = self.coefficients;
        6.0 * a3 * X + 2.0 * a2
    }

    /// membership in `[lower, upper)`, or `[lower, upper]` when `closed`
    pub fn contains(&self, x: f64, closed: bool) -> bool {
        self.lower <= x && if closed { x <= self.upper } else { x < self.upper }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// too few points, duplicate abscissas or non-finite coordinates
    DegenerateInput(String),
    SingularSystem(String),
    OutOfRange { x: f64, lower: f64, upper: f64 },
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InterpolationError::DegenerateInput(msg) => write!(f, "Degenerate input: {}", msg),
            InterpolationError::SingularSystem(msg) => write!(f, "Singular system: {}", msg),
            InterpolationError::OutOfRange { x, lower, upper } => write!(
                f,
                "x = {} is out of the interpolation range [{}, {}]",
                x, lower, upper
            ),
        }
    }
}

impl std::error::Error for InterpolationError {}

impl From<TridiagonalError> for InterpolationError {
    fn from(err: TridiagonalError) -> Self {
        InterpolationError::SingularSystem(err.to_string())
    }
}

/// Minimum number of points accepted by `natural_cubic`.
pub const NATURAL_CUBIC_MIN_POINTS: usize = 3;
/// Minimum number of points accepted by `hermite`.
pub const HERMITE_MIN_POINTS: usize = 2;

const CONDITION_THRESHOLD: f64 = 1e12;
const RESIDUAL_TOLERANCE: f64 = 1e-9;

/// steps h[i] = x[i+1] - x[i] of sorted abscissas; every step must be strictly positive
fn abscissa_steps(x: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    if let Some(i) = h.iter().position(|step| !(*step > 0.0)) {
        return Err(InterpolationError::DegenerateInput(format!(
            "duplicate abscissa x = {} (points {} and {} after sorting)",
            x[i],
            i,
            i + 1
        )));
    }
    Ok(h)
}

fn check_finite(values: &[f64]) -> Result<(), InterpolationError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(v) => Err(InterpolationError::DegenerateInput(format!(
            "non-finite coordinate {}",
            v
        ))),
        None => Ok(()),
    }
}

/// Natural cubic spline through `points` (at least 3, pairwise distinct abscissas).
pub fn natural_cubic(points: &[Point]) -> Result<Vec<Segment>, InterpolationError> {
    if points.len() < NATURAL_CUBIC_MIN_POINTS {
        return Err(InterpolationError::DegenerateInput(format!(
            "natural cubic interpolation needs at least {} points, got {}",
            NATURAL_CUBIC_MIN_POINTS,
            points.len()
        )));
    }
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    let x: Vec<f64> = sorted.iter().map(|p| p.x).collect();
    let y: Vec<f64> = sorted.iter().map(|p| p.y).collect();
    check_finite(&x)?;
    check_finite(&y)?;
    let h = abscissa_steps(&x)?;
    let n = x.len();
    let s: Vec<f64> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();

    // rows 0 and n-1 impose m[0] = m[n-1] = 0
    let mut system = TridiagonalSystem::zeros(n);
    system.set_row(0, 0.0, 1.0, 0.0, 0.0);
    system.set_row(n - 1, 0.0, 1.0, 0.0, 0.0);
    for i in 1..n - 1 {
        system.set_row(
            i,
            h[i - 1],
            2.0 * (h[i - 1] + h[i]),
            h[i],
            6.0 * (s[i] - s[i - 1]),
        );
    }
    let m = system.solve()?;
    if log_enabled!(Level::Debug) {
        linear_system_diagnostics(
            &system.to_dense(),
            &m,
            &system.rhs,
            CONDITION_THRESHOLD,
            RESIDUAL_TOLERANCE,
        );
    }
    debug!("second derivatives at knots: {:?}", m.as_slice());

    let segments: Vec<Segment> = (0..n - 1)
        .map(|i| {
            let dm = m[i + 1] - m[i];
            Segment {
                lower: x[i],
                upper: x[i + 1],
                coefficients: [
                    y[i],
                    s[i] - m[i] * h[i] / 2.0 - h[i] * dm / 6.0,
                    m[i] / 2.0,
                    dm / (6.0 * h[i]),
                ],
            }
        })
        .collect();
    info!(
        "natural cubic spline: {} knots on [{}, {}]",
        n,
        x[0],
        x[n - 1]
    );
    Ok(segments)
}

/// Cubic Hermite spline through `points` (at least 2, pairwise distinct abscissas).
///
/// For the knots i, i+1 with Δ = x[i+1] - x[i] the Hermite matrix applied to
/// `[y_i, y_{i+1}, Δ·y'_i, Δ·y'_{i+1}]` yields the coefficients `(c3, c2, c1, c0)` in the
/// normalized parameter `t = X/Δ`. Dividing row k by Δ^k converts them to coefficients in `X`.
pub fn hermite(points: &[HermitePoint]) -> Result<Vec<Segment>, InterpolationError> {
    if points.len() < HERMITE_MIN_POINTS {
        return Err(InterpolationError::DegenerateInput(format!(
            "Hermite interpolation needs at least {} points, got {}",
            HERMITE_MIN_POINTS,
            points.len()
        )));
    }
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    let x: Vec<f64> = sorted.iter().map(|p| p.x).collect();
    check_finite(&x)?;
    check_finite(&sorted.iter().map(|p| p.y).collect::<Vec<f64>>())?;
    check_finite(&sorted.iter().map(|p| p.slope).collect::<Vec<f64>>())?;
    let deltas = abscissa_steps(&x)?;

    #[rustfmt::skip]
    let basis = Matrix4::new(
         2.0, -2.0,  1.0,  1.0,
        -3.0,  3.0, -2.0, -1.0,
         0.0,  0.0,  1.0,  0.0,
         1.0,  0.0,  0.0,  0.0,
    );
    let segments: Vec<Segment> = sorted
        .windows(2)
        .zip(deltas.iter())
        .map(|(pair, &delta)| {
            let (p0, p1) = (pair[0], pair[1]);
            let column = Vector4::new(p0.y, p1.y, delta * p0.slope, delta * p1.slope);
            let c = basis * column;
            Segment {
                lower: p0.x,
                upper: p1.x,
                coefficients: [
                    c[3],
                    c[2] / delta,
                    c[1] / delta.powi(2),
                    c[0] / delta.powi(3),
                ],
            }
        })
        .collect();
    info!(
        "cubic Hermite spline: {} knots on [{}, {}]",
        x.len(),
        x[0],
        x[x.len() - 1]
    );
    Ok(segments)
}

/// `(a0, a1, a2, a3)` of each natural cubic segment, in ascending order of x
pub fn solve_natural_cubic(points: &[(f64, f64)]) -> Result<Vec<[f64; 4]>, InterpolationError> {
    let points: Vec<Point> = points.iter().map(|&p| Point::from(p)).collect();
    Ok(natural_cubic(&points)?
        .into_iter()
        .map(|s| s.coefficients)
        .collect())
}

/// `(a0, a1, a2, a3)` of each Hermite segment, in ascending order of x
pub fn solve_hermite(points: &[(f64, f64, f64)]) -> Result<Vec<[f64; 4]>, InterpolationError> {
    let points: Vec<HermitePoint> = points.iter().map(|&p| HermitePoint::from(p)).collect();
    Ok(hermite(&points)?
        .into_iter()
        .map(|s| s.coefficients)
        .collect())
}
