//! # Spline API
//!
//! `Spline` ties the solver and the renderer together: it is built from sample points, evaluates
//! directly (without going through a term tree), converts itself into a `Term` and renders itself
//! in any `OutputFormat`.
//!
//! ```rust, ignore
//! let spline = Spline::natural_cubic(&[(0.0, 0.0), (5.0, 2.0), (7.0, 1.0), (10.0, 0.0)])?;
//! let geogebra = spline.render(OutputFormat::PlotTool, &RenderSettings::default())?;
//! let f = spline.to_term("x")?.lambdify1D()?;
//! assert_eq!(f(10.0)?, 0.0);
//! ```

use crate::numerical::piecewise_render::{
    OutputFormat, RenderError, RenderSettings, Rendered, piecewise_polynomial, render_piecewise,
};
use crate::numerical::spline_solver::{
    HermitePoint, InterpolationError, Point, Segment, hermite, natural_cubic,
};
use crate::symbolic::term_engine::Term;
use log::info;
use nalgebra::DVector;
use strum_macros::{EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, strum_macros::Display)]
#[strum(ascii_case_insensitive)]
pub enum SplineMethod {
    #[strum(to_string = "cubic", serialize = "natural-cubic", serialize = "natural")]
    NaturalCubic,
    #[strum(to_string = "hermite")]
    Hermite,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    method: SplineMethod,
    /// at least one segment, ascending and contiguous
    segments: Vec<Segment>,
}

impl Spline {
    pub fn natural_cubic(points: &[(f64, f64)]) -> Result<Spline, InterpolationError> {
        let points: Vec<Point> = points.iter().map(|&p| Point::from(p)).collect();
        Ok(Spline {
            method: SplineMethod::NaturalCubic,
            segments: natural_cubic(&points)?,
        })
    }

    pub fn hermite(points: &[(f64, f64, f64)]) -> Result<Spline, InterpolationError> {
        let points: Vec<HermitePoint> = points.iter().map(|&p| HermitePoint::from(p)).collect();
        Ok(Spline {
            method: SplineMethod::Hermite,
            segments: hermite(&points)?,
        })
    }

    /// Builds a spline from separate coordinate columns. `dy` is required by the Hermite method
    /// and ignored by the natural cubic one.
    pub fn fit(
        method: SplineMethod,
        x: &[f64],
        y: &[f64],
        dy: Option<&[f64]>,
    ) -> Result<Spline, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::DegenerateInput(format!(
                "{} abscissas but {} ordinates",
                x.len(),
                y.len()
            )));
        }
        let spline = match method {
            SplineMethod::NaturalCubic => {
                let points: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
                Spline::natural_cubic(&points)?
            }
            SplineMethod::Hermite => {
                let dy = dy.ok_or_else(|| {
                    InterpolationError::DegenerateInput(
                        "Hermite interpolation needs the slopes dy".to_string(),
                    )
                })?;
                if dy.len() != x.len() {
                    return Err(InterpolationError::DegenerateInput(format!(
                        "{} abscissas but {} slopes",
                        x.len(),
                        dy.len()
                    )));
                }
                let points: Vec<(f64, f64, f64)> = x
                    .iter()
                    .zip(y.iter())
                    .zip(dy.iter())
                    .map(|((&x, &y), &dy)| (x, y, dy))
                    .collect();
                Spline::hermite(&points)?
            }
        };
        info!(
            "{} spline with {} segments on {:?}",
            method,
            spline.segments.len(),
            spline.domain()
        );
        Ok(spline)
    }

    pub fn method(&self) -> SplineMethod {
        self.method
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// the n+1 knot abscissas b_0 < ... < b_n
    pub fn boundaries(&self) -> Vec<f64> {
        let mut boundaries: Vec<f64> = self.segments.iter().map(|s| s.lower).collect();
        boundaries.push(self.segments[self.segments.len() - 1].upper);
        boundaries
    }

    pub fn coefficients(&self) -> Vec<[f64; 4]> {
        self.segments.iter().map(|s| s.coefficients).collect()
    }

    /// (x, y) at every knot, already sorted
    pub fn knots(&self) -> Vec<(f64, f64)> {
        let last = &self.segments[self.segments.len() - 1];
        self.segments
            .iter()
            .map(|s| (s.lower, s.coefficients[0]))
            .chain(std::iter::once((last.upper, last.value(last.upper))))
            .collect()
    }

    pub fn domain(&self) -> (f64, f64) {
        (
            self.segments[0].lower,
            self.segments[self.segments.len() - 1].upper,
        )
    }

    /// direct evaluation, `[b_i, b_{i+1})` per segment and closed at the final knot
    pub fn value(&self, x: f64) -> Result<f64, InterpolationError> {
        let (lower, upper) = self.domain();
        if !(lower <= x && x <= upper) {
            return Err(InterpolationError::OutOfRange { x, lower, upper });
        }
        let i = self
            .segments
            .partition_point(|s| s.upper <= x)
            .min(self.segments.len() - 1);
        Ok(self.segments[i].value(x))
    }

    pub fn to_term(&self, variable: &str) -> Result<Term, RenderError> {
        piecewise_polynomial(variable, &self.boundaries(), &self.coefficients())
    }

    pub fn render(
        &self,
        format: OutputFormat,
        settings: &RenderSettings,
    ) -> Result<Rendered, RenderError> {
        render_piecewise(&self.boundaries(), &self.coefficients(), format, settings)
    }

    /// `samples` equally spaced abscissas over the domain (both ends included) and the spline
    /// values at them
    pub fn sample_grid(
        &self,
        samples: usize,
    ) -> Result<(DVector<f64>, DVector<f64>), InterpolationError> {
        if samples < 2 {
            return Err(InterpolationError::DegenerateInput(format!(
                "a sample grid needs at least 2 points, got {}",
                samples
            )));
        }
        let (lower, upper) = self.domain();
        let step = (upper - lower) / (samples - 1) as f64;
        // the last abscissa is pinned to `upper` so it never falls outside of the domain
        let x = DVector::from_fn(samples, |i, _| {
            if i == samples - 1 {
                upper
            } else {
                lower + step * i as f64
            }
        });
        let mut y = DVector::zeros(samples);
        for (i, xi) in x.iter().enumerate() {
            y[i] = self.value(*xi)?;
        }
        Ok((x, y))
    }
}
