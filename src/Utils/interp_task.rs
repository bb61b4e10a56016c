//! # Interpolation Task
//!
//! Maps a task document (see `task_parser`) onto an interpolation job: the points to pass the
//! spline through, the output notation and the optional log/plot/csv destinations.
//!
//! ## Document structure
//!
//! ### interpolation
//! - `method`: `cubic` (natural cubic spline, default) or `hermite`
//! - `x`, `y`: coordinates of the points (required)
//! - `dy`: slopes at the points (required by `hermite`)
//!
//! ### output
//! - `format`: `latex`, `geogebra`, `pgf` or `tree` (default `latex`)
//! - `variable`: name of the free variable (default `x`)
//! - `samples`: `samples=` of the PGF `\draw` directives (default 100)
//! - `precision`: decimals of the printed numbers (default: shortest representation)
//!
//! ### logging
//! - `level`: `off`, `error`, `warn`, `info`, `debug` or `trace` (default `info`)
//! - `file`: log file
//!
//! ### plot
//! - `file`: PNG of the spline
//! - `csv`: csv of the sampled spline
//! - `samples`: number of samples for both (default 200)
//!
//! ## Usage
//! ```rust, ignore
//! let task: InterpTask = "interpolation\nx: 0, 5, 7, 10\ny: 0, 2, 1, 0\n".parse()?;
//! init_logger(&task.logging)?;
//! println!("{}", task.run()?);
//! ```

use crate::Utils::logger::{LogSettings, parse_level, save_samples_to_csv};
use crate::Utils::plots::plot_spline;
use crate::Utils::task_parser::{SectionMap, TaskParseError, Value, parse_task_document};
use crate::numerical::piecewise_render::{OutputFormat, RenderError, RenderSettings, Rendered};
use crate::numerical::spline_api::{Spline, SplineMethod};
use crate::numerical::spline_solver::InterpolationError;
use log::info;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// sections and keys understood by `InterpTask`
pub const TASK_SECTIONS: &[(&str, &[&str])] = &[
    ("interpolation", &["method", "x", "y", "dy"]),
    ("output", &["format", "variable", "samples", "precision"]),
    ("logging", &["level", "file"]),
    ("plot", &["file", "csv", "samples"]),
];

pub const DEFAULT_PLOT_SAMPLES: usize = 200;

const TEMPLATE: &str = "\
// interpolation task
interpolation
// cubic or hermite
method: cubic
x: 0, 5, 7, 10
y: 0, 2, 1, 0
// slopes, hermite only
// dy: 1, 0, 1, 0
output
// latex, geogebra, pgf or tree
format: latex
variable: x
samples: 100
logging
level: info
plot
samples: 200
// file: spline.png
// csv: spline.csv
";

#[derive(Debug)]
pub enum TaskError {
    Parse(TaskParseError),
    Missing { section: String, key: String },
    InvalidValue { section: String, key: String, message: String },
    Interpolation(InterpolationError),
    Render(RenderError),
    Io(io::Error),
    Plot(String),
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskError::Parse(err) => write!(f, "{}", err),
            TaskError::Missing { section, key } => {
                write!(f, "Missing required key '{}' in section '{}'", key, section)
            }
            TaskError::InvalidValue {
                section,
                key,
                message,
            } => write!(f, "Invalid value of '{}.{}': {}", section, key, message),
            TaskError::Interpolation(err) => write!(f, "{}", err),
            TaskError::Render(err) => write!(f, "{}", err),
            TaskError::Io(err) => write!(f, "I/O error: {}", err),
            TaskError::Plot(msg) => write!(f, "Plotting failed: {}", msg),
        }
    }
}

impl std::error::Error for TaskError {}

impl From<TaskParseError> for TaskError {
    fn from(err: TaskParseError) -> Self {
        TaskError::Parse(err)
    }
}

impl From<InterpolationError> for TaskError {
    fn from(err: InterpolationError) -> Self {
        TaskError::Interpolation(err)
    }
}

impl From<RenderError> for TaskError {
    fn from(err: RenderError) -> Self {
        TaskError::Render(err)
    }
}

impl From<io::Error> for TaskError {
    fn from(err: io::Error) -> Self {
        TaskError::Io(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    pub file: Option<String>,
    pub csv: Option<String>,
    pub samples: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterpTask {
    pub method: SplineMethod,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub dy: Option<Vec<f64>>,
    pub format: OutputFormat,
    pub render: RenderSettings,
    pub logging: LogSettings,
    pub plot: PlotSettings,
}

/// section accessor keeping the section title for error messages
struct Section<'a> {
    title: &'static str,
    map: Option<&'a SectionMap>,
}

impl<'a> Section<'a> {
    fn values(&self, key: &str) -> Option<&'a Vec<Value>> {
        self.map.and_then(|m| m.get(key)).and_then(|v| v.as_ref())
    }

    fn invalid(&self, key: &str, message: String) -> TaskError {
        TaskError::InvalidValue {
            section: self.title.to_string(),
            key: key.to_string(),
            message,
        }
    }

    fn single(&self, key: &str) -> Result<Option<&'a Value>, TaskError> {
        match self.values(key).map(|v| v.as_slice()) {
            None | Some([]) => Ok(None),
            Some([value]) => Ok(Some(value)),
            Some(values) => Err(self.invalid(
                key,
                format!("expected a single value, got {}", values.len()),
            )),
        }
    }

    fn floats(&self, key: &str) -> Result<Option<Vec<f64>>, TaskError> {
        match self.values(key) {
            None => Ok(None),
            Some(values) => values
                .iter()
                .map(|v| {
                    v.as_float()
                        .ok_or_else(|| self.invalid(key, format!("'{}' is not a number", v)))
                })
                .collect::<Result<Vec<f64>, TaskError>>()
                .map(Some),
        }
    }

    fn required_floats(&self, key: &str) -> Result<Vec<f64>, TaskError> {
        self.floats(key)?.ok_or_else(|| TaskError::Missing {
            section: self.title.to_string(),
            key: key.to_string(),
        })
    }

    fn text(&self, key: &str) -> Result<Option<String>, TaskError> {
        Ok(self.single(key)?.map(|v| v.to_string()))
    }

    fn count(&self, key: &str) -> Result<Option<usize>, TaskError> {
        match self.single(key)? {
            None => Ok(None),
            Some(value) => value
                .as_integer()
                .and_then(|i| usize::try_from(i).ok())
                .map(Some)
                .ok_or_else(|| self.invalid(key, format!("'{}' is not a count", value))),
        }
    }

    fn parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>, TaskError> {
        match self.text(key)? {
            None => Ok(None),
            Some(text) => text
                .parse::<T>()
                .map(Some)
                .map_err(|_| self.invalid(key, format!("unknown option '{}'", text))),
        }
    }
}

impl FromStr for InterpTask {
    type Err = TaskError;

    fn from_str(document: &str) -> Result<Self, Self::Err> {
        let parsed = parse_task_document(document, TASK_SECTIONS)?;
        let section = |title: &'static str| Section {
            title,
            map: parsed.get(title),
        };
        let interpolation = section("interpolation");
        let output = section("output");
        let logging = section("logging");
        let plot = section("plot");

        let method = interpolation
            .parsed::<SplineMethod>("method")?
            .unwrap_or(SplineMethod::NaturalCubic);
        let x = interpolation.required_floats("x")?;
        let y = interpolation.required_floats("y")?;
        let dy = interpolation.floats("dy")?;
        if method == SplineMethod::Hermite && dy.is_none() {
            return Err(TaskError::Missing {
                section: "interpolation".to_string(),
                key: "dy".to_string(),
            });
        }

        let defaults = RenderSettings::default();
        let render = RenderSettings {
            variable: output.text("variable")?.unwrap_or(defaults.variable),
            samples: output.count("samples")?.unwrap_or(defaults.samples),
            precision: output.count("precision")?,
        };
        let format = output
            .parsed::<OutputFormat>("format")?
            .unwrap_or(OutputFormat::Typeset);

        let level = match logging.text("level")? {
            None => LogSettings::default().level,
            Some(text) => parse_level(&text)
                .ok_or_else(|| logging.invalid("level", format!("unknown level '{}'", text)))?,
        };
        let logging = LogSettings {
            level,
            console: true,
            file: logging.text("file")?,
        };

        let plot = PlotSettings {
            file: plot.text("file")?,
            csv: plot.text("csv")?,
            samples: plot.count("samples")?.unwrap_or(DEFAULT_PLOT_SAMPLES),
        };

        Ok(InterpTask {
            method,
            x,
            y,
            dy,
            format,
            render,
            logging,
            plot,
        })
    }
}

impl InterpTask {
    pub fn from_file(path: &Path) -> Result<Self, TaskError> {
        let document = fs::read_to_string(path)?;
        info!("task file {} loaded", path.display());
        document.parse()
    }

    /// writes a commented example document
    pub fn create_template_file(path: &Path) -> Result<(), TaskError> {
        fs::write(path, TEMPLATE)?;
        Ok(())
    }

    pub fn spline(&self) -> Result<Spline, TaskError> {
        Ok(Spline::fit(
            self.method,
            &self.x,
            &self.y,
            self.dy.as_deref(),
        )?)
    }

    /// fits the spline, writes the requested plot and csv, returns the rendering
    pub fn run(&self) -> Result<Rendered, TaskError> {
        let spline = self.spline()?;
        let rendered = spline.render(self.format, &self.render)?;
        if let Some(ref file) = self.plot.file {
            plot_spline(&spline, self.plot.samples, file, "spline")
                .map_err(|e| TaskError::Plot(e.to_string()))?;
        }
        if let Some(ref csv) = self.plot.csv {
            let (x, y) = spline.sample_grid(self.plot.samples)?;
            save_samples_to_csv(&x, &y, &self.render.variable, "y", csv)?;
            info!("samples saved to {}", csv);
        }
        Ok(rendered)
    }
}
