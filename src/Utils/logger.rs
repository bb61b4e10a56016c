use csv::Writer;
use log::{LevelFilter, debug};
use nalgebra::DVector;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;
use std::io;

/// where and how much to log
#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub console: bool,
    /// optional log file, created (truncated) on initialization
    pub file: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: LevelFilter::Info,
            console: true,
            file: None,
        }
    }
}

/// `off`, `error`, `warn`, `info`, `debug` or `trace` (any case)
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse::<LevelFilter>().ok()
}

/// Installs the global logger. A logger installed earlier stays in place, so calling this twice
/// is harmless.
pub fn init_logger(settings: &LogSettings) -> io::Result<()> {
    let level = settings.level;
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if settings.console {
        loggers.push(TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if let Some(ref filename) = settings.file {
        let file = File::create(filename)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    if !loggers.is_empty() && CombinedLogger::init(loggers).is_err() {
        debug!("logger already initialized");
    }
    Ok(())
}

/// Two-column csv of a sampled curve: header `arg,value` then one row per sample.
pub fn save_samples_to_csv(
    x: &DVector<f64>,
    y: &DVector<f64>,
    arg: &str,
    value: &str,
    filename: &str,
) -> io::Result<()> {
    if x.len() != y.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} abscissas but {} values", x.len(), y.len()),
        ));
    }
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    writer.write_record([arg, value])?;
    for (xi, yi) in x.iter().zip(y.iter()) {
        writer.write_record(&[xi.to_string(), yi.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
