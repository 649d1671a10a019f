//! log4rs initialisation.

use crate::config;
use crate::error::InspectorError;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

/// Use `log4rs.yml` when present, else log to stderr at `warn`.
///
/// `debug` forces `debug` level and ignores the file.
pub fn init_logging(debug: bool) -> Result<(), InspectorError> {
    let config_file = Path::new(config::LOG_CONFIG_FILE);
    if !debug && config_file.exists() {
        return log4rs::init_file(config_file, Default::default())
            .map_err(|e| InspectorError::Logging(e.to_string()));
    }

    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config = stderr_config(level)?;
    log4rs::init_config(config)
        .map(|_handle| ())
        .map_err(|e| InspectorError::Logging(e.to_string()))
}

fn stderr_config(level: LevelFilter) -> Result<Config, InspectorError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l:5})} {M} - {m}{n}",
        )))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| InspectorError::Logging(e.to_string()))
}
