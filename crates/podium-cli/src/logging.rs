use anyhow::Result;
use twyg::{LogLevel, OptsBuilder, Output};

use crate::config::LoggingConfig;

/// Install the twyg logger on stderr. `verbose` forces debug output.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let level = if verbose {
        LogLevel::Debug
    } else {
        parse_level(&config.level)
    };

    let opts = OptsBuilder::new()
        .coloured(config.coloured)
        .output(Output::Stderr)
        .level(level)
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid logging options: {e:?}"))?;

    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e:?}"))?;
    Ok(())
}

fn parse_level(level: &str) -> LogLevel {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "error" => LogLevel::Error,
        _ => LogLevel::Warn,
    }
}
