use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use crate::config::Cli;

/// Send logs to a file; the terminal belongs to the UI.
///
/// Filter precedence: `--log-level`, then `RUST_LOG`, then `info`.
pub fn init(cli: &Cli) -> color_eyre::Result<()> {
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level).wrap_err("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)
        .wrap_err_with(|| format!("cannot open log file {}", cli.log_file.display()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false);

    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
