use chrono::Local;
use derive_more::{Display, Error, From};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Display, Error, From)]
pub enum LoggerError {
    #[display("invalid log filter: {_0}")]
    Filter(ParseError),
    #[display("logger already initialized: {_0}")]
    Init(TryInitError),
}

/// `[2024-01-31 17:05:09]` in local time.
#[derive(Debug, Clone, Copy, Default)]
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "[{}]", Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Installs the global subscriber writing to stderr, so log lines never
/// interleave with the board on stdout. `RUST_LOG` wins over `level`.
pub fn init_logger(level: &str) -> Result<(), LoggerError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTimestamp)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_filter() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(matches!(init_logger("tictactoe=notalevel"), Err(LoggerError::Filter(_))));
    }
}
