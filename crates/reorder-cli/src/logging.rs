use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{
        self,
        format::{DefaultFields, Format},
    },
    prelude::*,
};

/// `-v` count to stderr level: warnings by default, everything at `-vvv`.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Plain-text layer for `--log-file`.
fn plain_text_layer<S>(file: File) -> fmt::Layer<S, DefaultFields, Format, File> {
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();
    let log_file_layer = log_file
        .map(File::create)
        .transpose()
        .map_err(CliError::Io)?
        .map(plain_text_layer);

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer)
        .with(log_file_layer)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Once;
    use tracing::{debug, info, trace, warn};

    static GLOBAL_LOGGER: Once = Once::new();

    fn install_global_logger_once() {
        GLOBAL_LOGGER.call_once(|| {
            setup_logging(3, false, None).expect("global logger should install once");
        });
    }

    #[test]
    fn verbosity_maps_to_level_filters() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::OFF);
    }

    #[test]
    #[serial]
    fn global_logger_accepts_reorder_events() {
        install_global_logger_once();

        info!(section = "Atoms", rows = 2, "Remapped rows");
        warn!("no mass recorded for 'H' (new type 1); wrote 0.0");
        trace!(line = 12, "Rewrote type token 1 -> 2");
    }

    #[test]
    #[serial]
    fn installing_a_second_logger_is_an_error() {
        install_global_logger_once();
        let err = setup_logging(0, true, None).unwrap_err();
        assert!(err.to_string().contains("Failed to install logger"));
    }

    #[test]
    fn log_file_receives_plain_text_events() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("lmp-reorder.log");

        let file = File::create(&log_path).unwrap();
        let subscriber = tracing_subscriber::registry().with(plain_text_layer(file));
        tracing::subscriber::with_default(subscriber, || {
            debug!("Type mapping (old->new): 1->2, 2->1");
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Type mapping (old->new): 1->2, 2->1"));
        assert!(content.contains("DEBUG"));
        assert!(content.contains("ThreadId"));
        assert!(!content.contains('\u{1b}'));
    }

    #[test]
    #[serial]
    fn unwritable_log_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = setup_logging(0, false, Some(dir.path()));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
