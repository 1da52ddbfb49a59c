//! Logging setup: stderr plus a daily log file under the data directory.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const CRATES: [&str; 5] = [
    "dossier",
    "dossier_core",
    "dossier_infrastructure",
    "dossier_interaction",
    "dossier_application",
];

/// Filter directives for a `-v` count; `RUST_LOG` takes precedence.
pub fn default_directives(verbose: u8) -> String {
    let level = match verbose {
        0 => return "warn".to_string(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer and must be kept alive until exit.
/// A log directory that cannot be created only disables the file output.
pub fn init(verbose: u8, logs_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match logs_dir.filter(|dir| std::fs::create_dir_all(dir).is_ok()) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "dossier.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(0), "warn");
        let info = default_directives(1);
        assert!(info.starts_with("warn,"));
        assert!(info.contains("dossier_application=info"));
        assert!(default_directives(2).contains("dossier_core=debug"));
        assert!(default_directives(9).contains("dossier_interaction=trace"));
    }
}
