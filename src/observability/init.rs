//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with an environment filter and an fmt
//! layer writing to a rotating log file under the data directory.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::FileWriter;
use crate::Config;

/// Initializes the tracing subscriber with file-based log output.
///
/// The filter is taken from `RUST_LOG` when set, falling back to
/// `config.trace_level` and then `"info"`. Output goes to
/// `<data_dir>/reelscout.log` with ANSI colors disabled.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently returns if directory creation fails (observability is
///   optional)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```
/// use reelscout::observability::init_tracing;
/// use reelscout::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = Arc::new(FileWriter::new(data_dir.join("reelscout.log")));
    let make_writer = move || writer.handle();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(make_writer);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
