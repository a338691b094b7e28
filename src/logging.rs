use std::path::Path;
use std::path::PathBuf;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialise logging. With `debug` the level is `debug` and can be
/// overridden via the `RUST_LOG` environment variable; otherwise it is fixed
/// at `info`.
///
/// When `log_file` is given, output is additionally appended to that file.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    // Without debug logging we ignore `RUST_LOG` so a stray variable in the
    // user's environment cannot make the overlay verbose.
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let file_layer = log_file.and_then(|path| {
        let (dir, name) = split_log_path(&path)?;
        let appender = tracing_appender::rolling::never(dir, name);
        Some(fmt::layer().with_ansi(false).with_writer(appender))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init();
}

fn split_log_path(path: &Path) -> Option<(PathBuf, PathBuf)> {
    let name = PathBuf::from(path.file_name()?);
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Some((dir, name))
}
