use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Initialise logging. With `debug` the default level is `debug` and can be
/// overridden via `RUST_LOG`; otherwise the level is fixed at `info`.
///
/// When `file` is given, output goes to that file instead of stderr. A file
/// that cannot be created falls back to stderr. Calling this more than once
/// is harmless: only the first call installs a subscriber.
pub fn init(debug: bool, file: Option<PathBuf>) {
    // Ignore `RUST_LOG` unless debug logging was asked for, so a stray
    // variable in the user's environment does not flood the host's output.
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let mut open_error = None;
    let appender = file.and_then(|path| match file_appender(&path) {
        Ok(appender) => Some(appender),
        Err(e) => {
            open_error = Some((path, e));
            None
        }
    });
    let result = match appender {
        Some(appender) => builder.with_ansi(false).with_writer(appender).try_init(),
        None => builder.try_init(),
    };
    if let Some((path, e)) = open_error {
        tracing::warn!(path = %path.display(), error = %e, "log file unavailable, using stderr");
    }
    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
}

fn file_appender(path: &std::path::Path) -> anyhow::Result<RollingFileAppender> {
    let dir = path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "debug_overlay.log".into());
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)?;
    Ok(appender)
}
