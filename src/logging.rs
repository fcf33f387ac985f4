use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

/// Sends `tracing` output to `path` through a non-blocking writer.
///
/// Returns `None` without installing anything when no path is given. The returned guard must be
/// kept alive for as long as logs should be flushed.
pub fn init_file_logging(path: Option<&Path>) -> Option<WorkerGuard> {
    let path = path?;
    let file_name = path.file_name()?;
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        directory, file_name,
    ));
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Some(guard)
}
