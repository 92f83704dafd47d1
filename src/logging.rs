use anyhow::Context;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::path::Path;

const LOG_FILE_BASENAME: &str = "evcal";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts writing log records to rotating files in `log_dir`.  The level is
/// taken from `RUST_LOG`, defaulting to "info".
///
/// Logging stops when the returned handle is dropped.
pub(crate) fn init(log_dir: &Path) -> anyhow::Result<LoggerHandle> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let handle = Logger::try_with_env_or_str("info")
        .context("invalid log specification")?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .format(flexi_logger::detailed_format)
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .start()
        .context("failed to start logger")?;
    log::info!(
        "{} {} logging to {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // The global logger can only be installed once per process, so everything
    // about `init()` is checked here.
    #[test]
    fn test_init_creates_log_file() {
        let tmp = tempfile::tempdir().unwrap();
        let log_dir = tmp.path().join("logs");
        assert!(!log_dir.exists());
        let handle = init(&log_dir).unwrap();
        log::error!("cannot move selection from 9999-12-31");
        handle.flush();
        assert!(log_dir.is_dir());
        let logfiles = fs::read_dir(&log_dir)
            .unwrap()
            .map(Result::unwrap)
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with(LOG_FILE_BASENAME)
            })
            .map(|entry| entry.path())
            .collect::<Vec<_>>();
        assert_eq!(logfiles.len(), 1, "{logfiles:?}");
        let contents = fs::read_to_string(&logfiles[0]).unwrap();
        assert!(contents.contains("cannot move selection from 9999-12-31"));
    }
}
