//! File logging initialisation.

use quickadd::logging::{init_file, LoggingGuard, LOG_FILE_PREFIX};

fn assert_send<T: Send>() {}

#[test]
fn guard_is_send() {
    assert_send::<LoggingGuard>();
}

#[test]
fn file_logging_creates_directory() {
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => panic!("tempdir: {e}"),
    };
    let logs = dir.path().join("nested").join("logs");
    let guard = init_file(&logs);
    assert!(logs.is_dir());
    if guard.is_ok() {
        tracing::warn!("logging smoke test");
    }
    drop(guard);
    assert_eq!(LOG_FILE_PREFIX, "quickadd.log");
}

#[test]
fn second_cli_init_reports_error() {
    let _ = quickadd::logging::init_cli();
    assert!(quickadd::logging::init_cli().is_err());
}
