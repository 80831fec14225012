use dtc_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_layer_writes_a_rolling_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("file-logging")
        .console(false)
        .path(&log_dir)
        .level(LevelFilter::INFO)
        .max_files(3)
        .init()?;

    tracing::info!(target: "registry", "registry built");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("a rolling log file should exist");

    assert!(fs::metadata(&log_file)?.len() > 0, "log file should not be empty");

    Ok(())
}
