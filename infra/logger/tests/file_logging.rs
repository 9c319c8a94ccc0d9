use hostcat_kernel::config::load_config;
use hostcat_logger::{LogSettings, Logger};
use serde::Deserialize;
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AppConfig {
    log: LogSettings,
}

#[test]
#[serial]
fn file_logging_from_config_creates_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config_path = tmp_dir.path().join("hostcat.toml");

    fs::write(
        &config_path,
        format!(
            "[log]\nlevel = \"debug\"\nconsole = false\ndirectory = {:?}\nmax_files = 2\n",
            log_dir.display().to_string()
        ),
    )?;

    let config: AppConfig = load_config(Some(&config_path))?;
    assert_eq!(config.log.max_files, 2);
    assert!(!config.log.console);

    let logger =
        Logger::builder().name("integration-file-logging").settings(&config.log)?.init()?;
    assert!(logger.guard().is_some());

    tracing::info!("hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let entries = fs::read_dir(&log_dir)?;
    let log_file = entries
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let metadata = fs::metadata(&log_file)?;
    assert!(metadata.len() > 0, "log file should not be empty");

    Ok(())
}
