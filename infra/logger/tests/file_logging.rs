use fweb_logger::{FileFormat, LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_sink_writes_events() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let log_dir = tmp.path().join("logs");

    let logger = Logger::builder()
        .name("fweb-file")
        .console(false)
        .level(LevelFilter::INFO)
        .directory(&log_dir)
        .format(FileFormat::Json)
        .init()?;
    assert!(logger.has_file_sink());

    tracing::info!(apex = "example.com", cert_name = "example.com-staging", "Requesting certificate");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("a log file should exist");

    let contents = fs::read_to_string(log_file)?;
    assert!(contents.contains("\"cert_name\":\"example.com-staging\""), "got: {contents}");
    Ok(())
}
