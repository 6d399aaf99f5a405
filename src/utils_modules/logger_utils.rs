use crate::common::*;

use crate::env_configuration::env_config::*;

#[doc = "Log line layout shared by the console and the log files"]
fn metric_graphs_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        &record.args()
    )
}

#[doc = r#"
    Initializes the global logger.

    Logs go to stdout and to daily rotated files under `LOG_DIR`; the ten newest
    files are kept. The returned handle must stay alive until the program ends.

    # Panics
    When the log directory or the logger itself cannot be initialized
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = LOG_DIR.as_str();

    Logger::try_with_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(log_directory)
                        .basename("metric_graphs"),
                )
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(10),
                )
                .duplicate_to_stdout(Duplicate::Info)
                .format_for_files(metric_graphs_format)
                .format_for_stdout(metric_graphs_format)
                .start()
        })
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {}", e))
}
