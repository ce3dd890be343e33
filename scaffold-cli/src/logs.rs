use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use scaffold_sdk::PROJECT_NAME;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
	filter::LevelFilter,
	fmt::{self},
	layer::SubscriberExt,
	util::SubscriberInitExt,
	Layer,
};

pub const LOG_DIR_VAR: &str = "SCAFFOLD_LOG_DIR";

fn logs_dir() -> PathBuf {
	std::env::var_os(LOG_DIR_VAR)
		.map(PathBuf::from)
		.or_else(|| dirs::cache_dir().map(|dir| dir.join(PROJECT_NAME).join("logs")))
		.unwrap_or_else(|| PathBuf::from(".").join("logs"))
}

fn stderr_level(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::WARN,
		1 => LevelFilter::INFO,
		2 => LevelFilter::DEBUG,
		_ => LevelFilter::TRACE,
	}
}

/// Every run gets its own file with the full trace; stderr only shows what
/// `-v` asks for. Keep the guard alive until exit or buffered lines are lost.
pub fn init(verbosity: u8) -> Result<WorkerGuard> {
	let logs_dir = logs_dir();
	std::fs::create_dir_all(&logs_dir).with_context(|| format!("could not create log directory {}", logs_dir.display()))?;

	let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S%.3f");
	let log_file = format!("{timestamp}.log");
	let file_appender = tracing_appender::rolling::never(&logs_dir, log_file);
	let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

	let file_layer = fmt::layer()
		.with_writer(non_blocking_writer)
		.with_ansi(false)
		.pretty()
		.with_filter(LevelFilter::TRACE);

	let stderr_layer = fmt::layer()
		.with_writer(std::io::stderr)
		.without_time()
		.with_target(false)
		.with_filter(stderr_level(verbosity));

	tracing_subscriber::registry().with(file_layer).with(stderr_layer).init();

	tracing::debug!("Logging initialized. Log file in: {}", logs_dir.display());
	Ok(guard)
}
