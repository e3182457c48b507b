use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use zone_finder_domain::config::{LogFormat, LoggingConfig};

pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let parsed = parse_level(&config.level);
    let level = parsed.unwrap_or(LevelFilter::INFO);
    let env_filter = EnvFilter::new(level.to_string());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_ansi(true).try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if parsed.is_none() {
        warn!(rejected = %config.level, "Invalid log level, falling back to info");
    }
    info!(level = %level, format = ?config.format, "Logging initialized");
    Ok(())
}

/// Accepts a bare level name only; target directives are rejected.
fn parse_level(raw: &str) -> Option<LevelFilter> {
    let normalized = raw.trim().to_ascii_lowercase();
    let name = match normalized.as_str() {
        "warning" => "warn",
        "critical" | "fatal" => "error",
        other => other,
    };
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    name.parse::<LevelFilter>().ok()
}
