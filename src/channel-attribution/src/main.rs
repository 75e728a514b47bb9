//! Channel Attribution: classifies captured visits into marketing channels.
//!
//! Reads newline-delimited JSON visit records from a file or stdin and writes
//! one channel record per line to stdout. Logs go to stderr.

mod batch;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use attribution_core::config::{AppConfig, LogConfig, LogFormat};
use attribution_core::AttributionError;
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "channel-attribution")]
#[command(about = "Attribute captured visits to marketing channels")]
#[command(version)]
struct Cli {
    /// Newline-delimited JSON visit records (reads stdin when omitted)
    input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, env = "CHANNEL_ATTRIBUTION_CONFIG")]
    config: Option<PathBuf>,

    /// Abort on the first malformed record (overrides config)
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Include the decision branch and matched category (overrides config)
    #[arg(long, default_value_t = false)]
    explain: bool,

    /// Human-readable logs instead of JSON (overrides config)
    #[arg(long, default_value_t = false)]
    text_logs: bool,
}

fn init_tracing(log: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// Load configuration and apply CLI overrides.
///
/// An explicitly requested config file must load. Any other load failure
/// falls back to defaults and is handed back so it can be reported once
/// logging is up.
fn resolve_config(cli: &Cli) -> anyhow::Result<(AppConfig, Option<AttributionError>)> {
    let (mut config, load_error) = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) if cli.config.is_some() => {
            return Err(e).context("failed to load configuration file");
        }
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Apply CLI overrides
    if cli.strict {
        config.batch.strict = true;
    }
    if cli.explain {
        config.batch.explain = true;
    }
    if cli.text_logs {
        config.log.format = LogFormat::Text;
    }

    Ok((config, load_error))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, load_error) = resolve_config(&cli)?;

    init_tracing(&config.log);

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    info!(
        input = %cli.input.as_ref().map_or("<stdin>".into(), |p| p.display().to_string()),
        strict = config.batch.strict,
        explain = config.batch.explain,
        "Channel attribution starting"
    );

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let writer = BufWriter::new(io::stdout().lock());

    let summary = batch::run(reader, writer, &config.batch)?;

    info!(
        classified = summary.classified,
        skipped = summary.skipped,
        channels = %serde_json::to_string(&summary.channels)?,
        "Channel attribution complete"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("channel-attribution").chain(args.iter().copied()))
    }

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "channel-attribution-{}-{name}.toml",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_flags() {
        let _guard = ENV_LOCK.lock().unwrap();
        let (config, load_error) = resolve_config(&cli(&[])).unwrap();
        assert!(load_error.is_none());
        assert!(!config.batch.strict);
        assert!(!config.batch.explain);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_flags_override_config_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let path = write_config("overrides", "[log]\nformat = \"json\"\n[batch]\nstrict = false\n");
        let path_arg = path.display().to_string();

        let (from_file, _) = resolve_config(&cli(&["--config", &path_arg])).unwrap();
        assert!(!from_file.batch.strict);
        assert_eq!(from_file.log.format, LogFormat::Json);

        let (config, load_error) = resolve_config(&cli(&[
            "--config",
            &path_arg,
            "--strict",
            "--explain",
            "--text-logs",
        ]))
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(load_error.is_none());
        assert!(config.batch.strict);
        assert!(config.batch.explain);
        assert_eq!(config.log.format, LogFormat::Text);
    }

    #[test]
    fn test_explicit_config_file_failure_is_fatal() {
        let _guard = ENV_LOCK.lock().unwrap();
        let missing = cli(&["--config", "/nonexistent/channel-attribution.toml"]);
        assert!(resolve_config(&missing).is_err());

        let path = write_config("invalid", "[log]\nformat = \"yaml\"\n");
        let result = resolve_config(&cli(&["--config", &path.display().to_string()]));
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_implicit_load_failure_falls_back_to_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("CHANNEL_ATTRIBUTION__LOG__FORMAT", "yaml");
        let result = resolve_config(&cli(&["--explain"]));
        std::env::remove_var("CHANNEL_ATTRIBUTION__LOG__FORMAT");

        let (config, load_error) = result.unwrap();
        assert!(load_error.is_some());
        assert_eq!(config.log.format, LogFormat::Json);
        assert!(!config.batch.strict);
        assert!(config.batch.explain);
    }
}
