mod cli;
mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use tinter_config::{toml_loader, validation, TinterConfig};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already set in the environment win.
fn load_dotenv() {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Ok(dir) = toml_loader::app_config_dir() {
        candidates.push(dir.join(".env"));
    }

    for path in &candidates {
        let Ok(contents) = std::fs::read_to_string(path) else {
            continue;
        };
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
        }
        return;
    }
}

fn main() -> ExitCode {
    load_dotenv();

    let args = cli::parse();

    // Config first: it carries the default log level.
    let loaded = tinter_config::load_config(args.config.as_deref());
    let default_directive = loaded
        .as_ref()
        .map(|c| c.logging.level.directive())
        .unwrap_or("tinter=info");
    let log_directive = args.log_level.as_deref().unwrap_or(default_directive);
    let directive: Directive = log_directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log directive '{log_directive}', using {default_directive}");
        default_directive
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::debug!("Tinter v{} starting", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        TinterConfig::default()
    });
    if let Err(e) = validation::validate(&config) {
        tracing::warn!("Config has invalid values, using them as parsed: {e}");
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(commands::run(args.command, &config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tinter: {e}");
            ExitCode::FAILURE
        }
    }
}
