// src/main.rs
use hugoterm::TerminalConfig;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = TerminalConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!("{err}, using defaults");
        TerminalConfig::default()
    });

    hugoterm::app::run(config)
}
