//! Application wiring: config, logging, store, console.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rolegate_auth::AuthFlow;
use rolegate_config::{
    apply_overrides, load_config, validate_config, CliOverrides, Config, LoggingConfig,
};
use rolegate_store::LedgerStore;

use crate::console;

/// Rolegate CLI arguments.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "rolegate",
    version,
    about = "Role-gated login and sign-up desk"
)]
pub struct AppArgs {
    /// Config file path (json/yaml/toml). Built-in defaults are used
    /// when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: CliOverrides,
}

/// Run the application with the given arguments.
pub fn run(args: AppArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, &args.overrides);
    validate_config(&config)?;

    init_tracing(&config.logging);

    let flow = AuthFlow::new(LedgerStore::new(&config.storage.data_dir));
    console::run(&flow)
}

/// Install the global tracing subscriber from the logging config.
///
/// The base level plus any per-module filters become one EnvFilter
/// directive string; format defaults to pretty, output to stderr.
fn init_tracing(config: &LoggingConfig) {
    let mut directives = config.level.clone().unwrap_or_else(|| "info".to_string());
    for (module, level) in &config.filters {
        directives.push_str(&format!(",{module}={level}"));
    }
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let stdout = config.output.as_deref() == Some("stdout");

    match config.format.as_deref().unwrap_or("pretty") {
        "json" if stdout => registry
            .with(fmt::layer().json().with_writer(io::stdout))
            .init(),
        "json" => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init(),
        "compact" if stdout => registry
            .with(fmt::layer().compact().with_writer(io::stdout))
            .init(),
        "compact" => registry
            .with(fmt::layer().compact().with_writer(io::stderr))
            .init(),
        _ if stdout => registry.with(fmt::layer().with_writer(io::stdout)).init(),
        _ => registry.with(fmt::layer().with_writer(io::stderr)).init(),
    }
}
