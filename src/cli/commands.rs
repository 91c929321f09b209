//! CLI command implementations

use std::fs;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::query::AnimalQuery;
use crate::record::AnimalRecord;
use crate::storage::{JsonFileMirror, RecordPersistence};
use crate::store::AnimalStore;

use super::args::{Cli, Command, QueryArgs, ServeArgs};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    init_logging();
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(args),
        Command::Init { data } => init(&data),
        Command::Query(args) => query(&args),
    }
}

/// Logs go to stderr so command output on stdout stays parseable.
/// `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolve the server configuration.
///
/// Precedence, lowest first: defaults, config file, `PORT`, command-line flags.
pub fn resolve_config(args: &ServeArgs, env_port: Option<String>) -> CliResult<HttpServerConfig> {
    let base = match &args.config {
        Some(path) => load_config_file(path)?,
        None => HttpServerConfig::default(),
    };

    let mut config = base.with_env_port(env_port)?;

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(data) = &args.data {
        config.data_path = data.clone();
    }
    if let Some(public) = &args.public {
        config.public_dir = Some(public.clone());
    }

    Ok(config)
}

fn load_config_file(path: &Path) -> CliResult<HttpServerConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        CliError::config_error(format!("Invalid config {}: {}", path.display(), e))
    })
}

/// Start the HTTP server and block until it stops
pub fn serve(args: ServeArgs) -> CliResult<()> {
    let config = resolve_config(&args, std::env::var(crate::http_server::config::PORT_ENV).ok())?;
    let server = HttpServer::open(config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())?;
    Ok(())
}

/// Create an empty mirror; refuses to overwrite an existing one
pub fn init(data: &Path) -> CliResult<()> {
    let mirror = JsonFileMirror::new(data);
    if mirror.exists() {
        return Err(CliError::already_initialized(data.display()));
    }

    mirror.initialize()?;
    tracing::info!(path = %data.display(), "mirror initialized");

    write_response(&serde_json::json!({
        "initialized": true,
        "path": data.display().to_string()
    }))
}

/// Print matching records (or the single record for `--id`)
pub fn query(args: &QueryArgs) -> CliResult<()> {
    let records = run_query(JsonFileMirror::new(&args.data), args)?;
    write_response(&records)
}

/// Evaluate a query against any persistence backend
pub fn run_query<P: RecordPersistence>(
    persistence: P,
    args: &QueryArgs,
) -> CliResult<Vec<AnimalRecord>> {
    let store = AnimalStore::open(persistence)?;

    if let Some(id) = &args.id {
        return store
            .find_by_id(id)
            .cloned()
            .map(|record| vec![record])
            .ok_or_else(|| CliError::not_found(id));
    }

    let mut query = AnimalQuery::new();
    query.personality_traits = args.traits.clone();
    query.diet = args.diet.clone();
    query.species = args.species.clone();
    query.name = args.name.clone();

    Ok(store.filter(&query).into_iter().cloned().collect())
}
