//! Serves the grievance HTTP API.
//!
//! Usage:
//!
//! ```text
//! grievance_server [config-path]
//! ```
//!
//! Without a path the built-in defaults apply: the listener binds
//! `127.0.0.1:5000`, tickets are numbered `SMG-YYYY-NNNN` and no bearer
//! tokens are accepted. `GRIEVANCE_BIND_ADDRESS`, `GRIEVANCE_LOG` and
//! `GRIEVANCE_TICKET_PREFIX` override the file.
//!
//! Tickets and notifications are held in memory for the lifetime of the
//! process.

use camino::Utf8PathBuf;
use grievance::{
    config::{ConfigError, GrievanceConfig},
    http::{AppState, router},
    notification::adapters::memory::InMemoryNotificationRepository,
    telemetry::{TelemetryError, init_tracing},
    ticket::adapters::memory::InMemoryTicketRepository,
};
use mockable::DefaultClock;
use std::env;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::info;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can stop the server.
#[derive(Debug, Error)]
enum ServerError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server terminated: {0}")]
    Serve(#[source] std::io::Error),
}

fn main() -> Result<(), BoxError> {
    let config_path = parse_args(collect_args()?.into_iter())?;
    run(config_path.as_ref()).map_err(Into::into)
}

fn collect_args() -> Result<Vec<Utf8PathBuf>, ServerError> {
    env::args_os()
        .map(|arg_os| {
            let arg = arg_os
                .into_string()
                .map_err(|_| ServerError::InvalidArgs("argument is not valid UTF-8".into()))?;
            Ok(Utf8PathBuf::from(arg))
        })
        .collect()
}

fn parse_args(
    mut args: impl Iterator<Item = Utf8PathBuf>,
) -> Result<Option<Utf8PathBuf>, ServerError> {
    let _program = args.next();
    let config_path = args.next();
    if let Some(extra) = args.next() {
        let extra_arg = extra.as_str();
        return Err(ServerError::InvalidArgs(format!(
            "unexpected extra argument: {extra_arg}"
        )));
    }
    Ok(config_path)
}

fn load_config(path: Option<&Utf8PathBuf>) -> Result<GrievanceConfig, ServerError> {
    let base = match path {
        Some(config_path) => GrievanceConfig::load(config_path)?,
        None => GrievanceConfig::default(),
    };
    Ok(base.with_env_overrides(|name| env::var(name).ok())?)
}

fn run(config_path: Option<&Utf8PathBuf>) -> Result<(), ServerError> {
    let config = load_config(config_path)?;
    init_tracing(&config.logging.filter)?;

    let directory = Arc::new(config.principal_directory()?);
    let repository = Arc::new(InMemoryTicketRepository::with_prefix(
        config.tickets.number_prefix.clone(),
    ));
    let state = AppState::new(
        repository,
        Arc::new(InMemoryNotificationRepository::new()),
        Arc::new(DefaultClock),
        Arc::clone(&directory),
    );
    let app = router(state);
    let address = config.server.bind_address;

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(ServerError::RuntimeInit)?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(address)
            .await
            .map_err(|source| ServerError::Bind {
                address: address.to_string(),
                source,
            })?;
        info!(
            %address,
            principals = directory.len(),
            prefix = %config.tickets.number_prefix,
            "grievance server listening"
        );
        axum::serve(listener, app).await.map_err(ServerError::Serve)
    })
}
