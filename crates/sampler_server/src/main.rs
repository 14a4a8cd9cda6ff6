//! Catalog server entry point.
//!
//! Reads configuration from the environment, starts logging, opens the
//! catalog store and serves the HTTP API until SIGINT/SIGTERM.

#![forbid(unsafe_code)]

use log::{error, info};
use sampler_core::db::open_db;
use sampler_core::{init_logging, LoggingConfig};
use sampler_server::{build_router, AppState, ServerConfig};
use std::error::Error;
use std::process::ExitCode;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("sampler-server: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&LoggingConfig {
        level: config.log_level.clone(),
        log_dir: config.log_dir.clone(),
        echo_to_stderr: true,
    }) {
        eprintln!("sampler-server: {err}");
        return ExitCode::FAILURE;
    }

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_exit module=server status=error error={err}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: ServerConfig) -> Result<(), Box<dyn Error>> {
    let conn = open_db(&config.db_path)?;
    let app = build_router(AppState::new(conn));

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "event=server_start module=server status=ok addr={} db_path={}",
        listener.local_addr()?,
        config.db_path.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
