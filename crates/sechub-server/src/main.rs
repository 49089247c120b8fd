#![forbid(unsafe_code)]

use sechub_core::{DatabaseConfig, FileCatalogConfig};
use sechub_query::UseCaseFactory;
use sechub_server::{
    build_router, init_tracing, validate_startup_config, ApiConfig, AppState, CatalogBackend,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};

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
            (Err(e), _) | (_, Err(e)) => {
                error!("signal handler registration failed: {e}");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn build_factory(api: &ApiConfig) -> Result<UseCaseFactory, String> {
    let factory = match api.backend {
        CatalogBackend::Database => {
            let cfg = DatabaseConfig::from_env().map_err(|e| e.to_string())?;
            UseCaseFactory::from_database_config(&cfg)
        }
        CatalogBackend::File => {
            let cfg = FileCatalogConfig::from_env().map_err(|e| e.to_string())?;
            UseCaseFactory::from_file_config(&cfg)
        }
    };
    factory.map_err(|e| format!("catalog startup failed: {e}"))
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let api = ApiConfig::from_env().map_err(|e| e.to_string())?;
    init_tracing(&api)?;
    validate_startup_config(&api).map_err(|e| e.to_string())?;
    let addr = api.socket_addr().map_err(|e| e.to_string())?;
    let factory = build_factory(&api)?;
    info!(backend = ?api.backend, bind = %api.bind_addr, "catalog ready");

    let app = build_router(AppState::new(factory, api));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind failed: {e}"))?;
    info!("sechub-server listening on {addr}");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        wait_for_shutdown_signal().await;
        info!("shutdown signal received, draining connections");
    })
    .await
    .map_err(|e| format!("server failed: {e}"))
}
