// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0

//! # Atrium Server
//!
//! Runs one directory service node: the axum REST gateway and the tonic
//! gRPC server, both backed by the same resource services. The storage
//! backend (in-memory or PostgreSQL) is chosen from the YAML configuration
//! at startup; without a config file the node runs fully in-memory.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use atrium_core::application::{
    RoleService, StandardRoleService, StandardWorkspaceService, WorkspaceService,
};
use atrium_core::domain::config::{ServiceConfig, StorageConfig};
use atrium_core::infrastructure::db::Database;
use atrium_core::infrastructure::repositories::{
    InMemoryRoleRepository, InMemoryWorkspaceRepository, PostgresRoleRepository,
    PostgresWorkspaceRepository,
};
use atrium_core::presentation::{api, grpc};

/// Atrium directory service node
#[derive(Parser)]
#[command(name = "atrium")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to YAML configuration file
    #[arg(short, long, env = "ATRIUM_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, env = "ATRIUM_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &args.config {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };

    let (roles, workspaces) = build_services(&config.storage).await?;

    let http_addr: SocketAddr = config
        .http
        .bind
        .parse()
        .with_context(|| format!("invalid HTTP bind address {}", config.http.bind))?;
    let grpc_addr: SocketAddr = config
        .grpc
        .bind
        .parse()
        .with_context(|| format!("invalid gRPC bind address {}", config.grpc.bind))?;

    let router = api::app(roles.clone(), workspaces.clone());
    let listener = TcpListener::bind(http_addr)
        .await
        .with_context(|| format!("failed to bind {}", http_addr))?;
    info!("HTTP gateway listening on {}", http_addr);

    let http = async {
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP gateway failed")
    };
    let grpc = async {
        grpc::server::start_grpc_server(grpc_addr, roles, workspaces, shutdown_signal())
            .await
            .context("gRPC server failed")
    };

    tokio::try_join!(http, grpc)?;

    info!("shut down cleanly");
    Ok(())
}

async fn build_services(
    storage: &StorageConfig,
) -> Result<(Arc<dyn RoleService>, Arc<dyn WorkspaceService>)> {
    match storage {
        StorageConfig::InMemory => {
            info!("using in-memory storage backend");
            let roles: Arc<dyn RoleService> = Arc::new(StandardRoleService::new(Arc::new(
                InMemoryRoleRepository::new(),
            )));
            let workspaces: Arc<dyn WorkspaceService> = Arc::new(StandardWorkspaceService::new(
                Arc::new(InMemoryWorkspaceRepository::new()),
            ));
            Ok((roles, workspaces))
        }
        StorageConfig::Postgres { connection_string } => {
            info!("using PostgreSQL storage backend");
            let db = Database::new(connection_string)
                .await
                .context("failed to initialize PostgreSQL")?;
            let roles: Arc<dyn RoleService> = Arc::new(StandardRoleService::new(Arc::new(
                PostgresRoleRepository::new(db.pool().clone()),
            )));
            let workspaces: Arc<dyn WorkspaceService> = Arc::new(StandardWorkspaceService::new(
                Arc::new(PostgresWorkspaceRepository::new(db.pool().clone())),
            ));
            Ok((roles, workspaces))
        }
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
