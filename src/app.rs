//! Application assembly: connect, migrate, mount routes, bind the listener.

use crate::config::{AppConfig, DatabaseConfig};
use crate::db::Database;
use crate::error::AppError;
use crate::migration::Migrator;
use crate::routes::{common_routes, park_routes, PARKS_PREFIX};
use crate::state::AppState;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Connect to the configured database and run pending migrations to completion.
pub async fn build_state(config: &DatabaseConfig) -> Result<AppState, AppError> {
    let db = Database::connect(config).await?;
    let applied = Migrator::with_defaults().migrate(&db).await?;
    tracing::info!(applied, "migrations complete");
    Ok(AppState::new(db))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest(PARKS_PREFIX, park_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}

/// Migrated database, router, and a bound listener, ready to serve.
pub struct Application {
    state: AppState,
    router: Router,
    listener: TcpListener,
}

pub async fn build_application(config: &AppConfig) -> Result<Application, AppError> {
    let state = build_state(&config.database).await?;
    let router = build_router(state.clone());
    let listener = TcpListener::bind(config.server.address()).await?;
    Ok(Application {
        state,
        router,
        listener,
    })
}

impl Application {
    pub fn local_addr(&self) -> Result<SocketAddr, AppError> {
        Ok(self.listener.local_addr()?)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Router sharing this application's state; handy for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve until Ctrl-C.
    pub async fn run(self) -> Result<(), AppError> {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
        })
        .await
    }

    /// Serve until `shutdown` resolves, then drain connections and close the pool.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), AppError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("listening on {}", self.listener.local_addr()?);
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;
        self.state.db.close().await;
        tracing::info!("server stopped");
        Ok(())
    }
}
