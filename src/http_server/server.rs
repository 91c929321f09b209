//! # HTTP Server
//!
//! Combines the animal API, the health check and the optional static
//! front-end into one Axum router.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::animal_routes::{animal_routes, AnimalState};
use super::config::HttpServerConfig;
use super::errors::{ServerError, ServerResult};
use super::observability_routes::health_routes;
use crate::storage::{JsonFileMirror, RecordPersistence};
use crate::store::AnimalStore;

/// HTTP server for the animal store
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Open the mirror named in `config` and build the server around it
    pub fn open(config: HttpServerConfig) -> ServerResult<Self> {
        let store = AnimalStore::open(JsonFileMirror::new(&config.data_path)).map_err(|e| {
            tracing::error!(
                severity = %e.severity(),
                fatal = e.is_fatal(),
                path = %config.data_path.display(),
                error = %e,
                "failed to load mirror"
            );
            e
        })?;
        Ok(Self::with_store(config, store))
    }

    /// Build the server around an existing store
    pub fn with_store<P: RecordPersistence + 'static>(
        config: HttpServerConfig,
        store: AnimalStore<P>,
    ) -> Self {
        let router = build_router(&config, Arc::new(AnimalState::new(store)));
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> ServerResult<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|_| ServerError::InvalidAddress(self.config.socket_addr()))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, data = %self.config.data_path.display(), "API server listening");

        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

/// Build the combined router
pub fn build_router<P: RecordPersistence + 'static>(
    config: &HttpServerConfig,
    state: Arc<AnimalState<P>>,
) -> Router {
    let router = Router::new()
        .merge(health_routes())
        .nest("/api", animal_routes(state));

    let router = match config.public_dir.as_deref() {
        Some(dir) if dir.is_dir() => with_front_end(router, dir),
        _ => router,
    };

    router.layer(TraceLayer::new_for_http())
}

/// Page routes plus static assets, falling back to `index.html`
fn with_front_end(router: Router, dir: &Path) -> Router {
    let index = dir.join("index.html");
    let assets = ServeDir::new(dir).fallback(ServeFile::new(&index));

    router
        .route_service("/", ServeFile::new(&index))
        .route_service("/animals", ServeFile::new(dir.join("animals.html")))
        .route_service("/zookeepers", ServeFile::new(dir.join("zookeepers.html")))
        .fallback_service(assets)
}
