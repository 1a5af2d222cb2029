//! # HTTP Server
//!
//! Builds the router from startup configuration and an adapter, and
//! serves it.

use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::adapter::Adapter;
use crate::model::Repository;
use crate::observability::{events, Logger};

use super::config::HttpServerConfig;
use super::fs_routes::{fs_routes, index_routes, FsState};

/// HTTP file server
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server storing files through `adapter`
    pub fn new(config: HttpServerConfig, adapter: Arc<dyn Adapter>) -> Self {
        let router = Self::build_router(&config, adapter);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, adapter: Arc<dyn Adapter>) -> Router {
        let state = Arc::new(FsState::new(Repository::new(adapter), config));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(index_routes(state.clone()))
            .merge(fs_routes(state))
            .layer(middleware::from_fn(log_requests))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process stops
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        let fs_route = self.config.fs_route();
        Logger::info(
            events::SERVER_START,
            &[("addr", addr.as_str()), ("fs_route", fs_route.as_str())],
        );

        axum::serve(listener, self.router).await
    }
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    Logger::info(
        events::HTTP_REQUEST,
        &[("method", method.as_str()), ("path", path.as_str()), ("status", status.as_str())],
    );
    response
}
