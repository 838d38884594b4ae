//! HTTP service answering DevOps message requests with a greeting.
//!
//! Routes:
//! - `GET /healthz`: liveness text
//! - `POST /DevOps`: `{"to": ...}` in, `{"message": ...}` out
//!
//! Any other method on those paths is answered with `405 ERROR`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod types;

use std::future::Future;
use std::net::SocketAddr;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use config::Config;

pub fn app() -> Router {
    Router::new()
        .route(
            "/healthz",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .route(
            "/DevOps",
            post(handlers::post_message).fallback(handlers::method_not_allowed),
        )
        .layer(CorsLayer::permissive())
}

/// A bound listener plus the router it will serve.
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    pub async fn bind(config: &Config) -> anyhow::Result<Self> {
        let addr = config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        Ok(Self {
            listener,
            router: app(),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves until `shutdown` resolves, then drains in-flight requests.
    pub async fn run<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = self.local_addr() {
            info!("Listening on {}", addr);
        }

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("server error")?;

        Ok(())
    }
}
