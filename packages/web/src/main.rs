//! Mosab Sport Platform - Dioxus fullstack web frontend
//!
//! Court booking, match operations and reporting for sports venues. This
//! package is the web frontend; it talks to the booking REST API configured
//! via `API_URL`.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --addr 0.0.0.0 --port 3000 --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```
//!
//! The standalone server binary binds `HOST`/`PORT` (default `0.0.0.0:3000`,
//! matching the docker-compose port mapping).

#![allow(non_snake_case)]

mod api;
mod app;
mod auth;
mod components;
mod config;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    #[cfg(feature = "server")]
    server::launch();

    #[cfg(not(feature = "server"))]
    dioxus::launch(app::App);
}

#[cfg(feature = "server")]
mod server {
    use axum::Router;
    use dioxus::prelude::*;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    use crate::app::App;
    use crate::config;

    /// Serve the fullstack app over axum with a session layer attached,
    /// so `#[server]` functions can extract `tower_sessions::Session`.
    pub fn launch() {
        tokio::runtime::Runtime::new()
            .expect("failed to start tokio runtime")
            .block_on(serve());
    }

    async fn serve() {
        let addr = config::server_addr();

        let session_store = MemoryStore::default();
        let session_layer = SessionManagerLayer::new(session_store);

        let router = Router::new()
            .serve_dioxus_application(ServeConfigBuilder::default(), App)
            .layer(session_layer);

        tracing::info!("listening on {addr}");

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("failed to bind dev server address");
        axum::serve(listener, router.into_make_service())
            .await
            .expect("server error");
    }
}
