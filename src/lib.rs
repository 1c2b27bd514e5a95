//! Jurassic Spark backend: a minimal HTTP service.
//!
//! Exposes a health check endpoint for infrastructure probes and a root
//! greeting route, with JSON body parsing applied ahead of handler dispatch.
//! Built with Axum.

pub mod config;
pub mod middleware;
pub mod routes;
pub mod shutdown;

pub use config::AppConfig;
