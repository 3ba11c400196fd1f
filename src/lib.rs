//! first-app: a minimal web service.
//!
//! Exposes `GET /health`, which always answers `{"status":"OK"}`, and
//! `GET /home`, which serves a single HTML file from disk.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use routes::create_router;
pub use server::{run, ServerError};
pub use state::AppState;
