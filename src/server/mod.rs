//! HTTP listener.
//!
//! Binds one TCP socket for the lifetime of the process and hands accepted
//! connections to the axum router. There is no TLS and no graceful shutdown:
//! the server runs until the process is terminated.

mod listener;

pub use listener::{bind, run, serve, ServerError};
