//! Home page handler.
//!
//! Serves a single HTML file from disk. The file is read on every request so a
//! redeployed page is picked up without restarting the process.

use axum::{extract::State, response::Html};

use crate::error::AppError;
use crate::state::AppState;

/// Home page handler: returns the exact bytes of the configured page file.
pub async fn home(State(state): State<AppState>) -> Result<Html<Vec<u8>>, AppError> {
    let path = state.page_path();

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::from_page_read(path.to_path_buf(), e))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Serving home page");

    Ok(Html(bytes))
}
