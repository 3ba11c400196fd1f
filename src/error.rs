use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Page not found: {}", .0.display())]
    PageNotFound(PathBuf),

    #[error("Failed to read page {}: {source}", .path.display())]
    PageUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No route for {0}")]
    RouteNotFound(String),
}

impl AppError {
    /// Classify a failed read of the page file.
    pub fn from_page_read(path: PathBuf, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => AppError::PageNotFound(path),
            _ => AppError::PageUnreadable { path, source: err },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::PageNotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::PageUnreadable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::PageNotFound(_) => {
                tracing::warn!(error = %self, "Home page missing");
                "The requested page could not be found."
            }
            AppError::RouteNotFound(_) => {
                tracing::debug!(error = %self, "Unmatched route");
                "The requested page could not be found."
            }
            AppError::PageUnreadable { .. } => {
                tracing::error!("Internal error: {:?}", self);
                "Internal server error"
            }
        };

        let body = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Error {}</title>
</head>
<body>
    <h1>Error {}</h1>
    <p>{}</p>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            message
        );

        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = AppError::from_page_read(
            PathBuf::from("index.html"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(err, AppError::PageNotFound(_)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_permission_denied_is_server_error() {
        let err = AppError::from_page_read(
            PathBuf::from("index.html"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, AppError::PageUnreadable { .. }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_other_io_error_is_server_error() {
        let err = AppError::from_page_read(
            PathBuf::from("/srv/secret/index.html"),
            io::Error::new(io::ErrorKind::Other, "disk on fire"),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unknown_route_is_not_found() {
        assert_eq!(
            AppError::RouteNotFound("/nope".to_string()).status(),
            StatusCode::NOT_FOUND
        );
    }
}
