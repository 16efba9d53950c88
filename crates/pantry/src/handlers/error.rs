use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pantry_core::inventory::{InventoryError, ValidationError};
use pantry_core::storage::{
    inventory_error_to_status_code, repository_error_to_status_code, RepositoryError,
};

/// Application error type that wraps `anyhow::Error`.
///
/// Known domain errors are recovered by downcasting and answered with their
/// own status code; everything else is a 500. The body is always
/// `{"error": <message>}`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(err) = self.0.downcast_ref::<InventoryError>() {
            inventory_error_to_status_code(err)
        } else if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(err)
        } else if self.0.downcast_ref::<ValidationError>().is_some() {
            400
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Application error");
        } else {
            tracing::warn!(status = %status, error = %message, "Request rejected");
        }

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
