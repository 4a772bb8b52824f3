/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers can return it directly.
 *
 * # Response Format
 *
 * Field validation failures are returned as the bare field-error map:
 * ```json
 * { "name": ["This field is required."] }
 * ```
 *
 * Every other error is returned as:
 * ```json
 * { "error": "List not found", "status": 404 }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            BackendError::ValidationFailed(errors) => (status, Json(errors)).into_response(),
            other => {
                let body = serde_json::json!({
                    "error": other.message(),
                    "status": status.as_u16(),
                });
                (status, Json(body)).into_response()
            }
        }
    }
}
