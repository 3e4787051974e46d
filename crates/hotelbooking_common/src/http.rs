// --- File: crates/hotelbooking_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{HotelBookingError, HttpStatusCode};

/// Renders the error as `{"error": {"message", "code"}}` with the matching status.
impl IntoResponse for HotelBookingError {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }
        }));

        (status_code, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{conflict, not_found};

    #[tokio::test]
    async fn test_error_body_carries_message_and_code() {
        let response = conflict("All rooms are occupied.").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], 409);
        assert_eq!(
            body["error"]["message"],
            "Conflict: All rooms are occupied."
        );
    }

    #[test]
    fn test_not_found_status() {
        let response = not_found("room 3").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
