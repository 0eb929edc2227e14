/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "success": false,
 *   "status_code": 403,
 *   "message": "only the receiver can mark a message as read"
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use crate::backend::error::types::BackendError;
use crate::shared::ApiResponse;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let BackendError::Storage(err) = &self {
            tracing::error!("Storage failure while handling request: {:?}", err);
        }

        let body: ApiResponse<()> = ApiResponse::error(status.as_u16(), self.message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_forbidden_response() {
        let response = BackendError::forbidden("not the receiver").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["status_code"], 403);
        assert_eq!(json["message"], "not the receiver");
    }

    #[tokio::test]
    async fn test_storage_response_hides_details() {
        let response =
            BackendError::from(sqlx::Error::Protocol("disk I/O error".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["message"], "internal storage error");
    }
}
