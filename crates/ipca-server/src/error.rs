//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ipca_core::IpcaError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-facing messages, kept identical to the legacy API.
pub mod messages {
    /// `ano` query parameter is not an integer.
    pub const INVALID_YEAR: &str = "Parâmetro 'ano' está ausente ou inválido.";
    /// No records for the requested year.
    pub const YEAR_NOT_FOUND: &str = "Nenhum histórico encontrado para o ano especificado.";
    /// A calculation parameter is missing or not numeric.
    pub const INVALID_PARAMETERS: &str = "Parâmetros inválidos.";
    /// Calculation start is after its end.
    pub const INVERTED_WINDOW: &str = "Ano e mês inicial devem ser anteriores ao final.";
    /// Calculation years or months outside the accepted bounds.
    pub const OUT_OF_RANGE: &str = "Parâmetros fora do intervalo permitido.";
    /// Path id is not an integer.
    pub const INVALID_ID: &str = "Requisição inválida. O ID deve ser numérico.";
    /// No record with the requested id.
    pub const ID_NOT_FOUND: &str = "Elemento não encontrado.";
}

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input.
    #[error("{0}")]
    BadRequest(String),

    /// Well-formed request with no matching data.
    #[error("{0}")]
    NotFound(String),

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Bad request with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Not found with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body: `{ "Erro": "<message>" }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    #[serde(rename = "Erro")]
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<IpcaError> for ApiError {
    fn from(err: IpcaError) -> Self {
        match err {
            IpcaError::InvalidWindow { .. } => ApiError::bad_request(messages::INVERTED_WINDOW),
            IpcaError::InvalidMonth { .. } | IpcaError::Overflow { .. } => {
                ApiError::bad_request(messages::OUT_OF_RANGE)
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_core_errors() {
        let err: ApiError = IpcaError::InvalidWindow {
            start: "02/2020".into(),
            end: "01/2020".into(),
        }
        .into();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == messages::INVERTED_WINDOW));

        let err: ApiError = IpcaError::InvalidMonth { month: 13 }.into();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == messages::OUT_OF_RANGE));

        let err: ApiError = IpcaError::dataset("boom").into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let response = ApiError::not_found(messages::ID_NOT_FOUND).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "Erro": "Elemento não encontrado." }));
    }
}
