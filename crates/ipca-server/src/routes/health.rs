//! Health check endpoint.

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::state::AppState;

/// Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let repository = &state.repository;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: repository.len(),
        first_period: repository.first_period().map(|p| p.to_string()),
        last_period: repository.last_period().map(|p| p.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    use crate::dto::HealthResponse;
    use crate::server::create_router;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_health_reports_dataset() {
        let server = TestServer::new(create_router(AppState::bundled().unwrap())).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.records, 120);
        assert_eq!(body.first_period.as_deref(), Some("01/2015"));
        assert_eq!(body.last_period.as_deref(), Some("12/2024"));
    }
}
