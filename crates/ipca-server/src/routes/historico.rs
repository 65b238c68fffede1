//! IPCA history and adjustment endpoints.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use ipca_core::{AdjustmentCalculator, IndexRecord, YearMonth};
use tracing::debug;

use crate::dto::{parse_integer, CalculationQuery, CalculationResponse, HistoryQuery};
use crate::error::{messages, ApiError, ApiResult};
use crate::state::AppState;

/// List the full history, or a single year with `?ano=YYYY`.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<IndexRecord>>> {
    let Query(query) = query.map_err(|e| {
        debug!("Rejected history query: {}", e);
        ApiError::bad_request(messages::INVALID_YEAR)
    })?;

    let Some(raw_year) = query.ano else {
        return Ok(Json(state.repository.list_all().to_vec()));
    };

    let year: i32 = parse_integer(&raw_year).ok_or_else(|| {
        debug!("Non-numeric year filter: {:?}", raw_year);
        ApiError::bad_request(messages::INVALID_YEAR)
    })?;

    let records: Vec<IndexRecord> = state
        .repository
        .list_by_year(year)
        .into_iter()
        .cloned()
        .collect();

    if records.is_empty() {
        return Err(ApiError::not_found(messages::YEAR_NOT_FOUND));
    }

    Ok(Json(records))
}

/// Get a record by id.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<IndexRecord>> {
    let Path(raw_id) = id.map_err(|_| ApiError::bad_request(messages::INVALID_ID))?;

    let id: i64 = parse_integer(&raw_id).ok_or_else(|| {
        debug!("Non-numeric record id: {:?}", raw_id);
        ApiError::bad_request(messages::INVALID_ID)
    })?;

    u32::try_from(id)
        .ok()
        .and_then(|id| state.repository.find_by_id(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(messages::ID_NOT_FOUND))
}

/// Adjust a value by the IPCA accumulated between two months.
pub async fn calculate(
    State(state): State<AppState>,
    query: Result<Query<CalculationQuery>, QueryRejection>,
) -> ApiResult<Json<CalculationResponse>> {
    let params = query
        .ok()
        .and_then(|Query(query)| query.parse())
        .ok_or_else(|| ApiError::bad_request(messages::INVALID_PARAMETERS))?;

    if params.is_inverted() {
        return Err(ApiError::bad_request(messages::INVERTED_WINDOW));
    }

    let limits = state.limits;
    let (Some(start_month), Some(end_month)) = (month(params.start_month), month(params.end_month))
    else {
        return Err(ApiError::bad_request(messages::OUT_OF_RANGE));
    };
    if params.start_year < limits.min_year || params.end_year > limits.max_year {
        return Err(ApiError::bad_request(messages::OUT_OF_RANGE));
    }

    let start = YearMonth::new(params.start_year, start_month)?;
    let end = YearMonth::new(params.end_year, end_month)?;
    let resultado = AdjustmentCalculator::new(&state.repository).adjust(params.value, start, end)?;

    debug!("Adjusted {} from {} to {}: {}", params.value, start, end, resultado);
    Ok(Json(CalculationResponse { resultado }))
}

fn month(raw: i32) -> Option<u32> {
    u32::try_from(raw).ok().filter(|m| (1..=12).contains(m))
}
