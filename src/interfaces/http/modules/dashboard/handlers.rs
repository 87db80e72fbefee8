//! Dashboard REST API handlers
//!
//! Read-only endpoints behind the occupancy calendar: the per-room-per-day
//! grid, the per-room customer detail, and the date-list helpers the
//! calendar header is built from.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::super::AppState;
use super::dto::{MonthParams, RangeParams, RoomDayResponse, RoomOccupancyResponse};
use crate::interfaces::http::common::{domain_error_response, ApiResponse};

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/occupancy",
    tag = "Dashboard",
    params(RangeParams),
    responses(
        (status = 200, description = "One row per (room, day) pair", body = ApiResponse<Vec<RoomDayResponse>>),
        (status = 400, description = "Inverted date range")
    )
)]
pub async fn occupancy_grid(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<ApiResponse<Vec<RoomDayResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let grid = state
        .occupancy
        .range_grid(params.date_from, params.date_to)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(
        grid.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/rooms-details",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Every room with its active customer stays", body = ApiResponse<Vec<RoomOccupancyResponse>>)
    )
)]
pub async fn rooms_details(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RoomOccupancyResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let details = state
        .occupancy
        .rooms_details()
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(
        details.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/month-days",
    tag = "Dashboard",
    params(MonthParams),
    responses(
        (status = 200, description = "Every day of the month as YYYY-MM-DD", body = ApiResponse<Vec<String>>),
        (status = 400, description = "Invalid month")
    )
)]
pub async fn month_days(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> Result<Json<ApiResponse<Vec<String>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let days = state
        .occupancy
        .month_days(params.year, params.month)
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(
        days.iter().map(|d| d.to_string()).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/range-days",
    tag = "Dashboard",
    params(RangeParams),
    responses(
        (status = 200, description = "Every day of the inclusive range as YYYY-MM-DD", body = ApiResponse<Vec<String>>)
    )
)]
pub async fn range_days(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<ApiResponse<Vec<String>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let days = state.occupancy.range_days(params.date_from, params.date_to);
    Ok(Json(ApiResponse::success(
        days.iter().map(|d| d.to_string()).collect(),
    )))
}
