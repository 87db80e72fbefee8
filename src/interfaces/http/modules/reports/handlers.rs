//! Report REST API handlers
//!
//! The file endpoint streams the rendered document back with a download
//! disposition; the rows endpoint returns the same data as JSON for
//! previews.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::super::AppState;
use super::dto::{BookingReportRequest, BookingReportRowsRequest, ReportRowResponse};
use crate::application::ReportFormat;
use crate::interfaces::http::common::{domain_error_response, ApiResponse};

#[utoipa::path(
    post,
    path = "/api/v1/reports/room-bookings",
    tag = "Reports",
    request_body = BookingReportRequest,
    responses(
        (status = 200, description = "Rendered PDF or XLSX document", content_type = "application/octet-stream"),
        (status = 400, description = "Check-in floor after check-out ceiling")
    )
)]
pub async fn room_booking_report(
    State(state): State<AppState>,
    Json(req): Json<BookingReportRequest>,
) -> Result<Response, (StatusCode, Json<ApiResponse<()>>)> {
    let format: ReportFormat = req.format.into();
    let bytes = state
        .reports
        .render(&req.filter(), format)
        .await
        .map_err(domain_error_response)?;

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.file_name()),
            ),
        ],
        bytes,
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/api/v1/reports/room-bookings/rows",
    tag = "Reports",
    request_body = BookingReportRowsRequest,
    responses(
        (status = 200, description = "Report rows", body = ApiResponse<Vec<ReportRowResponse>>),
        (status = 400, description = "Check-in floor after check-out ceiling")
    )
)]
pub async fn room_booking_report_rows(
    State(state): State<AppState>,
    Json(req): Json<BookingReportRowsRequest>,
) -> Result<Json<ApiResponse<Vec<ReportRowResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let rows = state
        .reports
        .collect_rows(&req.filter())
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(
        rows.into_iter()
            .enumerate()
            .map(|(i, r)| ReportRowResponse::from_row(i, r))
            .collect(),
    )))
}
