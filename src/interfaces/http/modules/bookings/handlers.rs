//! Booking REST API handlers
//!
//! Creation and line addition run through the overlap validator; the four
//! state actions walk the lifecycle.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::super::AppState;
use super::dto::{BookingLineResponse, BookingResponse, BookingLineRequest, CreateBookingRequest};
use crate::application::{NewBooking, NewBookingLine};
use crate::domain::BookingState;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    responses(
        (status = 200, description = "Booking list", body = ApiResponse<Vec<BookingResponse>>)
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BookingResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let bookings = state
        .bookings
        .list_bookings()
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(
        bookings.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<BookingResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let booking = state
        .bookings
        .get_booking(id)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<BookingResponse>),
        (status = 400, description = "Inverted interval or room already booked")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    let booking = state
        .bookings
        .create_booking(NewBooking {
            guest_id: req.guest_id,
            lines: req
                .lines
                .into_iter()
                .map(|l| NewBookingLine {
                    room_id: l.room_id,
                    checkin_date: l.checkin_date,
                    checkout_date: l.checkout_date,
                })
                .collect(),
        })
        .await
        .map_err(domain_error_response)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(booking.into())),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{id}/lines",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = BookingLineRequest,
    responses(
        (status = 201, description = "Line added", body = ApiResponse<BookingLineResponse>),
        (status = 400, description = "Inverted interval or room already booked")
    )
)]
pub async fn add_line(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<BookingLineRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingLineResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let line = state
        .bookings
        .add_line(
            id,
            NewBookingLine {
                room_id: req.room_id,
                checkin_date: req.checkin_date,
                checkout_date: req.checkout_date,
            },
        )
        .await
        .map_err(domain_error_response)?;

    let booking = state
        .bookings
        .get_booking(id)
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(BookingLineResponse {
            id: line.id,
            room_id: line.room_id,
            checkin_date: line.checkin_date,
            checkout_date: line.checkout_date,
            duration_days: line.duration_days,
            status: booking.line_status().as_str().to_string(),
        })),
    ))
}

async fn transition(
    state: AppState,
    id: i32,
    next: BookingState,
) -> Result<Json<ApiResponse<BookingResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let booking = state
        .bookings
        .change_state(id, next)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{id}/reserve",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Reserved", body = ApiResponse<BookingResponse>),
        (status = 400, description = "Illegal transition or room already booked")
    )
)]
pub async fn reserve_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<BookingResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    transition(state, id, BookingState::Reserved).await
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{id}/check-in",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Checked in", body = ApiResponse<BookingResponse>)
    )
)]
pub async fn check_in_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<BookingResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    transition(state, id, BookingState::CheckIn).await
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{id}/check-out",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Checked out", body = ApiResponse<BookingResponse>)
    )
)]
pub async fn check_out_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<BookingResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    transition(state, id, BookingState::CheckOut).await
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{id}/cancel",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Cancelled", body = ApiResponse<BookingResponse>)
    )
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<BookingResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    transition(state, id, BookingState::Cancelled).await
}
