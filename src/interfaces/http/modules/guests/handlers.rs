//! Guest REST API handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::super::AppState;
use super::dto::{CreateGuestRequest, GuestResponse};
use crate::domain::Guest;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

#[utoipa::path(
    get,
    path = "/api/v1/guests",
    tag = "Guests",
    responses(
        (status = 200, description = "Guest list", body = ApiResponse<Vec<GuestResponse>>)
    )
)]
pub async fn list_guests(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<GuestResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let guests = state
        .repos
        .guests()
        .find_all()
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(
        guests.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/guests",
    tag = "Guests",
    request_body = CreateGuestRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<GuestResponse>)
    )
)]
pub async fn create_guest(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateGuestRequest>,
) -> Result<(StatusCode, Json<ApiResponse<GuestResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    let guest = state
        .repos
        .guests()
        .save(Guest::new(0, req.name, req.email, req.phone))
        .await
        .map_err(domain_error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(guest.into()))))
}
