//! Room REST API handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::super::AppState;
use super::dto::{CreateRoomRequest, RoomResponse};
use crate::domain::Room;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "Rooms",
    responses(
        (status = 200, description = "Room list", body = ApiResponse<Vec<RoomResponse>>)
    )
)]
pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RoomResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let rooms = state
        .repos
        .rooms()
        .find_all()
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(
        rooms.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = ApiResponse<RoomResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RoomResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let room = state
        .repos
        .rooms()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?;

    match room {
        Some(room) => Ok(Json(ApiResponse::success(room.into()))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Room {} not found", id))),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    tag = "Rooms",
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<RoomResponse>),
        (status = 409, description = "Room name already taken")
    )
)]
pub async fn create_room(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateRoomRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoomResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    let room = state
        .repos
        .rooms()
        .save(Room::new(0, req.name, req.currency_code))
        .await
        .map_err(domain_error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(room.into()))))
}
