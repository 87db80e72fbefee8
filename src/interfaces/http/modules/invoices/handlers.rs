//! Invoice REST API handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use super::super::AppState;
use super::dto::{InvoiceResponse, RegisterInvoiceRequest};
use crate::domain::Invoice;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

#[utoipa::path(
    get,
    path = "/api/v1/invoices",
    tag = "Invoices",
    responses(
        (status = 200, description = "Invoice list", body = ApiResponse<Vec<InvoiceResponse>>)
    )
)]
pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<InvoiceResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let invoices = state
        .repos
        .invoices()
        .find_all()
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(
        invoices.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/invoices",
    tag = "Invoices",
    request_body = RegisterInvoiceRequest,
    responses(
        (status = 201, description = "Registered", body = ApiResponse<InvoiceResponse>)
    )
)]
pub async fn register_invoice(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterInvoiceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<InvoiceResponse>>), (StatusCode, Json<ApiResponse<()>>)> {
    let invoice = state
        .repos
        .invoices()
        .save(Invoice {
            id: 0,
            reference: req.reference,
            payment_state: req.payment_state,
            amount_total: req.amount_total,
            amount_residual: req.amount_residual,
            created_at: Utc::now(),
        })
        .await
        .map_err(domain_error_response)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(invoice.into())),
    ))
}
