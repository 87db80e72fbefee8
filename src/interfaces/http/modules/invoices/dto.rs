//! Invoice API data transfer objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Invoice, PaymentStatus};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterInvoiceRequest {
    /// Booking reference the invoice settles, e.g. "BK00042"
    #[validate(length(min = 1, max = 50))]
    pub reference: String,
    /// Accounting payment state: paid, in_payment, not_paid, ...
    #[validate(length(min = 1, max = 20))]
    pub payment_state: String,
    #[validate(range(min = 0))]
    pub amount_total: i64,
    #[validate(range(min = 0))]
    pub amount_residual: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceResponse {
    pub id: i32,
    pub reference: String,
    pub payment_state: String,
    /// Localized label derived from the payment state
    pub payment_status: String,
    pub amount_total: i64,
    pub amount_residual: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Invoice> for InvoiceResponse {
    fn from(i: Invoice) -> Self {
        let label = PaymentStatus::from_invoice_state(Some(&i.payment_state))
            .label()
            .to_string();
        Self {
            id: i.id,
            reference: i.reference,
            payment_state: i.payment_state,
            payment_status: label,
            amount_total: i.amount_total,
            amount_residual: i.amount_residual,
            created_at: i.created_at,
        }
    }
}
