//! Invoice domain entity and payment status labels
//!
//! Invoices are owned by the accounting side of the house; bookings are tied
//! to them only by the invoice's free-text reference matching the booking
//! name. The export report derives a localized payment-status label from the
//! best-matching invoice.

use chrono::{DateTime, Utc};

/// An accounting invoice, matched to bookings by `reference`.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    /// Unique invoice ID
    pub id: i32,
    /// Free-text reference; equals the booking name when raised for a stay
    pub reference: String,
    /// Accounting payment state: "paid", "in_payment", "not_paid", ...
    pub payment_state: String,
    /// Invoice total in the smallest currency unit
    pub amount_total: i64,
    /// Outstanding amount in the smallest currency unit
    pub amount_residual: i64,
    /// When the invoice was raised
    pub created_at: DateTime<Utc>,
}

/// Localized payment-status label printed on booking reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    PartiallyPaid,
    Unpaid,
    Cancelled,
    NoInvoice,
}

impl PaymentStatus {
    /// Derive the label from the matched invoice's payment state, if any.
    pub fn from_invoice_state(state: Option<&str>) -> Self {
        match state {
            None => Self::NoInvoice,
            Some("paid") => Self::Paid,
            Some("in_payment") => Self::PartiallyPaid,
            Some("not_paid") => Self::Unpaid,
            Some(_) => Self::Cancelled,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Lunas",
            Self::PartiallyPaid => "Sebagian Dibayar",
            Self::Unpaid => "Belum Dibayar",
            Self::Cancelled => "Dibatalkan",
            Self::NoInvoice => "Belum Ada Invoice",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paid_maps_to_lunas() {
        assert_eq!(PaymentStatus::from_invoice_state(Some("paid")).label(), "Lunas");
    }

    #[test]
    fn in_payment_maps_to_sebagian_dibayar() {
        assert_eq!(
            PaymentStatus::from_invoice_state(Some("in_payment")).label(),
            "Sebagian Dibayar"
        );
    }

    #[test]
    fn not_paid_maps_to_belum_dibayar() {
        assert_eq!(
            PaymentStatus::from_invoice_state(Some("not_paid")).label(),
            "Belum Dibayar"
        );
    }

    #[test]
    fn any_other_state_maps_to_dibatalkan() {
        assert_eq!(
            PaymentStatus::from_invoice_state(Some("reversed")).label(),
            "Dibatalkan"
        );
        assert_eq!(
            PaymentStatus::from_invoice_state(Some("partial")).label(),
            "Dibatalkan"
        );
    }

    #[test]
    fn missing_invoice_maps_to_belum_ada_invoice() {
        assert_eq!(
            PaymentStatus::from_invoice_state(None).label(),
            "Belum Ada Invoice"
        );
    }
}
