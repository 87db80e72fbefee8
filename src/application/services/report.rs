//! Booking report service
//!
//! Collects one printable row per booking line inside the requested window,
//! derives the payment-status label from the best-matching invoice, and
//! hands the rows to the PDF or XLSX encoder.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::invoice::PaymentStatus;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::reporting::{render_pdf, render_xlsx, ReportRow};

/// Report window and optional room restriction
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Keep bookings whose header check-in is on or after this day
    pub checkin_from: Option<NaiveDate>,
    /// Keep bookings whose header check-out is on or before this day
    pub checkout_to: Option<NaiveDate>,
    /// Keep only lines for this room
    pub room_id: Option<i32>,
}

/// Output encoding of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Xlsx,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Xlsx => "xlsx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    pub fn file_name(&self) -> String {
        format!("room-booking.{}", self.as_str())
    }
}

pub struct BookingReportService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingReportService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// One row per qualifying booking line.
    ///
    /// Fails before touching any booking when the window is inverted.
    pub async fn collect_rows(&self, filter: &ReportFilter) -> DomainResult<Vec<ReportRow>> {
        if let (Some(from), Some(to)) = (filter.checkin_from, filter.checkout_to) {
            if from > to {
                return Err(DomainError::Validation(
                    "Check-in date should be less than Check-out date".to_string(),
                ));
            }
        }

        let bookings = self
            .repos
            .bookings()
            .find_for_report(filter.checkin_from, filter.checkout_to)
            .await?;

        let mut rows = Vec::new();
        for booking in bookings {
            let invoice = self.repos.invoices().find_by_reference(&booking.name).await?;
            let status =
                PaymentStatus::from_invoice_state(invoice.as_ref().map(|i| i.payment_state.as_str()));

            let guest_name = self
                .repos
                .guests()
                .find_by_id(booking.guest_id)
                .await?
                .map(|g| g.name)
                .unwrap_or_default();

            for line in &booking.lines {
                if filter.room_id.is_some_and(|room| room != line.room_id) {
                    continue;
                }

                let room_name = self
                    .repos
                    .rooms()
                    .find_by_id(line.room_id)
                    .await?
                    .map(|r| r.name)
                    .unwrap_or_default();

                rows.push(ReportRow {
                    guest_name: guest_name.clone(),
                    room_name,
                    checkin_date: line.checkin_date.date_naive().to_string(),
                    checkout_date: line.checkout_date.date_naive().to_string(),
                    duration: format!("{} hari", line.duration_days),
                    payment_status: status.label().to_string(),
                    reference: booking.name.clone(),
                });
            }
        }
        Ok(rows)
    }

    /// Collect and encode in one step.
    pub async fn render(&self, filter: &ReportFilter, format: ReportFormat) -> DomainResult<Vec<u8>> {
        let rows = self.collect_rows(filter).await?;
        info!("Rendering {} report with {} row(s)", format.as_str(), rows.len());

        let bytes = match format {
            ReportFormat::Pdf => render_pdf(&rows)?,
            ReportFormat::Xlsx => render_xlsx(&rows)?,
        };
        metrics::counter!("reports_generated_total", "format" => format.as_str()).increment(1);
        Ok(bytes)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::booking::{BookingService, NewBooking, NewBookingLine};
    use crate::application::test_support::InMemoryRepos;
    use crate::domain::booking::BookingState;
    use chrono::{DateTime, TimeZone, Utc};

    fn dt(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 0, 0, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    async fn seed_booking(
        repos: &Arc<InMemoryRepos>,
        room_id: i32,
        guest_id: i32,
        checkin: DateTime<Utc>,
        checkout: DateTime<Utc>,
    ) -> String {
        let bookings = BookingService::new(repos.clone());
        let booking = bookings
            .create_booking(NewBooking {
                guest_id,
                lines: vec![NewBookingLine {
                    room_id,
                    checkin_date: checkin,
                    checkout_date: checkout,
                }],
            })
            .await
            .unwrap();
        bookings
            .change_state(booking.id, BookingState::Reserved)
            .await
            .unwrap();
        booking.name
    }

    #[tokio::test]
    async fn inverted_window_fails_before_collecting() {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingReportService::new(repos);

        let err = service
            .collect_rows(&ReportFilter {
                checkin_from: Some(d(2024, 2, 1)),
                checkout_to: Some(d(2024, 1, 1)),
                room_id: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn rows_carry_payment_status_and_duration() {
        let repos = Arc::new(InMemoryRepos::new());
        let room = repos.seed_room("101");
        let guest = repos.seed_guest("Maya Sari");
        let reference =
            seed_booking(&repos, room.id, guest.id, dt(2024, 1, 1), dt(2024, 1, 3)).await;
        repos.seed_invoice(&reference, "paid");

        let service = BookingReportService::new(repos);
        let rows = service.collect_rows(&ReportFilter::default()).await.unwrap();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.guest_name, "Maya Sari");
        assert_eq!(row.room_name, "101");
        assert_eq!(row.checkin_date, "2024-01-01");
        assert_eq!(row.checkout_date, "2024-01-03");
        assert_eq!(row.duration, "3 hari");
        assert_eq!(row.payment_status, "Lunas");
        assert_eq!(row.reference, reference);
    }

    #[tokio::test]
    async fn missing_invoice_reads_belum_ada_invoice() {
        let repos = Arc::new(InMemoryRepos::new());
        let room = repos.seed_room("101");
        let guest = repos.seed_guest("Budi");
        seed_booking(&repos, room.id, guest.id, dt(2024, 1, 1), dt(2024, 1, 2)).await;

        let service = BookingReportService::new(repos);
        let rows = service.collect_rows(&ReportFilter::default()).await.unwrap();
        assert_eq!(rows[0].payment_status, "Belum Ada Invoice");
    }

    #[tokio::test]
    async fn room_filter_drops_other_lines() {
        let repos = Arc::new(InMemoryRepos::new());
        let room_a = repos.seed_room("101");
        let room_b = repos.seed_room("102");
        let guest = repos.seed_guest("Maya");
        seed_booking(&repos, room_a.id, guest.id, dt(2024, 1, 1), dt(2024, 1, 2)).await;
        seed_booking(&repos, room_b.id, guest.id, dt(2024, 2, 1), dt(2024, 2, 2)).await;

        let service = BookingReportService::new(repos);
        let rows = service
            .collect_rows(&ReportFilter {
                room_id: Some(room_b.id),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].room_name, "102");
    }

    #[tokio::test]
    async fn window_bounds_filter_on_header_dates() {
        let repos = Arc::new(InMemoryRepos::new());
        let room = repos.seed_room("101");
        let guest = repos.seed_guest("Maya");
        seed_booking(&repos, room.id, guest.id, dt(2024, 1, 1), dt(2024, 1, 3)).await;
        seed_booking(&repos, room.id, guest.id, dt(2024, 3, 1), dt(2024, 3, 3)).await;

        let service = BookingReportService::new(repos);
        let rows = service
            .collect_rows(&ReportFilter {
                checkin_from: Some(d(2024, 2, 1)),
                checkout_to: Some(d(2024, 4, 1)),
                room_id: None,
            })
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].checkin_date, "2024-03-01");
    }

    #[tokio::test]
    async fn render_produces_both_encodings() {
        let repos = Arc::new(InMemoryRepos::new());
        let room = repos.seed_room("101");
        let guest = repos.seed_guest("Maya");
        seed_booking(&repos, room.id, guest.id, dt(2024, 1, 1), dt(2024, 1, 3)).await;

        let service = BookingReportService::new(repos);
        let pdf = service
            .render(&ReportFilter::default(), ReportFormat::Pdf)
            .await
            .unwrap();
        assert_eq!(&pdf[..5], b"%PDF-");

        let xlsx = service
            .render(&ReportFilter::default(), ReportFormat::Xlsx)
            .await
            .unwrap();
        assert_eq!(&xlsx[..4], b"PK\x03\x04");
    }
}
