//! Booking service: line validation and lifecycle
//!
//! The overlap validator runs on every line save. It is a validate-and-
//! mutate step: on success the line's duration is computed and stored with
//! the line; on conflict the save is blocked with a message naming the next
//! date the room is free.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::booking::{
    intervals_overlap, next_available_date, stay_duration_days, Booking, BookingLine, BookingState,
};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Requested line on a new or existing booking
#[derive(Debug, Clone)]
pub struct NewBookingLine {
    pub room_id: i32,
    pub checkin_date: DateTime<Utc>,
    pub checkout_date: DateTime<Utc>,
}

/// Requested booking: customer plus at least one line
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub guest_id: i32,
    pub lines: Vec<NewBookingLine>,
}

pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Validate a candidate stay for a room and compute its duration.
    ///
    /// Fails when the interval is inverted or when it overlaps any line of
    /// an active booking for the same room; the conflict message names
    /// `max(conflicting check-outs) + 1 day` as the next available date.
    /// `exclude_line` skips the line being edited so it cannot conflict
    /// with itself.
    pub async fn validate_line(
        &self,
        room_id: i32,
        checkin: DateTime<Utc>,
        checkout: DateTime<Utc>,
        exclude_line: Option<i32>,
    ) -> DomainResult<i64> {
        if checkout < checkin {
            return Err(DomainError::Validation(
                "Checkout must be greater or equal checkin date".to_string(),
            ));
        }

        let room = self
            .repos
            .rooms()
            .find_by_id(room_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: room_id.to_string(),
            })?;

        let lines = self
            .repos
            .bookings()
            .find_active_lines_for_room(room_id, exclude_line)
            .await?;

        let latest_conflict = lines
            .iter()
            .filter(|l| intervals_overlap(l.checkin_date, l.checkout_date, checkin, checkout))
            .map(|l| l.checkout_date)
            .max();

        if let Some(latest) = latest_conflict {
            return Err(DomainError::room_unavailable(
                &room.name,
                next_available_date(latest),
            ));
        }

        Ok(stay_duration_days(checkin, checkout))
    }

    /// Create a draft booking, validating every line on the way in.
    pub async fn create_booking(&self, new: NewBooking) -> DomainResult<Booking> {
        let guest = self
            .repos
            .guests()
            .find_by_id(new.guest_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Guest",
                field: "id",
                value: new.guest_id.to_string(),
            })?;

        if new.lines.is_empty() {
            return Err(DomainError::Validation(
                "A booking needs at least one room line".to_string(),
            ));
        }

        let mut lines = Vec::with_capacity(new.lines.len());
        for line in &new.lines {
            let duration = self
                .validate_line(line.room_id, line.checkin_date, line.checkout_date, None)
                .await?;
            lines.push(BookingLine {
                id: 0,
                booking_id: 0,
                room_id: line.room_id,
                checkin_date: line.checkin_date,
                checkout_date: line.checkout_date,
                duration_days: duration,
            });
        }
        self.reject_internal_overlaps(&lines).await?;

        let checkin_date = lines.iter().map(|l| l.checkin_date).min().expect("non-empty");
        let checkout_date = lines.iter().map(|l| l.checkout_date).max().expect("non-empty");

        let booking = self
            .repos
            .bookings()
            .save(Booking {
                id: 0,
                name: String::new(),
                guest_id: guest.id,
                state: BookingState::Draft,
                checkin_date,
                checkout_date,
                created_at: Utc::now(),
                lines,
            })
            .await?;

        info!("Created booking {} for guest {}", booking.name, guest.name);
        metrics::counter!("bookings_created_total").increment(1);
        Ok(booking)
    }

    /// Append a validated line to an existing booking.
    pub async fn add_line(&self, booking_id: i32, line: NewBookingLine) -> DomainResult<BookingLine> {
        let booking = self.get_booking(booking_id).await?;

        let duration = self
            .validate_line(line.room_id, line.checkin_date, line.checkout_date, None)
            .await?;

        self.repos
            .bookings()
            .add_line(BookingLine {
                id: 0,
                booking_id: booking.id,
                room_id: line.room_id,
                checkin_date: line.checkin_date,
                checkout_date: line.checkout_date,
                duration_days: duration,
            })
            .await
    }

    /// Move a booking along its lifecycle.
    ///
    /// Activating a booking (draft -> reserved) re-runs the overlap check
    /// for every line: two drafts can hold the same dates, but only one of
    /// them may start blocking the room.
    pub async fn change_state(&self, id: i32, next: BookingState) -> DomainResult<Booking> {
        let booking = self.get_booking(id).await?;

        if !booking.state.can_transition_to(next) {
            return Err(DomainError::Validation(format!(
                "Booking {} cannot move from {} to {}",
                booking.name, booking.state, next
            )));
        }

        if next.is_active() && !booking.state.is_active() {
            for line in &booking.lines {
                self.validate_line(line.room_id, line.checkin_date, line.checkout_date, None)
                    .await?;
            }
        }

        self.repos.bookings().set_state(id, next).await?;
        info!("Booking {} -> {}", booking.name, next);
        self.get_booking(id).await
    }

    pub async fn get_booking(&self, id: i32) -> DomainResult<Booking> {
        self.repos
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn list_bookings(&self) -> DomainResult<Vec<Booking>> {
        self.repos.bookings().find_all().await
    }

    /// Lines arriving together must not collide with each other either.
    async fn reject_internal_overlaps(&self, lines: &[BookingLine]) -> DomainResult<()> {
        for (i, a) in lines.iter().enumerate() {
            for b in &lines[i + 1..] {
                if a.room_id == b.room_id
                    && intervals_overlap(a.checkin_date, a.checkout_date, b.checkin_date, b.checkout_date)
                {
                    let room_name = self
                        .repos
                        .rooms()
                        .find_by_id(a.room_id)
                        .await?
                        .map(|r| r.name)
                        .unwrap_or_else(|| a.room_id.to_string());
                    let latest = a.checkout_date.max(b.checkout_date);
                    return Err(DomainError::room_unavailable(
                        &room_name,
                        next_available_date(latest),
                    ));
                }
            }
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemoryRepos;
    use chrono::TimeZone;

    fn dt(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn service() -> (Arc<InMemoryRepos>, BookingService) {
        let repos = Arc::new(InMemoryRepos::new());
        let service = BookingService::new(repos.clone());
        (repos, service)
    }

    async fn reserved_booking(
        service: &BookingService,
        guest_id: i32,
        room_id: i32,
        checkin: DateTime<Utc>,
        checkout: DateTime<Utc>,
    ) -> Booking {
        let booking = service
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
        service
            .change_state(booking.id, BookingState::Reserved)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn inverted_interval_fails() {
        let (repos, service) = service();
        let room = repos.seed_room("101");

        let err = service
            .validate_line(room.id, dt(2024, 1, 5, 0), dt(2024, 1, 1, 0), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn duration_counts_inclusive_days() {
        let (repos, service) = service();
        let room = repos.seed_room("101");

        let days = service
            .validate_line(room.id, dt(2024, 1, 1, 0), dt(2024, 1, 3, 0), None)
            .await
            .unwrap();
        assert_eq!(days, 3);

        let one = service
            .validate_line(room.id, dt(2024, 1, 1, 0), dt(2024, 1, 1, 0), None)
            .await
            .unwrap();
        assert_eq!(one, 1);
    }

    #[tokio::test]
    async fn overlap_with_active_booking_fails_and_names_next_date() {
        let (repos, service) = service();
        let room = repos.seed_room("101");
        let guest = repos.seed_guest("Maya");
        reserved_booking(&service, guest.id, room.id, dt(2024, 1, 1, 12), dt(2024, 1, 3, 10)).await;

        let err = service
            .validate_line(room.id, dt(2024, 1, 2, 0), dt(2024, 1, 5, 0), None)
            .await
            .unwrap_err();

        // next available = max check-out (Jan 3) + 1 day
        let msg = err.to_string();
        assert!(msg.contains("2024-01-04"), "message was: {}", msg);
        assert!(msg.contains("101"));
    }

    #[tokio::test]
    async fn disjoint_stay_is_accepted() {
        let (repos, service) = service();
        let room = repos.seed_room("101");
        let guest = repos.seed_guest("Maya");
        reserved_booking(&service, guest.id, room.id, dt(2024, 1, 1, 12), dt(2024, 1, 3, 10)).await;

        let days = service
            .validate_line(room.id, dt(2024, 1, 3, 11), dt(2024, 1, 5, 10), None)
            .await
            .unwrap();
        assert_eq!(days, 2);
    }

    #[tokio::test]
    async fn draft_bookings_do_not_block_the_room() {
        let (repos, service) = service();
        let room = repos.seed_room("101");
        let guest = repos.seed_guest("Maya");
        // created but never reserved
        service
            .create_booking(NewBooking {
                guest_id: guest.id,
                lines: vec![NewBookingLine {
                    room_id: room.id,
                    checkin_date: dt(2024, 1, 1, 0),
                    checkout_date: dt(2024, 1, 3, 0),
                }],
            })
            .await
            .unwrap();

        assert!(service
            .validate_line(room.id, dt(2024, 1, 2, 0), dt(2024, 1, 4, 0), None)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn only_one_of_two_overlapping_drafts_can_reserve() {
        let (repos, service) = service();
        let room = repos.seed_room("101");
        let guest = repos.seed_guest("Maya");

        let mut drafts = Vec::new();
        for _ in 0..2 {
            drafts.push(
                service
                    .create_booking(NewBooking {
                        guest_id: guest.id,
                        lines: vec![NewBookingLine {
                            room_id: room.id,
                            checkin_date: dt(2024, 1, 1, 0),
                            checkout_date: dt(2024, 1, 3, 0),
                        }],
                    })
                    .await
                    .unwrap(),
            );
        }

        service
            .change_state(drafts[0].id, BookingState::Reserved)
            .await
            .unwrap();
        let err = service
            .change_state(drafts[1].id, BookingState::Reserved)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn two_lines_in_one_request_cannot_share_a_room() {
        let (repos, service) = service();
        let room = repos.seed_room("101");
        let guest = repos.seed_guest("Maya");

        let err = service
            .create_booking(NewBooking {
                guest_id: guest.id,
                lines: vec![
                    NewBookingLine {
                        room_id: room.id,
                        checkin_date: dt(2024, 1, 1, 0),
                        checkout_date: dt(2024, 1, 3, 0),
                    },
                    NewBookingLine {
                        room_id: room.id,
                        checkin_date: dt(2024, 1, 2, 0),
                        checkout_date: dt(2024, 1, 4, 0),
                    },
                ],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn create_booking_assigns_reference_and_durations() {
        let (repos, service) = service();
        let room = repos.seed_room("101");
        let guest = repos.seed_guest("Maya");

        let booking = service
            .create_booking(NewBooking {
                guest_id: guest.id,
                lines: vec![NewBookingLine {
                    room_id: room.id,
                    checkin_date: dt(2024, 1, 1, 0),
                    checkout_date: dt(2024, 1, 3, 0),
                }],
            })
            .await
            .unwrap();

        assert_eq!(booking.name, "BK00001");
        assert_eq!(booking.state, BookingState::Draft);
        assert_eq!(booking.lines[0].duration_days, 3);
    }

    #[tokio::test]
    async fn illegal_transition_is_rejected() {
        let (repos, service) = service();
        let room = repos.seed_room("101");
        let guest = repos.seed_guest("Maya");
        let booking = service
            .create_booking(NewBooking {
                guest_id: guest.id,
                lines: vec![NewBookingLine {
                    room_id: room.id,
                    checkin_date: dt(2024, 1, 1, 0),
                    checkout_date: dt(2024, 1, 3, 0),
                }],
            })
            .await
            .unwrap();

        let err = service
            .change_state(booking.id, BookingState::CheckOut)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn checked_out_booking_frees_the_room() {
        let (repos, service) = service();
        let room = repos.seed_room("101");
        let guest = repos.seed_guest("Maya");
        let booking =
            reserved_booking(&service, guest.id, room.id, dt(2024, 1, 1, 0), dt(2024, 1, 3, 0)).await;

        service.change_state(booking.id, BookingState::CheckIn).await.unwrap();
        service.change_state(booking.id, BookingState::CheckOut).await.unwrap();

        assert!(service
            .validate_line(room.id, dt(2024, 1, 2, 0), dt(2024, 1, 4, 0), None)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let (_repos, service) = service();
        let err = service
            .validate_line(99, dt(2024, 1, 1, 0), dt(2024, 1, 2, 0), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
