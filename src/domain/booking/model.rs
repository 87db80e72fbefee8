//! Booking domain entities
//!
//! A `Booking` is the header (guest, lifecycle state, reference name) owning
//! one or more `BookingLine`s, each tying a room to a stay interval.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Booking lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    /// Being drafted, rooms not yet held
    Draft,
    /// Rooms held, guest expected
    Reserved,
    /// Guest is in the room
    CheckIn,
    /// Guest has left, awaiting settlement
    CheckOut,
    /// Cancelled before or during the stay
    Cancelled,
    /// Settled and archived
    Done,
}

impl BookingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Reserved => "reserved",
            Self::CheckIn => "check_in",
            Self::CheckOut => "check_out",
            Self::Cancelled => "cancelled",
            Self::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "draft" => Self::Draft,
            "reserved" => Self::Reserved,
            "check_in" => Self::CheckIn,
            "check_out" => Self::CheckOut,
            "done" => Self::Done,
            _ => Self::Cancelled,
        }
    }

    /// Whether a booking in this state holds its rooms.
    ///
    /// Only reserved and checked-in bookings block other stays; drafts have
    /// not committed to the rooms yet, and checked-out, cancelled or done
    /// bookings have released them.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Reserved | Self::CheckIn)
    }

    /// Legal lifecycle transitions.
    pub fn can_transition_to(&self, next: BookingState) -> bool {
        use BookingState::*;
        matches!(
            (self, next),
            (Draft, Reserved)
                | (Draft, Cancelled)
                | (Reserved, CheckIn)
                | (Reserved, Cancelled)
                | (CheckIn, CheckOut)
                | (CheckIn, Cancelled)
                | (CheckOut, Done)
        )
    }
}

impl std::fmt::Display for BookingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One (room, stay interval) entry belonging to a booking
#[derive(Debug, Clone, PartialEq)]
pub struct BookingLine {
    /// Unique line ID
    pub id: i32,
    /// Owning booking
    pub booking_id: i32,
    /// Booked room
    pub room_id: i32,
    /// Stay start instant
    pub checkin_date: DateTime<Utc>,
    /// Stay end instant; must be >= checkin_date
    pub checkout_date: DateTime<Utc>,
    /// Stay length in whole days, set by the validator on save
    pub duration_days: i64,
}

/// Booking header with its lines
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    /// Unique booking ID
    pub id: i32,
    /// Generated reference, e.g. "BK00042"; invoices match on this
    pub name: String,
    /// Customer on the booking
    pub guest_id: i32,
    /// Current lifecycle state
    pub state: BookingState,
    /// Header-level check-in, used by the export date filter
    pub checkin_date: DateTime<Utc>,
    /// Header-level check-out, used by the export date filter
    pub checkout_date: DateTime<Utc>,
    /// When the booking was created
    pub created_at: DateTime<Utc>,
    pub lines: Vec<BookingLine>,
}

impl Booking {
    /// Booking reference for a given ID.
    pub fn reference(id: i32) -> String {
        format!("BK{:05}", id)
    }

    /// The status shown on every line is the owning booking's state.
    pub fn line_status(&self) -> BookingState {
        self.state
    }
}

/// Inclusive interval overlap: `[a1,a2]` and `[b1,b2]` share at least one
/// instant iff `a1 <= b2 && b1 <= a2`.
pub fn intervals_overlap(
    a1: DateTime<Utc>,
    a2: DateTime<Utc>,
    b1: DateTime<Utc>,
    b2: DateTime<Utc>,
) -> bool {
    a1 <= b2 && b1 <= a2
}

/// Stay length in whole days.
///
/// Whole elapsed days, plus one more whenever any positive time has elapsed
/// at all; a zero-length stay still counts as one day. So a stay from
/// Jan 1 00:00 to Jan 3 00:00 is 3 days, and checkin == checkout is 1.
pub fn stay_duration_days(checkin: DateTime<Utc>, checkout: DateTime<Utc>) -> i64 {
    let elapsed = checkout.signed_duration_since(checkin);
    let mut days = elapsed.num_days();
    if elapsed.num_seconds() > 0 {
        days += 1;
    }
    days.max(1)
}

/// First date on which a room becomes free given the latest conflicting
/// check-out instant.
pub fn next_available_date(latest_checkout: DateTime<Utc>) -> NaiveDate {
    let d = latest_checkout.date_naive();
    d.succ_opt().unwrap_or_else(|| {
        // NaiveDate::MAX overflow cannot happen for real booking data
        NaiveDate::from_ymd_opt(d.year(), 12, 31).unwrap_or(d)
    })
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn two_midnights_apart_is_three_days() {
        let days = stay_duration_days(dt(2024, 1, 1, 0, 0), dt(2024, 1, 3, 0, 0));
        assert_eq!(days, 3);
    }

    #[test]
    fn zero_length_stay_is_one_day() {
        let t = dt(2024, 1, 1, 12, 0);
        assert_eq!(stay_duration_days(t, t), 1);
    }

    #[test]
    fn fractional_remainder_adds_a_day() {
        // 26 hours: one whole day plus a remainder
        let days = stay_duration_days(dt(2024, 1, 1, 23, 0), dt(2024, 1, 3, 1, 0));
        assert_eq!(days, 2);
    }

    #[test]
    fn sub_day_stay_is_one_day() {
        let days = stay_duration_days(dt(2024, 1, 1, 10, 0), dt(2024, 1, 1, 18, 0));
        assert_eq!(days, 1);
    }

    #[test]
    fn overlap_is_inclusive_at_the_boundary() {
        let a1 = dt(2024, 1, 1, 0, 0);
        let a2 = dt(2024, 1, 3, 0, 0);
        // New stay starting exactly at the old check-out still overlaps
        assert!(intervals_overlap(a1, a2, a2, dt(2024, 1, 5, 0, 0)));
    }

    #[test]
    fn disjoint_intervals_do_not_overlap() {
        assert!(!intervals_overlap(
            dt(2024, 1, 1, 0, 0),
            dt(2024, 1, 3, 0, 0),
            dt(2024, 1, 3, 0, 1),
            dt(2024, 1, 5, 0, 0),
        ));
    }

    #[test]
    fn containment_overlaps() {
        assert!(intervals_overlap(
            dt(2024, 1, 1, 0, 0),
            dt(2024, 1, 10, 0, 0),
            dt(2024, 1, 4, 0, 0),
            dt(2024, 1, 5, 0, 0),
        ));
    }

    #[test]
    fn next_available_is_day_after_checkout() {
        let next = next_available_date(dt(2024, 3, 14, 11, 30));
        assert_eq!(next, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn active_states_are_reserved_and_check_in() {
        assert!(BookingState::Reserved.is_active());
        assert!(BookingState::CheckIn.is_active());
        assert!(!BookingState::Draft.is_active());
        assert!(!BookingState::CheckOut.is_active());
        assert!(!BookingState::Cancelled.is_active());
        assert!(!BookingState::Done.is_active());
    }

    #[test]
    fn state_roundtrip() {
        for state in [
            BookingState::Draft,
            BookingState::Reserved,
            BookingState::CheckIn,
            BookingState::CheckOut,
            BookingState::Cancelled,
            BookingState::Done,
        ] {
            assert_eq!(BookingState::from_str(state.as_str()), state);
        }
    }

    #[test]
    fn unknown_state_defaults_to_cancelled() {
        assert_eq!(BookingState::from_str("nonsense"), BookingState::Cancelled);
    }

    #[test]
    fn lifecycle_transitions() {
        use BookingState::*;
        assert!(Draft.can_transition_to(Reserved));
        assert!(Reserved.can_transition_to(CheckIn));
        assert!(CheckIn.can_transition_to(CheckOut));
        assert!(CheckOut.can_transition_to(Done));
        assert!(Reserved.can_transition_to(Cancelled));

        assert!(!Draft.can_transition_to(CheckIn));
        assert!(!CheckOut.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Reserved));
        assert!(!Done.can_transition_to(Draft));
    }

    #[test]
    fn reference_is_zero_padded() {
        assert_eq!(Booking::reference(42), "BK00042");
    }
}
