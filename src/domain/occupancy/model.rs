//! Occupancy grid types and calendar arithmetic
//!
//! The database scans return one flat `StayRow` per (room, active stay) pair,
//! with left-join semantics so bookingless rooms still produce a row. The
//! functions here expand those rows into the per-room-per-day grid and the
//! per-room customer groupings the dashboard renders.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Whether a room is taken on a given calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Booked,
    Available,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "Booked",
            Self::Available => "Available",
        }
    }
}

/// One raw row from the occupancy scans.
///
/// The stay columns are `None` for rooms with no active booking (left join).
#[derive(Debug, Clone, PartialEq)]
pub struct StayRow {
    pub room_id: i32,
    pub room_name: String,
    pub customer_name: Option<String>,
    pub booking_id: Option<i32>,
    pub checkin: Option<NaiveDate>,
    pub checkout: Option<NaiveDate>,
}

impl StayRow {
    /// A room row with no stay attached.
    pub fn vacant(room_id: i32, room_name: impl Into<String>) -> Self {
        Self {
            room_id,
            room_name: room_name.into(),
            customer_name: None,
            booking_id: None,
            checkin: None,
            checkout: None,
        }
    }
}

/// One cell of the range grid: a (room, day) pair with its status.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDay {
    pub room_id: i32,
    pub room_name: String,
    pub date: NaiveDate,
    pub status: DayStatus,
}

/// One customer's stay in a room: the booking and every covered day.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerStay {
    pub customer_name: String,
    pub booking_id: i32,
    pub dates: Vec<NaiveDate>,
}

/// All active stays of one room, customer-name-ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomOccupancy {
    pub room_id: i32,
    pub room_name: String,
    pub stays: Vec<CustomerStay>,
}

// ── Calendar helpers ───────────────────────────────────────────

/// Every calendar day of the given month, respecting month length (28-31).
/// `None` when the month is out of range.
pub fn month_days(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let mut days = Vec::with_capacity(31);
    for day in 1..=31 {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(d) => days.push(d),
            None => break,
        }
    }
    Some(days)
}

/// Every calendar day in the inclusive `[from, to]` range; empty when
/// `from > to`.
pub fn days_in_range(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    from.iter_days().take_while(|d| *d <= to).collect()
}

// ── Grid construction ──────────────────────────────────────────

/// Distinct rooms in the row set, ordered by name then ID.
fn rooms_in(rows: &[StayRow]) -> Vec<(i32, String)> {
    let mut rooms: Vec<(i32, String)> = Vec::new();
    for row in rows {
        if !rooms.iter().any(|(id, _)| *id == row.room_id) {
            rooms.push((row.room_id, row.room_name.clone()));
        }
    }
    rooms.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
    rooms
}

/// Expand scan rows into one `RoomDay` per (room, day) pair over the
/// inclusive range, room-name-then-date ordered. A day is `Booked` iff any
/// stay interval of that room covers it.
pub fn build_range_grid(rows: &[StayRow], from: NaiveDate, to: NaiveDate) -> Vec<RoomDay> {
    let days = days_in_range(from, to);
    let mut grid = Vec::with_capacity(rows.len() * days.len());

    for (room_id, room_name) in rooms_in(rows) {
        let intervals: Vec<(NaiveDate, NaiveDate)> = rows
            .iter()
            .filter(|r| r.room_id == room_id)
            .filter_map(|r| Some((r.checkin?, r.checkout?)))
            .collect();

        for day in &days {
            let booked = intervals.iter().any(|(ci, co)| ci <= day && day <= co);
            grid.push(RoomDay {
                room_id,
                room_name: room_name.clone(),
                date: *day,
                status: if booked {
                    DayStatus::Booked
                } else {
                    DayStatus::Available
                },
            });
        }
    }
    grid
}

/// Group scan rows into per-room (customer, booking, covered days) stays,
/// rooms ordered by name, stays ordered by customer name. Rooms without any
/// active stay are present with an empty list.
pub fn group_room_details(rows: &[StayRow]) -> Vec<RoomOccupancy> {
    let mut result = Vec::new();

    for (room_id, room_name) in rooms_in(rows) {
        // (customer, booking) -> covered days; BTreeMap keeps customer order
        let mut groups: BTreeMap<(String, i32), BTreeSet<NaiveDate>> = BTreeMap::new();

        for row in rows.iter().filter(|r| r.room_id == room_id) {
            let (Some(customer), Some(booking_id), Some(ci), Some(co)) = (
                row.customer_name.clone(),
                row.booking_id,
                row.checkin,
                row.checkout,
            ) else {
                continue;
            };
            groups
                .entry((customer, booking_id))
                .or_default()
                .extend(days_in_range(ci, co));
        }

        let stays = groups
            .into_iter()
            .map(|((customer_name, booking_id), dates)| CustomerStay {
                customer_name,
                booking_id,
                dates: dates.into_iter().collect(),
            })
            .collect();

        result.push(RoomOccupancy {
            room_id,
            room_name,
            stays,
        });
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn stay(room_id: i32, room: &str, customer: &str, booking: i32, ci: NaiveDate, co: NaiveDate) -> StayRow {
        StayRow {
            room_id,
            room_name: room.to_string(),
            customer_name: Some(customer.to_string()),
            booking_id: Some(booking),
            checkin: Some(ci),
            checkout: Some(co),
        }
    }

    #[test]
    fn month_days_respects_month_length() {
        assert_eq!(month_days(2024, 2).unwrap().len(), 29); // leap year
        assert_eq!(month_days(2023, 2).unwrap().len(), 28);
        assert_eq!(month_days(2024, 4).unwrap().len(), 30);
        assert_eq!(month_days(2024, 12).unwrap().len(), 31);
    }

    #[test]
    fn month_days_rejects_bad_month() {
        assert!(month_days(2024, 0).is_none());
        assert!(month_days(2024, 13).is_none());
    }

    #[test]
    fn days_in_range_is_inclusive() {
        let days = days_in_range(d(2024, 1, 30), d(2024, 2, 2));
        assert_eq!(
            days,
            vec![d(2024, 1, 30), d(2024, 1, 31), d(2024, 2, 1), d(2024, 2, 2)]
        );
    }

    #[test]
    fn days_in_range_empty_when_reversed() {
        assert!(days_in_range(d(2024, 2, 2), d(2024, 2, 1)).is_empty());
    }

    #[test]
    fn grid_marks_booked_day_in_three_day_window() {
        let rows = vec![stay(1, "A", "Ana", 10, d(2024, 1, 2), d(2024, 1, 2))];
        let grid = build_range_grid(&rows, d(2024, 1, 1), d(2024, 1, 3));

        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0].status, DayStatus::Available);
        assert_eq!(grid[1].status, DayStatus::Booked);
        assert_eq!(grid[2].status, DayStatus::Available);
    }

    #[test]
    fn grid_includes_bookingless_rooms() {
        let rows = vec![
            stay(1, "A", "Ana", 10, d(2024, 1, 1), d(2024, 1, 2)),
            StayRow::vacant(2, "B"),
        ];
        let grid = build_range_grid(&rows, d(2024, 1, 1), d(2024, 1, 2));

        assert_eq!(grid.len(), 4);
        let room_b: Vec<_> = grid.iter().filter(|c| c.room_name == "B").collect();
        assert_eq!(room_b.len(), 2);
        assert!(room_b.iter().all(|c| c.status == DayStatus::Available));
    }

    #[test]
    fn grid_is_ordered_by_room_name_then_date() {
        let rows = vec![StayRow::vacant(2, "B"), StayRow::vacant(1, "A")];
        let grid = build_range_grid(&rows, d(2024, 1, 1), d(2024, 1, 2));

        let order: Vec<_> = grid.iter().map(|c| (c.room_name.as_str(), c.date)).collect();
        assert_eq!(
            order,
            vec![
                ("A", d(2024, 1, 1)),
                ("A", d(2024, 1, 2)),
                ("B", d(2024, 1, 1)),
                ("B", d(2024, 1, 2)),
            ]
        );
    }

    #[test]
    fn details_group_by_customer_and_booking() {
        let rows = vec![
            stay(1, "A", "Maya", 11, d(2024, 1, 3), d(2024, 1, 4)),
            stay(1, "A", "Budi", 12, d(2024, 1, 1), d(2024, 1, 2)),
            StayRow::vacant(2, "B"),
        ];
        let details = group_room_details(&rows);

        assert_eq!(details.len(), 2);
        assert_eq!(details[0].room_name, "A");
        // customer-name order
        assert_eq!(details[0].stays[0].customer_name, "Budi");
        assert_eq!(details[0].stays[0].dates, vec![d(2024, 1, 1), d(2024, 1, 2)]);
        assert_eq!(details[0].stays[1].customer_name, "Maya");

        // bookingless room still present with an empty list
        assert_eq!(details[1].room_name, "B");
        assert!(details[1].stays.is_empty());
    }

    #[test]
    fn details_merge_lines_of_same_booking() {
        let rows = vec![
            stay(1, "A", "Maya", 11, d(2024, 1, 1), d(2024, 1, 2)),
            stay(1, "A", "Maya", 11, d(2024, 1, 4), d(2024, 1, 4)),
        ];
        let details = group_room_details(&rows);

        assert_eq!(details[0].stays.len(), 1);
        assert_eq!(
            details[0].stays[0].dates,
            vec![d(2024, 1, 1), d(2024, 1, 2), d(2024, 1, 4)]
        );
    }
}
