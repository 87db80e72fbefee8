//! In-memory repositories for service tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::booking::{Booking, BookingLine, BookingRepository, BookingState};
use crate::domain::guest::{Guest, GuestRepository};
use crate::domain::invoice::{Invoice, InvoiceRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::room::{Room, RoomRepository};
use crate::domain::{DomainError, DomainResult};

#[derive(Default)]
struct State {
    rooms: Vec<Room>,
    guests: Vec<Guest>,
    bookings: Vec<Booking>,
    invoices: Vec<Invoice>,
    next_line_id: i32,
}

type Shared = Arc<Mutex<State>>;

pub struct MemRooms(Shared);
pub struct MemGuests(Shared);
pub struct MemBookings(Shared);
pub struct MemInvoices(Shared);

/// All four repositories over one shared in-memory state.
pub struct InMemoryRepos {
    state: Shared,
    rooms: MemRooms,
    guests: MemGuests,
    bookings: MemBookings,
    invoices: MemInvoices,
}

impl InMemoryRepos {
    pub fn new() -> Self {
        let state: Shared = Arc::default();
        Self {
            rooms: MemRooms(state.clone()),
            guests: MemGuests(state.clone()),
            bookings: MemBookings(state.clone()),
            invoices: MemInvoices(state.clone()),
            state,
        }
    }

    pub fn seed_room(&self, name: &str) -> Room {
        let mut s = self.state.lock().unwrap();
        let room = Room::new(s.rooms.len() as i32 + 1, name, "IDR");
        s.rooms.push(room.clone());
        room
    }

    pub fn seed_guest(&self, name: &str) -> Guest {
        let mut s = self.state.lock().unwrap();
        let guest = Guest::new(s.guests.len() as i32 + 1, name, None, None);
        s.guests.push(guest.clone());
        guest
    }

    pub fn seed_invoice(&self, reference: &str, payment_state: &str) -> Invoice {
        let mut s = self.state.lock().unwrap();
        let invoice = Invoice {
            id: s.invoices.len() as i32 + 1,
            reference: reference.to_string(),
            payment_state: payment_state.to_string(),
            amount_total: 1_000_000,
            amount_residual: 0,
            created_at: chrono::Utc::now(),
        };
        s.invoices.push(invoice.clone());
        invoice
    }
}

#[async_trait]
impl RoomRepository for MemRooms {
    async fn save(&self, mut room: Room) -> DomainResult<Room> {
        let mut s = self.0.lock().unwrap();
        room.id = s.rooms.len() as i32 + 1;
        s.rooms.push(room.clone());
        Ok(room)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        Ok(self.0.lock().unwrap().rooms.iter().find(|r| r.id == id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        let mut rooms = self.0.lock().unwrap().rooms.clone();
        rooms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rooms)
    }
}

#[async_trait]
impl GuestRepository for MemGuests {
    async fn save(&self, mut guest: Guest) -> DomainResult<Guest> {
        let mut s = self.0.lock().unwrap();
        guest.id = s.guests.len() as i32 + 1;
        s.guests.push(guest.clone());
        Ok(guest)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Guest>> {
        Ok(self.0.lock().unwrap().guests.iter().find(|g| g.id == id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Guest>> {
        let mut guests = self.0.lock().unwrap().guests.clone();
        guests.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(guests)
    }
}

#[async_trait]
impl BookingRepository for MemBookings {
    async fn save(&self, mut booking: Booking) -> DomainResult<Booking> {
        let mut s = self.0.lock().unwrap();
        booking.id = s.bookings.len() as i32 + 1;
        booking.name = Booking::reference(booking.id);
        for line in &mut booking.lines {
            s.next_line_id += 1;
            line.id = s.next_line_id;
            line.booking_id = booking.id;
        }
        s.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>> {
        Ok(self.0.lock().unwrap().bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Booking>> {
        let mut all = self.0.lock().unwrap().bookings.clone();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(all)
    }

    async fn find_for_report(
        &self,
        checkin_from: Option<NaiveDate>,
        checkout_to: Option<NaiveDate>,
    ) -> DomainResult<Vec<Booking>> {
        let all = self.0.lock().unwrap().bookings.clone();
        Ok(all
            .into_iter()
            .filter(|b| {
                checkin_from.map_or(true, |d| {
                    b.checkin_date >= d.and_hms_opt(0, 0, 0).unwrap().and_utc()
                }) && checkout_to.map_or(true, |d| {
                    b.checkout_date <= d.and_hms_opt(0, 0, 0).unwrap().and_utc()
                })
            })
            .collect())
    }

    async fn add_line(&self, mut line: BookingLine) -> DomainResult<BookingLine> {
        let mut s = self.0.lock().unwrap();
        s.next_line_id += 1;
        line.id = s.next_line_id;
        let booking = s
            .bookings
            .iter_mut()
            .find(|b| b.id == line.booking_id)
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: line.booking_id.to_string(),
            })?;
        booking.lines.push(line.clone());
        Ok(line)
    }

    async fn find_active_lines_for_room(
        &self,
        room_id: i32,
        exclude_line: Option<i32>,
    ) -> DomainResult<Vec<BookingLine>> {
        let s = self.0.lock().unwrap();
        Ok(s.bookings
            .iter()
            .filter(|b| b.state.is_active())
            .flat_map(|b| b.lines.iter())
            .filter(|l| l.room_id == room_id && Some(l.id) != exclude_line)
            .cloned()
            .collect())
    }

    async fn set_state(&self, id: i32, state: BookingState) -> DomainResult<()> {
        let mut s = self.0.lock().unwrap();
        let booking = s
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: id.to_string(),
            })?;
        booking.state = state;
        Ok(())
    }
}

#[async_trait]
impl InvoiceRepository for MemInvoices {
    async fn save(&self, mut invoice: Invoice) -> DomainResult<Invoice> {
        let mut s = self.0.lock().unwrap();
        invoice.id = s.invoices.len() as i32 + 1;
        s.invoices.push(invoice.clone());
        Ok(invoice)
    }

    async fn find_by_reference(&self, reference: &str) -> DomainResult<Option<Invoice>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .invoices
            .iter()
            .find(|i| i.reference == reference)
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Invoice>> {
        let mut all = self.0.lock().unwrap().invoices.clone();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(all)
    }
}

impl RepositoryProvider for InMemoryRepos {
    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn guests(&self) -> &dyn GuestRepository {
        &self.guests
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn invoices(&self) -> &dyn InvoiceRepository {
        &self.invoices
    }
}
