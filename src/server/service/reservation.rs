//! Booking and reservation management.
//!
//! A booking inserts the reservation and the room restriction occupying its dates
//! in one transaction, after re-checking that the room is still free.

use dioxus::prelude::*;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        reservation::ReservationRepository, room::RoomRepository,
        room_restriction::RoomRestrictionRepository,
    },
    error::AppError,
    model::{
        mail::MailData,
        reservation::{
            NewReservationParam, NewRoomRestrictionParam, Reservation, RestrictionKind,
            UpdateReservationParam,
        },
    },
    render::helpers::human_date,
};

/// Result of a booking attempt.
#[derive(Debug)]
pub enum BookingOutcome {
    Booked(Reservation),
    /// Another reservation or a block took the room first.
    Unavailable,
}

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a room.
    ///
    /// The room's row is locked before availability is checked, so two bookings
    /// of the same room run one after the other and the second sees the first.
    ///
    /// # Returns
    /// - `Ok(BookingOutcome::Booked)` - Reservation and restriction committed
    /// - `Ok(BookingOutcome::Unavailable)` - The room is taken for some of the nights
    /// - `Err(AppError::DbErr)` - Insert failed; nothing was written
    pub async fn book(&self, param: NewReservationParam) -> Result<BookingOutcome, AppError> {
        let txn = self.db.begin().await?;
        RoomRepository::new(&txn)
            .lock_for_update(param.room_id)
            .await?;

        let restrictions = RoomRestrictionRepository::new(&txn);

        if !restrictions
            .is_room_available(param.room_id, param.start_date, param.end_date)
            .await?
        {
            txn.rollback().await?;
            return Ok(BookingOutcome::Unavailable);
        }

        let reservation = ReservationRepository::new(&txn).create(param).await?;

        restrictions
            .create(NewRoomRestrictionParam {
                start_date: reservation.start_date,
                end_date: reservation.end_date,
                room_id: reservation.room_id,
                reservation_id: Some(reservation.id),
                kind: RestrictionKind::Reservation,
            })
            .await?;

        txn.commit().await?;

        Ok(BookingOutcome::Booked(reservation))
    }

    pub async fn find(&self, id: i32) -> Result<Option<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db).get_all().await?)
    }

    pub async fn list_new(&self) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db).get_all_new().await?)
    }

    pub async fn update(&self, param: UpdateReservationParam) -> Result<(), AppError> {
        Ok(ReservationRepository::new(self.db).update(param).await?)
    }

    pub async fn mark_processed(&self, id: i32) -> Result<(), AppError> {
        Ok(ReservationRepository::new(self.db)
            .set_processed(id, true)
            .await?)
    }

    /// Deletes a reservation, freeing its room.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No reservation with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let deleted = ReservationRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        Ok(deleted)
    }
}

/// Builds the guest confirmation and the owner notification for a booking.
///
/// `reservation.room` must be loaded so both messages can name the room.
pub fn booking_mails(reservation: &Reservation, from: &str, owner_email: &str) -> [MailData; 2] {
    let start = human_date(reservation.start_date);
    let end = human_date(reservation.end_date);
    let room = &reservation.room.room_name;
    let first_name = &reservation.first_name;
    let last_name = &reservation.last_name;
    let email = &reservation.email;

    // Rendered through dioxus so guest-supplied text is HTML-escaped.
    let guest = MailData {
        to: reservation.email.clone(),
        from: from.to_string(),
        subject: "Reservation Confirmation".to_string(),
        content: dioxus_ssr::render_element(rsx! {
            strong { "Reservation Confirmation" }
            br {}
            "Dear {first_name} {last_name},"
            br {}
            "This is to confirm your reservation of the {room} from {start} to {end}."
        }),
        template: Some("basic.html".to_string()),
    };

    let owner = MailData {
        to: owner_email.to_string(),
        from: from.to_string(),
        subject: "Reservation Notification".to_string(),
        content: dioxus_ssr::render_element(rsx! {
            strong { "Reservation Notification" }
            br {}
            "A reservation has been made for the {room} from {start} to {end} by {first_name} {last_name} ({email})."
        }),
        template: Some("basic.html".to_string()),
    };

    [guest, owner]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityTrait;
    use test_utils::{builder::TestBuilder, factory, factory::helpers::future_date};

    fn param(room_id: i32, start: i64, end: i64) -> NewReservationParam {
        NewReservationParam {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            start_date: future_date(start),
            end_date: future_date(end),
            room_id,
        }
    }

    #[tokio::test]
    async fn books_reservation_with_restriction() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_reservation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let room = factory::room::create_room(db).await?;

        let outcome = ReservationService::new(db).book(param(room.id, 0, 2)).await?;

        let BookingOutcome::Booked(reservation) = outcome else {
            panic!("Expected booking to succeed");
        };

        let restrictions = entity::prelude::RoomRestriction::find().all(db).await?;
        assert_eq!(restrictions.len(), 1);
        assert_eq!(restrictions[0].reservation_id, Some(reservation.id));
        assert_eq!(restrictions[0].start_date, future_date(0));
        assert_eq!(restrictions[0].end_date, future_date(2));

        Ok(())
    }

    #[tokio::test]
    async fn refuses_overlapping_booking() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_reservation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let room = factory::room::create_room(db).await?;
        let service = ReservationService::new(db);

        assert!(matches!(
            service.book(param(room.id, 0, 2)).await?,
            BookingOutcome::Booked(_)
        ));
        assert!(matches!(
            service.book(param(room.id, 1, 3)).await?,
            BookingOutcome::Unavailable
        ));
        assert!(matches!(
            service.book(param(room.id, 2, 3)).await?,
            BookingOutcome::Booked(_)
        ));

        let reservations = entity::prelude::Reservation::find().all(db).await?;
        assert_eq!(reservations.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn failed_insert_leaves_nothing_behind() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_reservation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = ReservationService::new(db).book(param(999, 0, 2)).await;

        assert!(result.is_err());
        assert!(entity::prelude::Reservation::find().all(db).await?.is_empty());

        Ok(())
    }

    #[test]
    fn booking_mails_name_guest_and_room() {
        let reservation = Reservation::from_entity(
            test_utils::fixture::reservation_entity(),
            Some(test_utils::fixture::room_entity()),
        );

        let [guest, owner] =
            booking_mails(&reservation, "reservations@example.com", "owner@example.com");

        assert_eq!(guest.to, "ada@example.com");
        assert_eq!(guest.subject, "Reservation Confirmation");
        assert!(guest.content.starts_with("<strong>Reservation Confirmation</strong>"));
        assert!(guest.content.contains("Quarters"));
        assert!(guest.content.contains("2050-01-01"));

        assert_eq!(owner.to, "owner@example.com");
        assert_eq!(owner.subject, "Reservation Notification");
        assert!(owner.content.contains("Quarters"));
        assert!(owner.content.contains("2050-01-03"));
        assert!(owner.content.contains("ada@example.com"));
    }

    #[test]
    fn booking_mails_escape_guest_input() {
        let mut reservation = Reservation::from_entity(
            test_utils::fixture::reservation_entity(),
            Some(test_utils::fixture::room_entity()),
        );
        reservation.first_name = "<script>alert(1)</script>".to_string();
        reservation.last_name = "O<b>".to_string();

        let [guest, owner] =
            booking_mails(&reservation, "reservations@example.com", "owner@example.com");

        for mail in [guest, owner] {
            assert!(!mail.content.contains("<script>"));
            assert!(!mail.content.contains("<b>"));
            assert!(mail.content.contains("&lt;script&gt;"));
        }
    }
}
