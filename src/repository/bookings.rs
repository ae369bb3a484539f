//! Bookings repository for database operations

use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};
use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::booking::{
        Booking, BookingSummary, BookingTraveler, CreateBooking, UpdateBooking,
        STATUS_CANCELLED, STATUS_COMPLETED, STATUS_CONFIRMED, STATUS_PENDING,
    },
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn code_exists(&self, code: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM bookings WHERE booking_code = $1)")
                .bind(code)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Insert the booking header and all traveler rows as one transaction.
    /// A failure on any traveler insert rolls back the header as well.
    pub async fn create(
        &self,
        user_id: i32,
        booking_code: &str,
        contact_email: &str,
        total_price: Decimal,
        request: &CreateBooking,
    ) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await?;

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                booking_code, user_id, destination_id, start_date, end_date,
                number_of_travelers, total_price,
                primary_contact_name, primary_contact_email, primary_contact_phone,
                special_requirements, dietary_restrictions
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(booking_code)
        .bind(user_id)
        .bind(request.destination_id)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.number_of_travelers)
        .bind(total_price)
        .bind(&request.primary_contact_name)
        .bind(contact_email)
        .bind(&request.primary_contact_phone)
        .bind(request.special_requirements.as_deref().unwrap_or(""))
        .bind(request.dietary_restrictions.as_deref().unwrap_or(""))
        .fetch_one(&mut *tx)
        .await?;

        for traveler in &request.travelers {
            sqlx::query(
                r#"
                INSERT INTO booking_travelers (
                    booking_id, first_name, last_name, date_of_birth,
                    passport_number, nationality
                ) VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(booking.id)
            .bind(&traveler.first_name)
            .bind(&traveler.last_name)
            .bind(traveler.date_of_birth)
            .bind(&traveler.passport_number)
            .bind(&traveler.nationality)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(booking)
    }

    /// Get a booking scoped to its owner. Cross-user IDs come back as
    /// NotFound, indistinguishable from a missing row.
    pub async fn get_for_user(&self, id: i32, user_id: i32) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking with id {} not found", id)))
    }

    /// All bookings owned by a user, newest first
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    /// Traveler rows for one booking
    pub async fn travelers_for_booking(&self, booking_id: i32) -> AppResult<Vec<BookingTraveler>> {
        let travelers = sqlx::query_as::<_, BookingTraveler>(
            "SELECT * FROM booking_travelers WHERE booking_id = $1 ORDER BY id",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(travelers)
    }

    /// Traveler rows for a set of bookings, grouped by booking ID
    pub async fn travelers_for_bookings(
        &self,
        booking_ids: &[i32],
    ) -> AppResult<HashMap<i32, Vec<BookingTraveler>>> {
        let travelers = sqlx::query_as::<_, BookingTraveler>(
            "SELECT * FROM booking_travelers WHERE booking_id = ANY($1) ORDER BY id",
        )
        .bind(booking_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<i32, Vec<BookingTraveler>> = HashMap::new();
        for traveler in travelers {
            grouped.entry(traveler.booking_id).or_default().push(traveler);
        }
        Ok(grouped)
    }

    /// Partial update of an owned booking. The booking code and owner are
    /// never touched; the total price is never recomputed.
    pub async fn update_for_user(
        &self,
        id: i32,
        user_id: i32,
        update: &UpdateBooking,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET
                start_date = COALESCE($3, start_date),
                end_date = COALESCE($4, end_date),
                number_of_travelers = COALESCE($5, number_of_travelers),
                primary_contact_name = COALESCE($6, primary_contact_name),
                primary_contact_email = COALESCE($7, primary_contact_email),
                primary_contact_phone = COALESCE($8, primary_contact_phone),
                special_requirements = COALESCE($9, special_requirements),
                dietary_restrictions = COALESCE($10, dietary_restrictions),
                status = COALESCE($11, status),
                payment_status = COALESCE($12, payment_status),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(update.start_date)
        .bind(update.end_date)
        .bind(update.number_of_travelers)
        .bind(&update.primary_contact_name)
        .bind(&update.primary_contact_email)
        .bind(&update.primary_contact_phone)
        .bind(&update.special_requirements)
        .bind(&update.dietary_restrictions)
        .bind(&update.status)
        .bind(update.payment_status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking with id {} not found", id)))
    }

    /// Set the status of an owned booking
    pub async fn set_status(&self, id: i32, user_id: i32, status: &str) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET status = $3, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking with id {} not found", id)))
    }

    /// Per-status counts of a user's bookings
    pub async fn summary_for_user(&self, user_id: i32) -> AppResult<BookingSummary> {
        let row: (i64, i64, i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*),
                   COUNT(*) FILTER (WHERE status = $2),
                   COUNT(*) FILTER (WHERE status = $3),
                   COUNT(*) FILTER (WHERE status = $4),
                   COUNT(*) FILTER (WHERE status = $5)
            FROM bookings
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(STATUS_PENDING)
        .bind(STATUS_CONFIRMED)
        .bind(STATUS_COMPLETED)
        .bind(STATUS_CANCELLED)
        .fetch_one(&self.pool)
        .await?;

        Ok(BookingSummary {
            total_bookings: row.0,
            pending_bookings: row.1,
            confirmed_bookings: row.2,
            completed_bookings: row.3,
            cancelled_bookings: row.4,
        })
    }
}
