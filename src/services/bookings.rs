//! Booking workflow service

use rand::Rng;
use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{
            Booking, BookingDetails, BookingSummary, CreateBooking, UpdateBooking,
            STATUS_CANCELLED, STATUS_COMPLETED,
        },
        destination::DestinationSummary,
    },
    repository::Repository,
};

/// Booking codes are a two-letter prefix followed by eight digits.
const BOOKING_CODE_PREFIX: &str = "TT";
const BOOKING_CODE_DIGITS: usize = 8;

/// How many collisions against existing codes we tolerate before giving up.
/// At 10^8 possible codes this only trips once the code space is nearly full.
const BOOKING_CODE_MAX_ATTEMPTS: u32 = 8;

/// Generate a candidate booking code: prefix + random digits
fn generate_booking_code<R: Rng>(rng: &mut R) -> String {
    let mut code = String::with_capacity(BOOKING_CODE_PREFIX.len() + BOOKING_CODE_DIGITS);
    code.push_str(BOOKING_CODE_PREFIX);
    for _ in 0..BOOKING_CODE_DIGITS {
        code.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    code
}

/// Creation-time request checks: date ordering and traveler count
fn validate_booking_request(request: &CreateBooking) -> AppResult<()> {
    if request.start_date >= request.end_date {
        return Err(AppError::Validation(
            "end_date must be after start_date".to_string(),
        ));
    }

    if request.travelers.len() != request.number_of_travelers as usize {
        return Err(AppError::Validation(
            "Number of travelers must match the travelers list length".to_string(),
        ));
    }

    Ok(())
}

/// Total price is the destination's per-person price times the traveler
/// count, computed once at creation in decimal arithmetic.
fn compute_total_price(price_per_person: Decimal, number_of_travelers: i32) -> Decimal {
    price_per_person * Decimal::from(number_of_travelers)
}

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a booking: validate, price, assign a unique code, persist the
    /// header and travelers atomically, return the hydrated result.
    pub async fn create_booking(
        &self,
        user_id: i32,
        request: CreateBooking,
    ) -> AppResult<BookingDetails> {
        validate_booking_request(&request)?;

        let destination = self
            .repository
            .destinations
            .summary_by_id(request.destination_id)
            .await?;

        let total_price =
            compute_total_price(destination.price_per_person, request.number_of_travelers);

        let booking_code = self.unique_booking_code().await?;

        // The contact email falls back to the account email when omitted
        let user = self.repository.users.get_by_id(user_id).await?;
        let contact_email = request
            .primary_contact_email
            .clone()
            .unwrap_or_else(|| user.email.clone());

        let booking = self
            .repository
            .bookings
            .create(user_id, &booking_code, &contact_email, total_price, &request)
            .await?;

        tracing::info!(
            booking_code = %booking.booking_code,
            user_id,
            destination_id = booking.destination_id,
            "Booking created"
        );

        let travelers = self
            .repository
            .bookings
            .travelers_for_booking(booking.id)
            .await?;

        Ok(Self::hydrate(booking, destination, travelers, user.email))
    }

    /// Draw codes until one is free, bounded
    async fn unique_booking_code(&self) -> AppResult<String> {
        for _ in 0..BOOKING_CODE_MAX_ATTEMPTS {
            // ThreadRng is not Send, so it must not live across the await
            let code = generate_booking_code(&mut rand::thread_rng());
            if !self.repository.bookings.code_exists(&code).await? {
                return Ok(code);
            }
        }
        Err(AppError::Internal(
            "Could not allocate a unique booking code".to_string(),
        ))
    }

    fn hydrate(
        booking: Booking,
        destination: DestinationSummary,
        travelers: Vec<crate::models::booking::BookingTraveler>,
        user_email: String,
    ) -> BookingDetails {
        BookingDetails {
            id: booking.id,
            booking_code: booking.booking_code,
            destination_id: booking.destination_id,
            destination,
            start_date: booking.start_date,
            end_date: booking.end_date,
            number_of_travelers: booking.number_of_travelers,
            total_price: booking.total_price,
            primary_contact_name: booking.primary_contact_name,
            primary_contact_email: booking.primary_contact_email,
            primary_contact_phone: booking.primary_contact_phone,
            special_requirements: booking.special_requirements,
            dietary_restrictions: booking.dietary_restrictions,
            status: booking.status,
            payment_status: booking.payment_status,
            user_email,
            travelers,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }

    async fn hydrate_one(&self, booking: Booking) -> AppResult<BookingDetails> {
        let destination = self
            .repository
            .destinations
            .summary_by_id(booking.destination_id)
            .await?;
        let travelers = self
            .repository
            .bookings
            .travelers_for_booking(booking.id)
            .await?;
        let user = self.repository.users.get_by_id(booking.user_id).await?;
        Ok(Self::hydrate(booking, destination, travelers, user.email))
    }

    /// All bookings of a user, hydrated, newest first
    pub async fn list_bookings(&self, user_id: i32) -> AppResult<Vec<BookingDetails>> {
        let bookings = self.repository.bookings.list_for_user(user_id).await?;

        let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
        let mut travelers_by_booking = self
            .repository
            .bookings
            .travelers_for_bookings(&ids)
            .await?;
        let user_email = self.repository.users.get_by_id(user_id).await?.email;

        let mut details = Vec::with_capacity(bookings.len());
        for booking in bookings {
            let destination = self
                .repository
                .destinations
                .summary_by_id(booking.destination_id)
                .await?;
            let travelers = travelers_by_booking.remove(&booking.id).unwrap_or_default();
            details.push(Self::hydrate(
                booking,
                destination,
                travelers,
                user_email.clone(),
            ));
        }

        Ok(details)
    }

    /// One owned booking, hydrated
    pub async fn get_booking(&self, id: i32, user_id: i32) -> AppResult<BookingDetails> {
        let booking = self.repository.bookings.get_for_user(id, user_id).await?;
        self.hydrate_one(booking).await
    }

    /// Partial update of an owned booking. Creation-time invariants are not
    /// re-validated and the total price stays as computed at creation.
    pub async fn update_booking(
        &self,
        id: i32,
        user_id: i32,
        update: UpdateBooking,
    ) -> AppResult<BookingDetails> {
        let booking = self
            .repository
            .bookings
            .update_for_user(id, user_id, &update)
            .await?;
        self.hydrate_one(booking).await
    }

    /// Cancel an owned booking, rejecting terminal states
    pub async fn cancel_booking(&self, id: i32, user_id: i32) -> AppResult<BookingDetails> {
        let booking = self.repository.bookings.get_for_user(id, user_id).await?;

        if booking.status == STATUS_CANCELLED {
            return Err(AppError::Conflict(
                "Booking is already cancelled".to_string(),
            ));
        }
        if booking.status == STATUS_COMPLETED {
            return Err(AppError::Conflict(
                "Cannot cancel completed booking".to_string(),
            ));
        }

        let cancelled = self
            .repository
            .bookings
            .set_status(id, user_id, STATUS_CANCELLED)
            .await?;

        tracing::info!(booking_code = %cancelled.booking_code, user_id, "Booking cancelled");

        self.hydrate_one(cancelled).await
    }

    /// Per-status counts of a user's bookings
    pub async fn summary(&self, user_id: i32) -> AppResult<BookingSummary> {
        self.repository.bookings.summary_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn request(
        start: NaiveDate,
        end: NaiveDate,
        number_of_travelers: i32,
        traveler_count: usize,
    ) -> CreateBooking {
        let traveler = crate::models::booking::TravelerInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
            passport_number: None,
            nationality: "British".to_string(),
        };

        CreateBooking {
            destination_id: 1,
            start_date: start,
            end_date: end,
            number_of_travelers,
            primary_contact_name: "Ada Lovelace".to_string(),
            primary_contact_email: Some("ada@example.com".to_string()),
            primary_contact_phone: "+44 20 7946 0000".to_string(),
            special_requirements: None,
            dietary_restrictions: None,
            travelers: vec![traveler; traveler_count],
        }
    }

    #[test]
    fn test_total_price_is_decimal_exact() {
        let total = compute_total_price(dec("1299.00"), 3);
        assert_eq!(total, dec("3897.00"));
    }

    #[test]
    fn test_total_price_single_traveler() {
        let total = compute_total_price(dec("449.99"), 1);
        assert_eq!(total, dec("449.99"));
    }

    #[test]
    fn test_rejects_inverted_dates() {
        let start = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 9, 3).unwrap();
        let err = validate_booking_request(&request(start, end, 1, 1)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_equal_dates() {
        let day = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();
        let err = validate_booking_request(&request(day, day, 1, 1)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_traveler_count_mismatch() {
        let start = NaiveDate::from_ymd_opt(2026, 9, 3).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();
        let err = validate_booking_request(&request(start, end, 3, 2)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_accepts_valid_request() {
        let start = NaiveDate::from_ymd_opt(2026, 9, 3).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();
        assert!(validate_booking_request(&request(start, end, 2, 2)).is_ok());
    }

    #[test]
    fn test_booking_code_format() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let code = generate_booking_code(&mut rng);
            assert_eq!(code.len(), 10);
            assert!(code.starts_with("TT"));
            assert!(code[2..].chars().all(|c| c.is_ascii_digit()));
        }
    }
}
