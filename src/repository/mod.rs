//! Repository layer for database operations

pub mod bookings;
pub mod contacts;
pub mod destinations;
pub mod favorites;
pub mod reviews;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub destinations: destinations::DestinationsRepository,
    pub bookings: bookings::BookingsRepository,
    pub favorites: favorites::FavoritesRepository,
    pub reviews: reviews::ReviewsRepository,
    pub contacts: contacts::ContactsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            destinations: destinations::DestinationsRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            favorites: favorites::FavoritesRepository::new(pool.clone()),
            reviews: reviews::ReviewsRepository::new(pool.clone()),
            contacts: contacts::ContactsRepository::new(pool.clone()),
            pool,
        }
    }
}
