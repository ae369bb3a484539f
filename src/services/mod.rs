//! Business logic services

pub mod bookings;
pub mod contacts;
pub mod destinations;
pub mod email;
pub mod favorites;
pub mod reviews;
pub mod users;

use crate::{
    config::{AuthConfig, EmailConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub destinations: destinations::DestinationsService,
    pub bookings: bookings::BookingsService,
    pub favorites: favorites::FavoritesService,
    pub reviews: reviews::ReviewsService,
    pub contacts: contacts::ContactsService,
    pub email: email::EmailService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig, email_config: EmailConfig) -> Self {
        let email = email::EmailService::new(email_config);
        Self {
            users: users::UsersService::new(repository.clone(), auth_config),
            destinations: destinations::DestinationsService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone()),
            favorites: favorites::FavoritesService::new(repository.clone()),
            reviews: reviews::ReviewsService::new(repository.clone()),
            contacts: contacts::ContactsService::new(repository, email.clone()),
            email,
        }
    }
}
