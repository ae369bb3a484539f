//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, bookings, contacts, destinations, favorites, health, reviews};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wayfarer API",
        version = "1.0.0",
        description = "Travel Booking Platform REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Wayfarer Team", email = "dev@wayfarer.travel")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::logout,
        auth::get_profile,
        auth::update_profile,
        // Destinations
        destinations::list_destinations,
        destinations::get_destination,
        destinations::featured_destinations,
        destinations::search_destinations,
        destinations::list_categories,
        destinations::create_destination,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::update_booking,
        bookings::cancel_booking,
        bookings::booking_summary,
        // Favorites
        favorites::toggle_favorite,
        favorites::favorites_status,
        favorites::list_favorites,
        favorites::list_favorite_lists,
        favorites::create_favorite_list,
        favorites::get_favorite_list,
        favorites::update_favorite_list,
        favorites::delete_favorite_list,
        favorites::add_to_favorite_list,
        favorites::remove_from_favorite_list,
        // Reviews
        reviews::list_reviews,
        reviews::create_review,
        // Contacts
        contacts::submit_contact,
        contacts::list_contacts,
        contacts::update_contact,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::AuthResponse,
            auth::MessageResponse,
            crate::models::user::User,
            crate::models::user::UserInfo,
            crate::models::user::RegisterUser,
            crate::models::user::UpdateProfile,
            // Destinations
            destinations::SearchQuery,
            destinations::SearchResponse,
            crate::models::destination::Category,
            crate::models::destination::CreateDestination,
            crate::models::destination::DestinationDetails,
            crate::models::destination::DestinationQuery,
            crate::models::destination::DestinationSummary,
            crate::models::destination::Difficulty,
            // Bookings
            bookings::CreateBookingResponse,
            bookings::CancelBookingResponse,
            crate::models::booking::BookingDetails,
            crate::models::booking::BookingSummary,
            crate::models::booking::BookingTraveler,
            crate::models::booking::CreateBooking,
            crate::models::booking::PaymentStatus,
            crate::models::booking::TravelerInput,
            crate::models::booking::UpdateBooking,
            // Favorites
            favorites::ToggleRequest,
            favorites::ToggleResponse,
            favorites::StatusRequest,
            favorites::StatusResponse,
            favorites::AddListItemRequest,
            favorites::AddListItemResponse,
            favorites::FavoriteMessageResponse,
            crate::models::favorite::CreateFavoriteList,
            crate::models::favorite::FavoriteDetails,
            crate::models::favorite::FavoriteListDetails,
            crate::models::favorite::FavoriteListItemDetails,
            crate::models::favorite::UpdateFavoriteList,
            // Reviews
            reviews::CreateReviewResponse,
            crate::models::review::CreateReview,
            crate::models::review::ReviewDetails,
            crate::models::review::ReviewQuery,
            // Contacts
            contacts::SubmitContactResponse,
            crate::models::contact::Contact,
            crate::models::contact::ContactCategory,
            crate::models::contact::ContactQuery,
            crate::models::contact::ContactStatus,
            crate::models::contact::SubmitContact,
            crate::models::contact::UpdateContact,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication and profile"),
        (name = "destinations", description = "Destination catalog"),
        (name = "bookings", description = "Booking management"),
        (name = "favorites", description = "Favorites and favorite lists"),
        (name = "reviews", description = "Destination reviews"),
        (name = "contacts", description = "Contact-form submissions")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
