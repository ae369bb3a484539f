//! Wayfarer Travel Booking Platform
//!
//! A Rust REST API server for a travel-booking platform: destination catalog,
//! bookings with per-traveler records, favorites, reviews and contact-form
//! submissions.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
