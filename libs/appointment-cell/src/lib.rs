pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{BookAppointmentRequest, BookingError, Slot};
pub use services::availability::AvailabilityEngine;
pub use services::booking::BookingCoordinator;
