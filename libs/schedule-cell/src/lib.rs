pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::CalendarError;
pub use services::calendar::CalendarService;
pub use services::clinic::ClinicConfigurationService;
