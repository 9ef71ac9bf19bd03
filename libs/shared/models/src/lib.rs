pub mod appointment;
pub mod calendar;
pub mod clinic;
pub mod error;
pub mod registry;
pub mod wire;
