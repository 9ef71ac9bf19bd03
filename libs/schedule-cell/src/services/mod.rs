pub mod calendar;
pub mod clinic;
