pub mod calendar;
pub mod config;

pub use calendar::{CalendarService, CreatedEvent};
pub use config::{AppConfig, Credentials};
