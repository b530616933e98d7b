use std::sync::Arc;

use crate::core::{AppConfig, CalendarService};

pub struct AppState {
    pub config: AppConfig,
    // Built once at startup and shared by every request
    pub calendar: Arc<dyn CalendarService>,
}

impl AppState {
    pub fn new(config: AppConfig, calendar: Arc<dyn CalendarService>) -> Self {
        Self { config, calendar }
    }
}
