use std::sync::Arc;
use std::time::{Instant, SystemTime};

use crate::calendar::{Calendar, SystemCalendar};
use crate::config::Config;
use crate::services::document::{PageCounter, PdfPageCounter};

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    config: Arc<Config>,
    calendar: Arc<dyn Calendar>,
    page_counter: Arc<dyn PageCounter>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_collaborators(config, Arc::new(SystemCalendar), Arc::new(PdfPageCounter))
    }

    pub fn with_collaborators(
        config: Config,
        calendar: Arc<dyn Calendar>,
        page_counter: Arc<dyn PageCounter>,
    ) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            config: Arc::new(config),
            calendar,
            page_counter,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn calendar(&self) -> Arc<dyn Calendar> {
        Arc::clone(&self.calendar)
    }

    pub fn page_counter(&self) -> Arc<dyn PageCounter> {
        Arc::clone(&self.page_counter)
    }
}
