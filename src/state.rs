use crate::clock::Clock;
use crate::config::AppConfig;
use crate::date_window::DateWindow;
use crate::db::EntryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntryStore>,
    pub clock: Arc<dyn Clock>,
    pub earliest_date: Option<String>,
    pub base_path: String,
}

impl AppState {
    pub fn new(store: Arc<dyn EntryStore>, clock: Arc<dyn Clock>, config: &AppConfig) -> Self {
        Self {
            store,
            clock,
            earliest_date: config.earliest_date.clone(),
            base_path: config.base_path.clone(),
        }
    }

    pub fn date_window(&self) -> DateWindow {
        DateWindow::resolve(self.clock.as_ref(), self.earliest_date.as_deref())
    }
}
