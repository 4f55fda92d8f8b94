use crate::store::OlympicStore;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub store: OlympicStore,
    pub data_timeout: Duration,
}

impl AppState {
    pub fn new(store: OlympicStore) -> Self {
        Self {
            store,
            data_timeout: Duration::from_secs(5),
        }
    }
}
