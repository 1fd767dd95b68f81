use std::sync::Arc;

use configs::ApiConfig;
use service::activity::{repository::ActivityRepository, ActivityService, Validator};

/// Shared by every handler; the store is injected here rather than captured globally.
#[derive(Clone)]
pub struct AppState {
    pub activities: Arc<ActivityService<dyn ActivityRepository>>,
    pub legacy_status_codes: bool,
}

impl AppState {
    pub fn new(repo: Arc<dyn ActivityRepository>, api: &ApiConfig) -> Self {
        Self {
            activities: Arc::new(ActivityService::new(repo, Validator::new(api.validation))),
            legacy_status_codes: api.legacy_status_codes,
        }
    }
}
