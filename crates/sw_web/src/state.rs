use chrono::Utc;
use serde::Serialize;
use sw_extractors::ExtractorManager;

/// Identity blob returned from the root endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceMeta {
    pub service: String,
    pub description: String,
    pub start_at: String,
    pub environment: String,
}

impl ServiceMeta {
    pub fn new(service: impl Into<String>, description: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            description: description.into(),
            start_at: Utc::now().to_rfc3339(),
            environment: environment.into(),
        }
    }
}

pub struct AppState {
    pub manager: ExtractorManager,
    pub meta: ServiceMeta,
    pub api_key: String,
}
