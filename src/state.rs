//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::MappingRepository;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn MappingRepository>>,
    /// Public base for short URLs; `None` derives it from the `Host` header.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<dyn MappingRepository>>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            link_service,
            base_url,
        }
    }
}
