//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::ConsoleStore;
use crate::service::{CatalogService, EventService, MeetingService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Contacts, companies and products.
    pub catalog: Arc<CatalogService>,
    /// Events and attendance.
    pub events: Arc<EventService>,
    /// Meeting requests, deals and schedules.
    pub meetings: Arc<MeetingService>,
}

impl AppState {
    /// Builds every service over the same store.
    #[must_use]
    pub fn new(store: Arc<ConsoleStore>) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(Arc::clone(&store))),
            events: Arc::new(EventService::new(Arc::clone(&store))),
            meetings: Arc::new(MeetingService::new(store)),
        }
    }
}
