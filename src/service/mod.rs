//! Service layer: business logic orchestration.
//!
//! [`CatalogService`] owns master data, [`EventService`] owns events and
//! registrations, and [`MeetingService`] owns meeting requests, deals and
//! the generated schedules. All three share one [`crate::domain::ConsoleStore`].

pub mod catalog_service;
pub mod event_service;
pub mod meeting_service;

pub use catalog_service::CatalogService;
pub use event_service::EventService;
pub use meeting_service::{GeneratedSchedule, MeetingService};
