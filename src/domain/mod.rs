//! Domain layer: records, identifiers, and the in-memory store.
//!
//! This module contains the console's data model (events, contacts,
//! companies, products, attendance, meeting requests, deals), the generic
//! [`Repository`] that stores each collection, and the demo data seed.

pub mod attendance;
pub mod catalogs;
pub mod company;
pub mod contact;
pub mod deal;
pub mod event;
pub mod ids;
pub mod meeting;
pub mod product;
pub mod repository;
pub mod seed;
pub mod store;
pub mod time_format;

pub use attendance::{Attendance, AttendanceStatus};
pub use company::{Company, CompanyDraft, CompanyKind};
pub use contact::{Contact, ContactDraft};
pub use deal::{Deal, DealDraft};
pub use event::{Event, EventDraft};
pub use ids::{AttendanceId, CompanyId, ContactId, DealId, EventId, MeetingId, ProductId};
pub use meeting::{MeetingRequest, MeetingStatus};
pub use product::{Product, ProductDraft};
pub use repository::{Record, Repository};
pub use store::ConsoleStore;
