//! Data Transfer Objects for REST request/response serialization.
//!
//! Records are returned as their domain types; request bodies live here and
//! convert into the domain drafts. Times of day travel as `HH:MM` strings.

pub mod attendance_dto;
pub mod catalog_dto;
pub mod common_dto;
pub mod event_dto;
pub mod meeting_dto;
pub mod schedule_dto;

pub use attendance_dto::*;
pub use catalog_dto::*;
pub use common_dto::*;
pub use event_dto::*;
pub use meeting_dto::*;
pub use schedule_dto::*;
