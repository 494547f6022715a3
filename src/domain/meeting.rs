//! One-on-one meeting requests between registered companies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::repository::Record;
use super::{AttendanceId, CompanyId, MeetingId};

/// Lifecycle state of a meeting request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    /// Agreed, not yet held.
    Scheduled,
    /// Called off.
    Cancelled,
    /// Held; deals may be recorded against it.
    Concluded,
}

/// A request by a registered company to meet another confirmed company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MeetingRequest {
    /// Meeting identifier.
    pub id: MeetingId,
    /// Registration of the requesting company.
    pub attendance_id: AttendanceId,
    /// Company asked for a meeting.
    pub requested_company_id: CompanyId,
    /// Current status.
    pub status: MeetingStatus,
    /// Day the request was made.
    #[schema(value_type = String, format = Date)]
    pub requested_on: NaiveDate,
}

impl MeetingRequest {
    /// A new request in [`MeetingStatus::Scheduled`].
    #[must_use]
    pub const fn scheduled(
        id: MeetingId,
        attendance_id: AttendanceId,
        requested_company_id: CompanyId,
        requested_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            attendance_id,
            requested_company_id,
            status: MeetingStatus::Scheduled,
            requested_on,
        }
    }
}

impl Record for MeetingRequest {
    type Id = MeetingId;
    const COLLECTION: &'static str = "meeting";

    fn id(&self) -> MeetingId {
        self.id
    }
}
