//! Attendance registrations of companies to events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::repository::Record;
use super::{AttendanceId, CompanyId, EventId};

/// Lifecycle state of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The company will attend; it takes part in schedule generation.
    Confirmed,
    /// Registered, awaiting confirmation.
    Pending,
    /// Registration withdrawn.
    Cancelled,
}

/// A company's registration to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Attendance {
    /// Registration identifier.
    pub id: AttendanceId,
    /// Event registered to.
    pub event_id: EventId,
    /// Registered company.
    pub company_id: CompanyId,
    /// Current status.
    pub status: AttendanceStatus,
    /// Day the registration was made.
    #[schema(value_type = String, format = Date)]
    pub registered_on: NaiveDate,
}

impl Attendance {
    /// A fresh registration in [`AttendanceStatus::Pending`].
    #[must_use]
    pub const fn pending(
        id: AttendanceId,
        event_id: EventId,
        company_id: CompanyId,
        registered_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            event_id,
            company_id,
            status: AttendanceStatus::Pending,
            registered_on,
        }
    }

    /// `true` unless the registration was cancelled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status != AttendanceStatus::Cancelled
    }

    /// `true` if the company confirmed attendance.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.status == AttendanceStatus::Confirmed
    }
}

impl Record for Attendance {
    type Id = AttendanceId;
    const COLLECTION: &'static str = "attendance";

    fn id(&self) -> AttendanceId {
        self.id
    }
}
