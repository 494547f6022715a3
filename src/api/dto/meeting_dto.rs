//! Meeting request and deal bodies.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{AttendanceId, CompanyId, DealDraft, MeetingId, MeetingStatus};

/// Request body for `POST /meetings`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMeetingRequest {
    /// Registration of the requesting company.
    pub attendance_id: AttendanceId,
    /// Company asked for a meeting.
    pub requested_company_id: CompanyId,
}

/// Request body for `PUT /meetings/{id}/status`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MeetingStatusRequest {
    /// New status.
    pub status: MeetingStatus,
}

/// Filter for `GET /meetings`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MeetingQuery {
    /// Only requests made by this registration.
    pub attendance_id: Option<AttendanceId>,
}

/// Request body for `POST /deals`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DealRequest {
    /// Concluded meeting the deal came out of.
    pub meeting_id: MeetingId,
    /// What was agreed.
    pub description: String,
    /// Number of units.
    pub quantity: u32,
    /// Price per unit, smallest currency unit.
    pub unit_price: u64,
}

impl From<DealRequest> for DealDraft {
    fn from(req: DealRequest) -> Self {
        Self {
            meeting_id: req.meeting_id,
            description: req.description,
            quantity: req.quantity,
            unit_price: req.unit_price,
        }
    }
}
