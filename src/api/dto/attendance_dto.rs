//! Attendance request bodies and filters.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{AttendanceStatus, CompanyId};

/// Request body for `POST /events/{id}/attendance`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterAttendanceRequest {
    /// Company to register.
    pub company_id: CompanyId,
}

/// Request body for `PUT /attendance/{id}/status`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AttendanceStatusRequest {
    /// New status.
    pub status: AttendanceStatus,
}

/// Filter for `GET /events/{id}/attendance`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AttendanceQuery {
    /// Only registrations in this status.
    pub status: Option<AttendanceStatus>,
}
