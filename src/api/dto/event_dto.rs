//! Event request bodies.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::time_format::hhmm;
use crate::domain::{ContactId, EventDraft};

/// Request body for `POST /events` and `PUT /events/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EventRequest {
    /// Public title.
    pub description: String,
    /// Organizing entity.
    #[serde(default)]
    pub organizer: String,
    /// Venue name.
    #[serde(default)]
    pub venue: String,
    /// Department.
    #[serde(default)]
    pub department: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Website.
    #[serde(default)]
    pub website: String,
    /// Event day.
    #[schema(value_type = String, format = Date, example = "2030-03-15")]
    pub event_date: NaiveDate,
    /// Opening time.
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "08:00")]
    pub start_time: NaiveTime,
    /// Closing time.
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "17:00")]
    pub end_time: NaiveTime,
    /// Currency code, see `GET /config/catalogs`.
    pub currency: String,
    /// Logo reference.
    #[serde(default)]
    pub logo_url: String,
    /// Contact person.
    pub contact_id: ContactId,
    /// Number of tables.
    pub table_capacity: u32,
    /// Meeting length in minutes.
    pub meeting_duration_minutes: u32,
    /// Break start; equal to `break_end` for no break.
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "12:00")]
    pub break_start: NaiveTime,
    /// Break end.
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "13:00")]
    pub break_end: NaiveTime,
}

impl From<EventRequest> for EventDraft {
    fn from(req: EventRequest) -> Self {
        Self {
            description: req.description,
            organizer: req.organizer,
            venue: req.venue,
            department: req.department,
            address: req.address,
            website: req.website,
            event_date: req.event_date,
            start_time: req.start_time,
            end_time: req.end_time,
            currency: req.currency,
            logo_url: req.logo_url,
            contact_id: req.contact_id,
            table_capacity: req.table_capacity,
            meeting_duration_minutes: req.meeting_duration_minutes,
            break_start: req.break_start,
            break_end: req.break_end,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parses_hour_minute_times() {
        let body = serde_json::json!({
            "description": "Rueda de Negocios Tarija",
            "event_date": "2030-03-15",
            "start_time": "08:00",
            "end_time": "17:00:00",
            "currency": "BS",
            "contact_id": 1,
            "table_capacity": 10,
            "meeting_duration_minutes": 20,
            "break_start": "12:00",
            "break_end": "13:00"
        });
        let Ok(req) = serde_json::from_value::<EventRequest>(body) else {
            panic!("request should parse");
        };
        let draft = EventDraft::from(req);
        assert_eq!(draft.end_time, NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default());
        assert!(draft.organizer.is_empty());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_time() {
        let body = serde_json::json!({
            "description": "x",
            "event_date": "2030-03-15",
            "start_time": "8 o'clock",
            "end_time": "17:00",
            "currency": "BS",
            "contact_id": 1,
            "table_capacity": 10,
            "meeting_duration_minutes": 20,
            "break_start": "12:00",
            "break_end": "13:00"
        });
        assert!(serde_json::from_value::<EventRequest>(body).is_err());
    }
}
