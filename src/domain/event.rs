//! Business-round events and their venue timing.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use utoipa::ToSchema;

use super::catalogs::is_known_currency;
use super::repository::Record;
use super::time_format::hhmm;
use super::{ContactId, EventId};
use crate::error::ConsoleError;
use crate::scheduler::SlotWindow;

/// A business-round event: one venue, one day, a fixed number of tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Event {
    /// Event identifier.
    pub id: EventId,
    /// Public title of the event.
    pub description: String,
    /// Organizing entity.
    pub organizer: String,
    /// Venue name.
    pub venue: String,
    /// Department (region) where the venue is located.
    pub department: String,
    /// Street address.
    pub address: String,
    /// Event website.
    pub website: String,
    /// Day the event takes place.
    #[schema(value_type = String, format = Date, example = "2026-11-20")]
    pub event_date: NaiveDate,
    /// Opening time of the meeting floor.
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "08:00")]
    pub start_time: NaiveTime,
    /// Closing time of the meeting floor.
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "17:00")]
    pub end_time: NaiveTime,
    /// Currency code used for negotiated deals (e.g. `BS`).
    pub currency: String,
    /// Logo reference.
    pub logo_url: String,
    /// Contact person for the event.
    pub contact_id: ContactId,
    /// Number of tables available for concurrent meetings.
    pub table_capacity: u32,
    /// Length of every meeting in minutes.
    pub meeting_duration_minutes: u32,
    /// Start of the mandatory break.
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "12:00")]
    pub break_start: NaiveTime,
    /// End of the mandatory break.
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "13:00")]
    pub break_end: NaiveTime,
}

/// Editable fields of an [`Event`].
#[derive(Debug, Clone)]
pub struct EventDraft {
    /// Public title.
    pub description: String,
    /// Organizing entity.
    pub organizer: String,
    /// Venue name.
    pub venue: String,
    /// Department.
    pub department: String,
    /// Street address.
    pub address: String,
    /// Website.
    pub website: String,
    /// Event day.
    pub event_date: NaiveDate,
    /// Opening time.
    pub start_time: NaiveTime,
    /// Closing time.
    pub end_time: NaiveTime,
    /// Currency code.
    pub currency: String,
    /// Logo reference.
    pub logo_url: String,
    /// Contact person.
    pub contact_id: ContactId,
    /// Number of tables.
    pub table_capacity: u32,
    /// Meeting length in minutes.
    pub meeting_duration_minutes: u32,
    /// Break start.
    pub break_start: NaiveTime,
    /// Break end.
    pub break_end: NaiveTime,
}

impl EventDraft {
    /// Validates the timing fields.
    ///
    /// The break must sit inside the opening hours; an empty break
    /// (`break_start == break_end`) means there is none.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidRequest`] describing the first
    /// violated constraint.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.description.trim().is_empty() {
            return Err(invalid("event description is required"));
        }
        if self.start_time >= self.end_time {
            return Err(invalid("start_time must be before end_time"));
        }
        if self.break_start > self.break_end {
            return Err(invalid("break_start must not be after break_end"));
        }
        if self.break_start < self.start_time || self.break_end > self.end_time {
            return Err(invalid("break must lie within the event hours"));
        }
        if self.meeting_duration_minutes == 0 {
            return Err(invalid("meeting_duration_minutes must be positive"));
        }
        if self.table_capacity == 0 {
            return Err(invalid("table_capacity must be positive"));
        }
        if !is_known_currency(&self.currency) {
            return Err(ConsoleError::InvalidRequest(format!(
                "unknown currency {}",
                self.currency
            )));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> ConsoleError {
    ConsoleError::InvalidRequest(message.to_string())
}

impl Event {
    /// Builds an event from a validated draft.
    #[must_use]
    pub fn new(id: EventId, draft: EventDraft) -> Self {
        Self {
            id,
            description: draft.description,
            organizer: draft.organizer,
            venue: draft.venue,
            department: draft.department,
            address: draft.address,
            website: draft.website,
            event_date: draft.event_date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            currency: draft.currency,
            logo_url: draft.logo_url,
            contact_id: draft.contact_id,
            table_capacity: draft.table_capacity,
            meeting_duration_minutes: draft.meeting_duration_minutes,
            break_start: draft.break_start,
            break_end: draft.break_end,
        }
    }

    /// Overwrites every editable field.
    pub fn apply(&mut self, draft: EventDraft) {
        *self = Self::new(self.id, draft);
    }

    /// Timing constraints handed to the meeting scheduler.
    #[must_use]
    pub const fn slot_window(&self) -> SlotWindow {
        SlotWindow {
            window_start: self.start_time,
            window_end: self.end_time,
            break_start: self.break_start,
            break_end: self.break_end,
            meeting_duration_minutes: self.meeting_duration_minutes,
            table_capacity: self.table_capacity,
        }
    }

    /// Companies may register up to and including the event day.
    #[must_use]
    pub fn accepts_registrations(&self, today: NaiveDate) -> bool {
        self.event_date >= today
    }

    /// Attendance can be cancelled until the day before the event.
    #[must_use]
    pub fn allows_cancellation(&self, today: NaiveDate) -> bool {
        self.event_date
            .pred_opt()
            .is_some_and(|day_before| today <= day_before)
    }
}

impl Record for Event {
    type Id = EventId;
    const COLLECTION: &'static str = "event";

    fn id(&self) -> EventId {
        self.id
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn time(h: u32, m: u32) -> NaiveTime {
        let Some(t) = NaiveTime::from_hms_opt(h, m, 0) else {
            panic!("valid time");
        };
        t
    }

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        let Some(day) = NaiveDate::from_ymd_opt(y, m, d) else {
            panic!("valid date");
        };
        day
    }

    pub(crate) fn sample_draft() -> EventDraft {
        EventDraft {
            description: "Rueda de Negocios Tecnológica".to_string(),
            organizer: "Cámara de Comercio".to_string(),
            venue: "Centro de Convenciones".to_string(),
            department: "La Paz".to_string(),
            address: "Calle 24 #38-47".to_string(),
            website: "https://example.org".to_string(),
            event_date: date(2030, 3, 15),
            start_time: time(8, 0),
            end_time: time(17, 0),
            currency: "BS".to_string(),
            logo_url: String::new(),
            contact_id: ContactId::new(1),
            table_capacity: 10,
            meeting_duration_minutes: 20,
            break_start: time(12, 0),
            break_end: time(13, 0),
        }
    }

    #[test]
    fn sample_draft_is_valid() {
        assert!(sample_draft().validate().is_ok());
    }

    #[test]
    fn rejects_break_outside_hours() {
        let mut draft = sample_draft();
        draft.break_start = time(7, 0);
        assert!(draft.validate().is_err());

        let mut draft = sample_draft();
        draft.break_end = time(17, 30);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn rejects_inverted_window_and_zero_values() {
        let mut draft = sample_draft();
        draft.end_time = time(8, 0);
        assert!(draft.validate().is_err());

        let mut draft = sample_draft();
        draft.meeting_duration_minutes = 0;
        assert!(draft.validate().is_err());

        let mut draft = sample_draft();
        draft.table_capacity = 0;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn empty_break_is_allowed() {
        let mut draft = sample_draft();
        draft.break_start = time(8, 0);
        draft.break_end = time(8, 0);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn registration_and_cancellation_deadlines() {
        let event = Event::new(EventId::new(1), sample_draft());

        assert!(event.accepts_registrations(date(2030, 3, 15)));
        assert!(!event.accepts_registrations(date(2030, 3, 16)));

        assert!(event.allows_cancellation(date(2030, 3, 14)));
        assert!(!event.allows_cancellation(date(2030, 3, 15)));
    }

    #[test]
    fn slot_window_mirrors_event_timing() {
        let event = Event::new(EventId::new(1), sample_draft());
        let window = event.slot_window();
        assert_eq!(window.window_start, time(8, 0));
        assert_eq!(window.break_end, time(13, 0));
        assert_eq!(window.table_capacity, 10);
        assert_eq!(window.meeting_duration_minutes, 20);
    }
}
