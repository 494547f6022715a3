//! Generated schedule views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::EventId;
use crate::scheduler::{Participant, ScheduledMeeting};
use crate::service::GeneratedSchedule;

/// How the meetings of a schedule are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleView {
    /// One list sorted by start time, then table.
    #[default]
    Chronological,
    /// One agenda per table.
    ByTable,
}

/// Query for `GET /events/{id}/schedule`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScheduleQuery {
    /// Layout of the response. Defaults to `chronological`.
    #[serde(default)]
    pub view: ScheduleView,
}

/// The meetings held at one table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TableAgenda {
    /// Table number, 1-based.
    pub table: u32,
    /// Meetings at this table by start time.
    pub meetings: Vec<ScheduledMeeting>,
}

/// Response body for the schedule endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScheduleResponse {
    /// Identifier of the generation run.
    pub schedule_id: Uuid,
    /// Event the schedule belongs to.
    pub event_id: EventId,
    /// When it was generated.
    pub generated_at: DateTime<Utc>,
    /// Companies scheduled.
    pub participants: Vec<Participant>,
    /// Total number of meetings.
    pub meeting_count: usize,
    /// Number of time slots in use.
    pub slot_count: usize,
    /// Layout of this response.
    pub view: ScheduleView,
    /// Meetings in chronological order, for the `chronological` view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meetings: Option<Vec<ScheduledMeeting>>,
    /// Per-table agendas, for the `by_table` view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<TableAgenda>>,
}

impl ScheduleResponse {
    /// Lays out `generated` as `view`.
    #[must_use]
    pub fn render(generated: GeneratedSchedule, view: ScheduleView) -> Self {
        let schedule = &generated.schedule;
        let (meetings, tables) = match view {
            ScheduleView::Chronological => (
                Some(schedule.chronological().into_iter().cloned().collect()),
                None,
            ),
            ScheduleView::ByTable => (
                None,
                Some(
                    schedule
                        .by_table()
                        .into_iter()
                        .map(|(table, meetings)| TableAgenda {
                            table,
                            meetings: meetings.into_iter().cloned().collect(),
                        })
                        .collect(),
                ),
            ),
        };

        Self {
            schedule_id: generated.schedule_id,
            event_id: generated.event_id,
            generated_at: generated.generated_at,
            meeting_count: schedule.len(),
            slot_count: schedule.slot_count(),
            participants: generated.participants,
            view,
            meetings,
            tables,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::domain::CompanyId;
    use crate::scheduler::{SlotWindow, generate};

    fn generated() -> GeneratedSchedule {
        let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default();
        let window = SlotWindow {
            window_start: start,
            window_end: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            break_start: start,
            break_end: start,
            meeting_duration_minutes: 20,
            table_capacity: 2,
        };
        let participants: Vec<Participant> = (1..=4)
            .map(|id| Participant {
                company_id: CompanyId::new(id),
                display_name: format!("Company {id}"),
                logo_ref: None,
            })
            .collect();
        GeneratedSchedule {
            schedule_id: Uuid::new_v4(),
            event_id: EventId::new(1),
            generated_at: Utc::now(),
            schedule: generate(&window, &participants),
            participants,
        }
    }

    #[test]
    fn chronological_view_lists_meetings_only() {
        let response = ScheduleResponse::render(generated(), ScheduleView::Chronological);
        assert_eq!(response.meeting_count, 6);
        assert_eq!(response.slot_count, 3);
        assert_eq!(response.meetings.map(|m| m.len()), Some(6));
        assert!(response.tables.is_none());
    }

    #[test]
    fn by_table_view_groups_per_table() {
        let response = ScheduleResponse::render(generated(), ScheduleView::ByTable);
        assert!(response.meetings.is_none());
        let tables = response.tables.unwrap_or_default();
        let numbers: Vec<u32> = tables.iter().map(|t| t.table).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert!(tables.iter().all(|t| t.meetings.len() == 3));
    }

    #[test]
    fn view_query_defaults_to_chronological() {
        let default: Result<ScheduleQuery, _> = serde_json::from_str("{}");
        assert!(matches!(default, Ok(q) if q.view == ScheduleView::Chronological));
        let by_table: Result<ScheduleQuery, _> = serde_json::from_str(r#"{"view":"by_table"}"#);
        assert!(matches!(by_table, Ok(q) if q.view == ScheduleView::ByTable));
    }
}
