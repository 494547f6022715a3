//! Scheduler output and its presentation orderings.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveTime;
use serde::Serialize;
use utoipa::ToSchema;

use super::Participant;
use crate::domain::CompanyId;
use crate::domain::time_format::hhmm;

/// A pairing bound to a time slot and a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScheduledMeeting {
    /// Company earlier in the confirmed roster.
    pub first: Participant,
    /// Company later in the confirmed roster.
    pub second: Participant,
    /// Meeting start.
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "08:00")]
    pub start: NaiveTime,
    /// Meeting end, `start + duration`.
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "08:20")]
    pub end: NaiveTime,
    /// Table number, 1-based.
    pub table: u32,
}

impl ScheduledMeeting {
    /// `true` if `company` is one of the two sides.
    #[must_use]
    pub fn involves(&self, company: CompanyId) -> bool {
        self.first.company_id == company || self.second.company_id == company
    }

    /// `true` if the two `[start, end)` intervals intersect.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The meetings produced by one generation run, in the order they were
/// assigned (slot by slot, table by table).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Schedule {
    meetings: Vec<ScheduledMeeting>,
}

impl Schedule {
    /// An empty schedule.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            meetings: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, meeting: ScheduledMeeting) {
        self.meetings.push(meeting);
    }

    /// All meetings in assignment order.
    #[must_use]
    pub fn meetings(&self) -> &[ScheduledMeeting] {
        &self.meetings
    }

    /// Number of meetings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    /// `true` if nothing was scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    /// Number of distinct time slots that host at least one meeting.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.meetings
            .iter()
            .map(|m| m.start)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Meetings sorted by start time, then table.
    #[must_use]
    pub fn chronological(&self) -> Vec<&ScheduledMeeting> {
        let mut sorted: Vec<&ScheduledMeeting> = self.meetings.iter().collect();
        sorted.sort_by_key(|m| (m.start, m.table));
        sorted
    }

    /// Meetings partitioned by table number, each table sorted by start.
    #[must_use]
    pub fn by_table(&self) -> BTreeMap<u32, Vec<&ScheduledMeeting>> {
        let mut tables: BTreeMap<u32, Vec<&ScheduledMeeting>> = BTreeMap::new();
        for meeting in &self.meetings {
            tables.entry(meeting.table).or_default().push(meeting);
        }
        for meetings in tables.values_mut() {
            meetings.sort_by_key(|m| m.start);
        }
        tables
    }

    /// A company's meetings in chronological order.
    #[must_use]
    pub fn for_company(&self, company: CompanyId) -> Vec<&ScheduledMeeting> {
        let mut own: Vec<&ScheduledMeeting> =
            self.meetings.iter().filter(|m| m.involves(company)).collect();
        own.sort_by_key(|m| m.start);
        own
    }
}
