//! Meeting-slot scheduler.
//!
//! Pairs confirmed companies into one-on-one meetings across a fixed set
//! of tables and time slots. The algorithm is a single greedy pass:
//!
//! 1. Every unordered pair of distinct companies enters a [`PairingPool`]
//!    in roster order.
//! 2. [`SlotWindow::slots`] walks the day, skipping the break.
//! 3. For each slot, tables `1..=capacity` are filled with the first pool
//!    pairing whose companies are still free in that slot.
//!
//! A pairing is scheduled at most once. Slots are consumed even when no
//! pairing fits, and earlier slots are never repacked. Degenerate input
//! yields an empty [`Schedule`] rather than an error.

pub mod pairing;
pub mod schedule;
pub mod window;

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::CompanyId;

pub use pairing::{Pairing, PairingPool};
pub use schedule::{Schedule, ScheduledMeeting};
pub use window::{Slot, SlotWindow, Slots};

/// A company with confirmed attendance, as seen by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Participant {
    /// Company identifier.
    pub company_id: CompanyId,
    /// Name shown on the agenda.
    pub display_name: String,
    /// Logo reference, if the company has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_ref: Option<String>,
}

/// Collapses repeated company ids, keeping the first occurrence.
fn roster(participants: &[Participant]) -> Vec<&Participant> {
    let mut seen = HashSet::with_capacity(participants.len());
    participants
        .iter()
        .filter(|p| seen.insert(p.company_id))
        .collect()
}

/// Builds the meeting schedule for `participants` within `window`.
///
/// Runs to completion synchronously; the same input always produces the
/// same schedule.
#[must_use]
pub fn generate(window: &SlotWindow, participants: &[Participant]) -> Schedule {
    let roster = roster(participants);
    let mut schedule = Schedule::new();
    if roster.len() < 2 || window.table_capacity == 0 {
        return schedule;
    }

    let mut pool = PairingPool::round_robin(roster.len());
    let mut slots_used = 0_usize;

    for slot in window.slots() {
        if pool.is_empty() {
            break;
        }
        slots_used += 1;

        let mut busy = BTreeSet::new();
        for table in 1..=window.table_capacity {
            let Some(pairing) = pool.take_first_eligible(&busy) else {
                break;
            };
            let (Some(first), Some(second)) = (roster.get(pairing.first), roster.get(pairing.second))
            else {
                break;
            };
            busy.insert(pairing.first);
            busy.insert(pairing.second);
            schedule.push(ScheduledMeeting {
                first: (*first).clone(),
                second: (*second).clone(),
                start: slot.start,
                end: slot.end,
                table,
            });
        }
    }

    tracing::debug!(
        participants = roster.len(),
        meetings = schedule.len(),
        slots = slots_used,
        unscheduled = pool.len(),
        "schedule generated"
    );
    schedule
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::collections::BTreeMap;

    fn t(h: u32, m: u32) -> NaiveTime {
        let Some(time) = NaiveTime::from_hms_opt(h, m, 0) else {
            panic!("valid time");
        };
        time
    }

    fn companies(count: u32) -> Vec<Participant> {
        (1..=count)
            .map(|id| Participant {
                company_id: CompanyId::new(id),
                display_name: format!("Company {id}"),
                logo_ref: None,
            })
            .collect()
    }

    fn no_break(start: NaiveTime, end: NaiveTime, duration: u32, tables: u32) -> SlotWindow {
        SlotWindow {
            window_start: start,
            window_end: end,
            break_start: start,
            break_end: start,
            meeting_duration_minutes: duration,
            table_capacity: tables,
        }
    }

    fn ids(meeting: &ScheduledMeeting) -> (u32, u32) {
        (meeting.first.company_id.get(), meeting.second.company_id.get())
    }

    fn assert_invariants(window: &SlotWindow, schedule: &Schedule) {
        let mut pairs = HashSet::new();
        for (i, a) in schedule.meetings().iter().enumerate() {
            let (x, y) = ids(a);
            assert_ne!(x, y, "company paired with itself");
            assert!(pairs.insert((x.min(y), x.max(y))), "pair {x}-{y} scheduled twice");

            assert!(a.start >= window.window_start);
            assert!(a.end <= window.window_end);
            assert!(a.table >= 1 && a.table <= window.table_capacity);
            assert!(!window.overlaps_break(a.start, a.end), "meeting inside break");

            for b in schedule.meetings().iter().skip(i + 1) {
                if !a.overlaps(b) {
                    continue;
                }
                assert_ne!(a.table, b.table, "table double-booked");
                for company in [a.first.company_id, a.second.company_id] {
                    assert!(!b.involves(company), "company {company} double-booked");
                }
            }
        }
    }

    #[test]
    fn fewer_than_two_companies_yields_empty_schedule() {
        let window = no_break(t(8, 0), t(17, 0), 20, 5);
        assert!(generate(&window, &[]).is_empty());
        assert!(generate(&window, &companies(1)).is_empty());
    }

    #[test]
    fn duplicate_confirmations_count_once() {
        let window = no_break(t(8, 0), t(17, 0), 20, 5);
        let mut roster = companies(1);
        roster.extend(companies(1));
        assert!(generate(&window, &roster).is_empty());

        let mut roster = companies(3);
        roster.extend(companies(2));
        let schedule = generate(&window, &roster);
        assert_eq!(schedule.len(), 3);
        assert_invariants(&window, &schedule);
    }

    #[test]
    fn four_companies_two_tables_one_hour() {
        let window = no_break(t(8, 0), t(9, 0), 20, 2);
        let schedule = generate(&window, &companies(4));

        let assigned: Vec<(NaiveTime, u32, (u32, u32))> = schedule
            .meetings()
            .iter()
            .map(|m| (m.start, m.table, ids(m)))
            .collect();
        assert_eq!(
            assigned,
            vec![
                (t(8, 0), 1, (1, 2)),
                (t(8, 0), 2, (3, 4)),
                (t(8, 20), 1, (1, 3)),
                (t(8, 20), 2, (2, 4)),
                (t(8, 40), 1, (1, 4)),
                (t(8, 40), 2, (2, 3)),
            ]
        );
        for id in 1..=4 {
            assert_eq!(schedule.for_company(CompanyId::new(id)).len(), 3);
        }
        assert_invariants(&window, &schedule);
    }

    #[test]
    fn break_covering_whole_window_yields_empty_schedule() {
        let window = SlotWindow {
            break_start: t(8, 0),
            break_end: t(9, 0),
            ..no_break(t(8, 0), t(9, 0), 20, 2)
        };
        assert!(generate(&window, &companies(4)).is_empty());
    }

    #[test]
    fn two_companies_exact_window() {
        let window = no_break(t(8, 0), t(8, 20), 20, 3);
        let schedule = generate(&window, &companies(2));
        assert_eq!(schedule.len(), 1);

        let Some(meeting) = schedule.meetings().first() else {
            panic!("expected one meeting");
        };
        assert_eq!(meeting.table, 1);
        assert_eq!(meeting.start, t(8, 0));
        assert_eq!(meeting.end, t(8, 20));
    }

    #[test]
    fn three_companies_single_table() {
        let window = no_break(t(8, 0), t(9, 0), 15, 1);
        let schedule = generate(&window, &companies(3));
        let starts: Vec<NaiveTime> = schedule.meetings().iter().map(|m| m.start).collect();
        assert_eq!(starts, vec![t(8, 0), t(8, 15), t(8, 30)]);
        assert!(schedule.meetings().iter().all(|m| m.table == 1));
        assert_invariants(&window, &schedule);
    }

    #[test]
    fn spare_tables_stay_empty_when_pairs_conflict() {
        // Three companies can only ever hold one meeting per slot.
        let window = no_break(t(8, 0), t(12, 0), 30, 5);
        let schedule = generate(&window, &companies(3));
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.slot_count(), 3);
        assert!(schedule.meetings().iter().all(|m| m.table == 1));
    }

    #[test]
    fn short_window_leaves_pairs_unscheduled() {
        let window = no_break(t(8, 0), t(8, 40), 20, 1);
        let schedule = generate(&window, &companies(4));
        assert_eq!(schedule.len(), 2);
        assert_invariants(&window, &schedule);
    }

    #[test]
    fn zero_capacity_or_duration_yields_empty_schedule() {
        assert!(generate(&no_break(t(8, 0), t(17, 0), 20, 0), &companies(4)).is_empty());
        assert!(generate(&no_break(t(8, 0), t(17, 0), 0, 4), &companies(4)).is_empty());
        assert!(generate(&no_break(t(8, 0), t(8, 10), 20, 4), &companies(4)).is_empty());
    }

    #[test]
    fn meetings_resume_after_break() {
        let window = SlotWindow {
            break_start: t(8, 30),
            break_end: t(9, 0),
            ..no_break(t(8, 0), t(10, 0), 20, 1)
        };
        let schedule = generate(&window, &companies(3));
        let starts: Vec<NaiveTime> = schedule.meetings().iter().map(|m| m.start).collect();
        assert_eq!(starts, vec![t(8, 0), t(9, 0), t(9, 20)]);
        assert_invariants(&window, &schedule);
    }

    #[test]
    fn invariants_hold_across_configurations() {
        let breaks = [(t(8, 0), t(8, 0)), (t(9, 10), t(9, 50)), (t(8, 0), t(8, 45))];
        for size in 0..9 {
            let roster = companies(size);
            for tables in 1..5 {
                for duration in [10, 15, 20, 45] {
                    for (break_start, break_end) in breaks {
                        let window = SlotWindow {
                            break_start,
                            break_end,
                            ..no_break(t(8, 0), t(11, 0), duration, tables)
                        };
                        let schedule = generate(&window, &roster);
                        assert_invariants(&window, &schedule);

                        let max_pairs = (size * size.saturating_sub(1) / 2) as usize;
                        assert!(schedule.len() <= max_pairs);
                    }
                }
            }
        }
    }

    #[test]
    fn tables_in_a_slot_are_numbered_without_gaps() {
        let mut roster = companies(6);
        roster.extend(companies(3));
        for tables in 1..5 {
            let window = no_break(t(8, 0), t(12, 0), 20, tables);
            let schedule = generate(&window, &roster);
            let mut per_slot: BTreeMap<NaiveTime, Vec<u32>> = BTreeMap::new();
            for meeting in schedule.meetings() {
                per_slot.entry(meeting.start).or_default().push(meeting.table);
            }
            for used in per_slot.values_mut() {
                used.sort_unstable();
                let expected: Vec<u32> = (1..).take(used.len()).collect();
                assert_eq!(*used, expected, "gap in table numbering");
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let window = no_break(t(8, 0), t(17, 0), 20, 4);
        let roster = companies(7);
        assert_eq!(generate(&window, &roster), generate(&window, &roster));
    }

    #[test]
    fn views_group_and_sort() {
        let window = no_break(t(8, 0), t(9, 0), 20, 2);
        let schedule = generate(&window, &companies(4));

        let chrono_view = schedule.chronological();
        assert!(chrono_view.windows(2).all(|w| match w {
            [a, b] => (a.start, a.table) <= (b.start, b.table),
            _ => true,
        }));

        let tables = schedule.by_table();
        assert_eq!(tables.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        for meetings in tables.values() {
            assert_eq!(meetings.len(), 3);
            assert!(meetings.windows(2).all(|w| match w {
                [a, b] => a.start < b.start,
                _ => true,
            }));
        }
    }
}
