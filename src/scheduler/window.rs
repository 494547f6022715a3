//! Time-slot generation over an event's operating window.
//!
//! [`SlotWindow::slots`] walks a cursor from the opening time in steps of
//! one meeting duration. Whenever the next slot would touch the break the
//! cursor jumps to the end of the break without yielding anything.

use chrono::{NaiveTime, Timelike};

/// Venue timing constraints for one event day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotWindow {
    /// Opening time; the first slot starts here.
    pub window_start: NaiveTime,
    /// Closing time; no slot ends after it.
    pub window_end: NaiveTime,
    /// Start of the break. Equal to `break_end` when there is no break.
    pub break_start: NaiveTime,
    /// End of the break.
    pub break_end: NaiveTime,
    /// Fixed length of every meeting, in minutes.
    pub meeting_duration_minutes: u32,
    /// Maximum number of meetings running in the same slot.
    pub table_capacity: u32,
}

/// A half-open `[start, end)` meeting interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Slot {
    /// Slot start.
    pub start: NaiveTime,
    /// Slot end, `start + meeting duration`.
    pub end: NaiveTime,
}

impl SlotWindow {
    /// `true` if the break window is non-empty.
    #[must_use]
    pub fn has_break(&self) -> bool {
        self.break_start < self.break_end
    }

    /// `true` if `[start, end)` intersects `[break_start, break_end)`.
    #[must_use]
    pub fn overlaps_break(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.has_break() && start < self.break_end && end > self.break_start
    }

    /// Iterates the meeting slots of the day in chronological order.
    ///
    /// Yields nothing when the duration is zero or the window is shorter
    /// than one meeting.
    #[must_use]
    pub fn slots(&self) -> Slots {
        Slots {
            cursor: minute_of_day(self.window_start),
            window_end: minute_of_day(self.window_end),
            break_start: minute_of_day(self.break_start),
            break_end: minute_of_day(self.break_end),
            duration: self.meeting_duration_minutes,
        }
    }
}

/// Iterator returned by [`SlotWindow::slots`].
#[derive(Debug, Clone)]
pub struct Slots {
    cursor: u32,
    window_end: u32,
    break_start: u32,
    break_end: u32,
    duration: u32,
}

impl Slots {
    fn touches_break(&self, start: u32, end: u32) -> bool {
        self.break_start < self.break_end && start < self.break_end && end > self.break_start
    }
}

impl Iterator for Slots {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        if self.duration == 0 {
            return None;
        }
        loop {
            let end = self.cursor.checked_add(self.duration)?;
            if end > self.window_end {
                return None;
            }
            if self.touches_break(self.cursor, end) {
                // cursor < break_end here, so this always moves forward
                self.cursor = self.break_end;
                continue;
            }
            let slot = Slot {
                start: from_minutes(self.cursor)?,
                end: from_minutes(end)?,
            };
            self.cursor = end;
            return Some(slot);
        }
    }
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

fn from_minutes(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_num_seconds_from_midnight_opt(minutes.checked_mul(60)?, 0)
}
