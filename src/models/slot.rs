//! Time slot model.
//!
//! The teaching week is a fixed grid: six days (Monday through Saturday)
//! times six periods, giving a universe of exactly 36 slots. The universe
//! is generated once per run and never extended; `(day, period)` uniquely
//! identifies a slot.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use serde::{Deserialize, Serialize};
use std::fmt;

/// Days of the teaching week, in week order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// All teaching days, Monday first.
    pub const ALL: [DayOfWeek; 6] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Position within the week (Monday = 0), used for sorting.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Full English day name.
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Teaching periods per day.
pub const PERIODS_PER_DAY: u8 = 6;

/// Size of the weekly slot universe (6 days x 6 periods).
pub const SLOT_COUNT: usize = DayOfWeek::ALL.len() * PERIODS_PER_DAY as usize;

/// Identifies a slot within the week.
pub type SlotKey = (DayOfWeek, u8);

/// A single teaching period on a specific day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Teaching day.
    pub day: DayOfWeek,
    /// Period number, 1-based.
    pub period: u8,
    /// Period start ("HH:MM").
    pub start_time: String,
    /// Period end ("HH:MM").
    pub end_time: String,
}

/// Wall-clock bounds for each period. Periods 3 and 5 follow the
/// morning break and lunch respectively.
const PERIOD_TIMES: [(&str, &str); PERIODS_PER_DAY as usize] = [
    ("09:00", "10:00"),
    ("10:00", "11:00"),
    ("11:30", "12:30"),
    ("12:30", "13:30"),
    ("14:30", "15:30"),
    ("15:30", "16:30"),
];

impl TimeSlot {
    /// Creates the slot for a day and 1-based period.
    ///
    /// Periods outside `1..=6` are clamped into range.
    pub fn new(day: DayOfWeek, period: u8) -> Self {
        let period = period.clamp(1, PERIODS_PER_DAY);
        let (start, end) = PERIOD_TIMES[period as usize - 1];
        Self {
            day,
            period,
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    /// The `(day, period)` identity of this slot.
    #[inline]
    pub fn key(&self) -> SlotKey {
        (self.day, self.period)
    }

    /// Generates the full weekly universe of 36 slots, in week order.
    pub fn universe() -> Vec<TimeSlot> {
        let mut slots = Vec::with_capacity(SLOT_COUNT);
        for day in DayOfWeek::ALL {
            for period in 1..=PERIODS_PER_DAY {
                slots.push(TimeSlot::new(day, period));
            }
        }
        slots
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} P{} ({}-{})",
            self.day, self.period, self.start_time, self.end_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_universe_size_and_uniqueness() {
        let universe = TimeSlot::universe();
        assert_eq!(universe.len(), SLOT_COUNT);
        assert_eq!(SLOT_COUNT, 36);

        let keys: HashSet<SlotKey> = universe.iter().map(|s| s.key()).collect();
        assert_eq!(keys.len(), 36);
    }

    #[test]
    fn test_period_times() {
        let slot = TimeSlot::new(DayOfWeek::Monday, 1);
        assert_eq!(slot.start_time, "09:00");
        assert_eq!(slot.end_time, "10:00");

        // Period 3 starts after the morning break
        let slot = TimeSlot::new(DayOfWeek::Friday, 3);
        assert_eq!(slot.start_time, "11:30");
        assert_eq!(slot.end_time, "12:30");
    }

    #[test]
    fn test_period_clamping() {
        assert_eq!(TimeSlot::new(DayOfWeek::Monday, 0).period, 1);
        assert_eq!(TimeSlot::new(DayOfWeek::Monday, 99).period, PERIODS_PER_DAY);
    }

    #[test]
    fn test_day_ordering() {
        assert!(DayOfWeek::Monday.index() < DayOfWeek::Saturday.index());
        assert_eq!(DayOfWeek::ALL[0], DayOfWeek::Monday);
        assert_eq!(DayOfWeek::ALL[5], DayOfWeek::Saturday);
    }

    #[test]
    fn test_display() {
        let slot = TimeSlot::new(DayOfWeek::Wednesday, 5);
        assert_eq!(slot.to_string(), "Wednesday P5 (14:30-15:30)");
    }
}
