use serde::{Deserialize, Serialize};

use crate::error::{HuddleError, HuddleResult};

pub const SLOTS_PER_HOUR: u8 = 2;
pub const SLOT_MINUTES: u8 = 60 / SLOTS_PER_HOUR;
pub const DAY_START_HOUR: u8 = 8;
pub const DAY_END_HOUR: u8 = 24;
pub const SLOTS_PER_DAY: u8 = (DAY_END_HOUR - DAY_START_HOUR) * SLOTS_PER_HOUR;
pub const DAYS_PER_WEEK: u8 = 7;

pub const DAY_NAMES: [&str; DAYS_PER_WEEK as usize] =
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One half-hour cell of the weekly grid: day 0 = Monday, slot 0 = 08:00.
/// Ordered by (day, slot), so a `BTreeSet<SlotId>` iterates chronologically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SlotId {
    pub day: u8,
    pub slot: u8,
}

impl SlotId {
    /// Range-checked constructor.
    pub fn new(day: u8, slot: u8) -> HuddleResult<Self> {
        if day >= DAYS_PER_WEEK || slot >= SLOTS_PER_DAY {
            return Err(HuddleError::SlotOutOfRange { day, slot });
        }
        Ok(Self { day, slot })
    }

    pub fn day_name(&self) -> &'static str {
        day_name(self.day)
    }
}

pub fn day_name(day: u8) -> &'static str {
    DAY_NAMES.get(usize::from(day)).copied().unwrap_or("?")
}

/// Parses a day name ("Mon".."Sun", case-insensitive) to its index.
pub fn parse_day(name: &str) -> Option<u8> {
    DAY_NAMES
        .iter()
        .position(|d| d.eq_ignore_ascii_case(name.trim()))
        .map(|i| i as u8)
}

/// Wall-clock label for a slot index. Also accepts `SLOTS_PER_DAY` itself so
/// an exclusive window end renders as "24:00".
pub fn slot_to_clock(slot: u8) -> String {
    let hour = DAY_START_HOUR + slot / SLOTS_PER_HOUR;
    let minute = u32::from(slot % SLOTS_PER_HOUR) * u32::from(SLOT_MINUTES);
    format!("{:02}:{:02}", hour, minute)
}

/// Exact inverse of [`slot_to_clock`] on the in-range grid. Rejects times
/// outside the daily window and minutes off the slot boundary.
pub fn clock_to_slot(value: &str) -> HuddleResult<u8> {
    let invalid = || HuddleError::InvalidClockTime {
        value: value.to_string(),
    };

    let (hour_str, minute_str) = value.trim().split_once(':').ok_or_else(invalid)?;
    let hour: u8 = hour_str.parse().map_err(|_| invalid())?;
    let minute: u8 = minute_str.parse().map_err(|_| invalid())?;

    if hour < DAY_START_HOUR || hour >= DAY_END_HOUR || minute % SLOT_MINUTES != 0 || minute >= 60 {
        return Err(invalid());
    }

    Ok((hour - DAY_START_HOUR) * SLOTS_PER_HOUR + minute / SLOT_MINUTES)
}

/// "HH:MM - HH:MM" label for a window of `duration_slots` starting at
/// `start_slot`. The end bound is exclusive, so a window ending at the last
/// slot reads "... - 24:00".
pub fn time_range_label(start_slot: u8, duration_slots: u32) -> String {
    let end = u32::from(start_slot) + duration_slots;
    format!(
        "{} - {}",
        slot_to_clock(start_slot),
        slot_to_clock(end.min(u32::from(SLOTS_PER_DAY)) as u8)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_32_slots_per_day() {
        assert_eq!(SLOTS_PER_DAY, 32);
    }

    #[test]
    fn first_slot_is_eight_oclock() {
        assert_eq!(slot_to_clock(0), "08:00");
        assert_eq!(slot_to_clock(1), "08:30");
    }

    #[test]
    fn last_slot_is_half_past_eleven() {
        assert_eq!(slot_to_clock(31), "23:30");
    }

    #[test]
    fn exclusive_end_renders_midnight() {
        assert_eq!(slot_to_clock(SLOTS_PER_DAY), "24:00");
    }

    #[test]
    fn clock_round_trips_every_slot() {
        for slot in 0..SLOTS_PER_DAY {
            assert_eq!(clock_to_slot(&slot_to_clock(slot)).unwrap(), slot);
        }
    }

    #[test]
    fn clock_rejects_before_window() {
        assert!(clock_to_slot("07:30").is_err());
    }

    #[test]
    fn clock_rejects_off_boundary_minutes() {
        assert!(clock_to_slot("08:15").is_err());
    }

    #[test]
    fn clock_rejects_garbage() {
        assert!(clock_to_slot("noon").is_err());
        assert!(clock_to_slot("8").is_err());
        assert!(clock_to_slot("25:00").is_err());
    }

    #[test]
    fn slot_ids_order_chronologically() {
        let a = SlotId::new(0, 31).unwrap();
        let b = SlotId::new(1, 0).unwrap();
        assert!(a < b);
    }

    #[test]
    fn slot_id_rejects_out_of_range() {
        assert!(SlotId::new(7, 0).is_err());
        assert!(SlotId::new(0, 32).is_err());
    }

    #[test]
    fn day_names_parse_case_insensitively() {
        assert_eq!(parse_day("mon"), Some(0));
        assert_eq!(parse_day("SUN"), Some(6));
        assert_eq!(parse_day("Noday"), None);
    }

    #[test]
    fn range_label_spans_the_window() {
        assert_eq!(time_range_label(0, 2), "08:00 - 09:00");
        assert_eq!(time_range_label(30, 2), "23:00 - 24:00");
    }
}
