use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::slot::{day_name, time_range_label};

/// A ranked candidate window: everyone in `available_members` is free for
/// the whole window. Member names are captured when the suggestion is
/// computed; a later rename is not reflected here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSuggestion {
    pub day_index: u8,
    pub start_slot: u8,
    pub duration_slots: u32,
    pub available_count: usize,
    pub total_count: usize,
    pub available_members: Vec<String>,
}

impl MeetingSuggestion {
    pub fn day_label(&self) -> &'static str {
        day_name(self.day_index)
    }

    pub fn time_range(&self) -> String {
        time_range_label(self.start_slot, self.duration_slots)
    }
}

/// Where each attendee stands on a confirmed meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendeeStatus {
    Confirmed,
    Pending,
    RunningLate,
}

impl AttendeeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendeeStatus::Confirmed => "Confirmed",
            AttendeeStatus::Pending => "Pending",
            AttendeeStatus::RunningLate => "Running Late",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Confirmed" => Some(AttendeeStatus::Confirmed),
            "Pending" => Some(AttendeeStatus::Pending),
            "Running Late" => Some(AttendeeStatus::RunningLate),
            _ => None,
        }
    }
}

/// One roster member's row on a confirmed meeting. `eta` carries free text
/// such as "ETA: 14:08" when the member is running late.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStatus {
    pub name: String,
    pub status: AttendeeStatus,
    pub eta: Option<String>,
}

/// A materialized confirmation of one suggestion. Immutable once created;
/// changing anything means confirming again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmedMeeting {
    pub id: Id<ConfirmedMeeting>,
    pub day: String,
    pub time_range: String,
    pub attendees: Vec<MemberStatus>,
    /// Set by the store when the record is read back; a freshly derived
    /// confirmation has no timestamp yet.
    pub confirmed_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_labels_follow_the_grid() {
        let s = MeetingSuggestion {
            day_index: 2,
            start_slot: 4,
            duration_slots: 2,
            available_count: 1,
            total_count: 1,
            available_members: vec!["Alice".into()],
        };
        assert_eq!(s.day_label(), "Wed");
        assert_eq!(s.time_range(), "10:00 - 11:00");
    }

    #[test]
    fn status_labels_round_trip() {
        for status in [
            AttendeeStatus::Confirmed,
            AttendeeStatus::Pending,
            AttendeeStatus::RunningLate,
        ] {
            assert_eq!(AttendeeStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(AttendeeStatus::from_label("On Fire"), None);
    }
}
