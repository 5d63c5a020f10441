use std::collections::HashMap;

use crate::model::meeting::{AttendeeStatus, ConfirmedMeeting, MeetingSuggestion, MemberStatus};
use crate::model::member::Member;
use crate::model::Id;

/// A forced status for one member, e.g. Running Late with an ETA.
#[derive(Debug, Clone)]
pub struct StatusOverride {
    pub status: AttendeeStatus,
    pub eta: Option<String>,
}

/// Per-name status override table consulted before the default derivation.
/// The surrounding app decides what goes in here (a demo build might mark
/// one member as running late); the core just applies it.
#[derive(Debug, Clone, Default)]
pub struct StatusOverrides {
    by_name: HashMap<String, StatusOverride>,
}

impl StatusOverrides {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, status: AttendeeStatus, eta: Option<String>) {
        self.by_name
            .insert(name.to_string(), StatusOverride { status, eta });
    }

    pub fn get(&self, name: &str) -> Option<&StatusOverride> {
        self.by_name.get(name)
    }
}

/// Materializes a confirmed meeting from one suggestion.
///
/// Every roster member gets a status row, in roster order: an override
/// entry wins outright; otherwise members named in the suggestion are
/// Confirmed and everyone else is Pending. A suggestion name with no
/// matching roster member matches nothing (matching is by name, and the
/// roster may have changed since the suggestion was computed).
pub fn confirm_meeting(
    suggestion: &MeetingSuggestion,
    roster: &[Member],
    overrides: &StatusOverrides,
) -> ConfirmedMeeting {
    let attendees = roster
        .iter()
        .map(|member| match overrides.get(&member.name) {
            Some(forced) => MemberStatus {
                name: member.name.clone(),
                status: forced.status,
                eta: forced.eta.clone(),
            },
            None => {
                let was_available = suggestion
                    .available_members
                    .iter()
                    .any(|name| name == &member.name);
                MemberStatus {
                    name: member.name.clone(),
                    status: if was_available {
                        AttendeeStatus::Confirmed
                    } else {
                        AttendeeStatus::Pending
                    },
                    eta: None,
                }
            }
        })
        .collect();

    ConfirmedMeeting {
        id: Id::generate(),
        day: suggestion.day_label().to_string(),
        time_range: suggestion.time_range(),
        attendees,
        confirmed_at: None,
    }
}
