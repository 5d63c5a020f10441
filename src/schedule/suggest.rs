use std::collections::{HashMap, HashSet};

use crate::error::{HuddleError, HuddleResult};
use crate::model::member::Member;
use crate::model::meeting::MeetingSuggestion;
use crate::model::slot::{SlotId, DAYS_PER_WEEK, SLOTS_PER_DAY};
use crate::model::Id;
use crate::validation;

/// How many ranked windows the calling layer shows by default. The engine
/// itself takes an explicit limit.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Ranks candidate meeting windows of `duration_slots` contiguous slots
/// across the week, best-attended first.
///
/// A window qualifies when at least one member is free for every slot in
/// it; windows never cross a day boundary. Ties rank chronologically
/// (day, then start slot), so identical input always produces identical
/// output. At most `limit` suggestions are returned.
///
/// Refuses to rank on incomplete data: any member with an empty
/// availability set yields [`HuddleError::NoAvailabilityData`]. Neither
/// condition is fatal to the caller; both simply mean "no suggestions".
pub fn find_meeting_times(
    members: &[Member],
    duration_slots: u32,
    limit: usize,
) -> HuddleResult<Vec<MeetingSuggestion>> {
    let duration = validation::duration_in_range(duration_slots)? as u8;

    if members.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(missing) = members.iter().find(|m| m.availability.is_empty()) {
        return Err(HuddleError::NoAvailabilityData {
            member: missing.name.clone(),
        });
    }

    // One pass over every availability set, then each window intersects
    // ready-made per-slot sets instead of rescanning members.
    let mut free_at: HashMap<SlotId, HashSet<Id<Member>>> = HashMap::new();
    for member in members {
        for &slot in &member.availability {
            free_at.entry(slot).or_default().insert(member.id);
        }
    }

    let mut candidates = Vec::new();
    for day in 0..DAYS_PER_WEEK {
        for start in 0..=(SLOTS_PER_DAY - duration) {
            let Some(free) = window_intersection(&free_at, day, start, duration) else {
                continue;
            };

            // Names in roster order, frozen at emission time.
            let names: Vec<String> = members
                .iter()
                .filter(|m| free.contains(&m.id))
                .map(|m| m.name.clone())
                .collect();

            candidates.push(MeetingSuggestion {
                day_index: day,
                start_slot: start,
                duration_slots: u32::from(duration),
                available_count: free.len(),
                total_count: members.len(),
                available_members: names,
            });
        }
    }

    candidates.sort_by(|a, b| {
        b.available_count
            .cmp(&a.available_count)
            .then(a.day_index.cmp(&b.day_index))
            .then(a.start_slot.cmp(&b.start_slot))
    });
    candidates.truncate(limit);
    Ok(candidates)
}

/// Members free for every slot of the window, or None when nobody is.
fn window_intersection(
    free_at: &HashMap<SlotId, HashSet<Id<Member>>>,
    day: u8,
    start: u8,
    duration: u8,
) -> Option<HashSet<Id<Member>>> {
    let mut free: Option<HashSet<Id<Member>>> = None;

    for offset in 0..duration {
        let slot = SlotId {
            day,
            slot: start + offset,
        };
        let here = free_at.get(&slot)?;
        free = match free {
            None => Some(here.clone()),
            Some(acc) => Some(acc.intersection(here).copied().collect()),
        };
        if free.as_ref().map_or(false, |f| f.is_empty()) {
            return None;
        }
    }

    free.filter(|f| !f.is_empty())
}
