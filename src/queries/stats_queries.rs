use std::collections::BTreeMap;

use rusqlite::Connection;

use crate::db::member_repo;
use crate::error::HuddleResult;
use crate::model::{Group, Id, SlotId};

#[derive(Debug, Clone)]
pub struct GroupStats {
    pub member_count: usize,
    /// Members who have not marked a single slot yet; suggestions stay
    /// unavailable until this reaches zero.
    pub members_without_availability: usize,
    pub marked_slots: usize,
    /// The slot the most members marked free, with its count. Ties resolve
    /// to the chronologically first slot.
    pub busiest_slot: Option<(SlotId, usize)>,
}

pub fn group_stats(conn: &Connection, group_id: Id<Group>) -> HuddleResult<GroupStats> {
    let members = member_repo::find_by_group(conn, group_id)?;

    let mut per_slot: BTreeMap<SlotId, usize> = BTreeMap::new();
    let mut marked_slots = 0usize;
    let mut without_availability = 0usize;

    for member in &members {
        if member.availability.is_empty() {
            without_availability += 1;
        }
        for &slot in &member.availability {
            *per_slot.entry(slot).or_insert(0) += 1;
            marked_slots += 1;
        }
    }

    // BTreeMap iterates chronologically, so strict greater-than keeps the
    // earliest slot on ties.
    let mut busiest_slot: Option<(SlotId, usize)> = None;
    for (&slot, &count) in &per_slot {
        if busiest_slot.map_or(true, |(_, best)| count > best) {
            busiest_slot = Some((slot, count));
        }
    }

    Ok(GroupStats {
        member_count: members.len(),
        members_without_availability: without_availability,
        marked_slots,
        busiest_slot,
    })
}
