use std::collections::BTreeSet;

use rusqlite::Connection;

use crate::db::{availability_repo, member_repo};
use crate::error::{HuddleError, HuddleResult};
use crate::model::{Id, Member, SlotId};

/// Toggles one grid cell for a member. Returns the slot and whether it is
/// marked free after the toggle.
pub fn toggle_slot(
    conn: &Connection,
    member_id: Id<Member>,
    day: u8,
    slot: u8,
) -> HuddleResult<(SlotId, bool)> {
    require(conn, member_id)?;
    let slot_id = SlotId::new(day, slot)?;
    let now_free = availability_repo::toggle(conn, member_id, slot_id)?;
    Ok((slot_id, now_free))
}

pub fn clear_availability(conn: &Connection, member_id: Id<Member>) -> HuddleResult<()> {
    require(conn, member_id)?;
    availability_repo::clear(conn, member_id)
}

/// Replaces a member's whole availability set. Every slot is range-checked
/// before anything is written.
pub fn set_availability(
    conn: &Connection,
    member_id: Id<Member>,
    slots: &BTreeSet<SlotId>,
) -> HuddleResult<()> {
    require(conn, member_id)?;
    for slot in slots {
        SlotId::new(slot.day, slot.slot)?;
    }
    availability_repo::replace(conn, member_id, slots)
}

fn require(conn: &Connection, member_id: Id<Member>) -> HuddleResult<Member> {
    member_repo::find_by_id(conn, member_id)?.ok_or_else(|| HuddleError::NotFound {
        entity_type: "Member".into(),
        id: member_id.to_string(),
    })
}
