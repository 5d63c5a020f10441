use std::collections::BTreeSet;

use rusqlite::{params, Connection};

use crate::error::HuddleResult;
use crate::model::{Id, Member, SlotId};

pub fn find_by_member(conn: &Connection, member_id: Id<Member>) -> HuddleResult<BTreeSet<SlotId>> {
    let mut stmt = conn.prepare(
        "SELECT day, slot FROM availability_slots WHERE member_id = ?1 ORDER BY day, slot",
    )?;

    let slots = stmt
        .query_map(params![member_id.to_string()], |row| {
            Ok(SlotId {
                day: row.get(0)?,
                slot: row.get(1)?,
            })
        })?
        .collect::<Result<BTreeSet<_>, _>>()?;

    Ok(slots)
}

/// Flips one slot for a member: deletes it if present, inserts it otherwise.
/// The (member, day, slot) primary key keeps membership at-most-one, so two
/// toggles always restore the starting state. Returns whether the slot is
/// marked free afterwards.
pub fn toggle(conn: &Connection, member_id: Id<Member>, slot: SlotId) -> HuddleResult<bool> {
    let removed = conn.execute(
        "DELETE FROM availability_slots WHERE member_id = ?1 AND day = ?2 AND slot = ?3",
        params![member_id.to_string(), slot.day, slot.slot],
    )?;

    if removed > 0 {
        return Ok(false);
    }

    conn.execute(
        "INSERT INTO availability_slots (member_id, day, slot) VALUES (?1, ?2, ?3)",
        params![member_id.to_string(), slot.day, slot.slot],
    )?;
    Ok(true)
}

pub fn clear(conn: &Connection, member_id: Id<Member>) -> HuddleResult<()> {
    conn.execute(
        "DELETE FROM availability_slots WHERE member_id = ?1",
        params![member_id.to_string()],
    )?;
    Ok(())
}

/// Replaces a member's whole availability set (used by import).
pub fn replace(
    conn: &Connection,
    member_id: Id<Member>,
    slots: &BTreeSet<SlotId>,
) -> HuddleResult<()> {
    clear(conn, member_id)?;
    for slot in slots {
        conn.execute(
            "INSERT INTO availability_slots (member_id, day, slot) VALUES (?1, ?2, ?3)",
            params![member_id.to_string(), slot.day, slot.slot],
        )?;
    }
    Ok(())
}
