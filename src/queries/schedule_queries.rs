use rusqlite::Connection;

use crate::db::{meeting_repo, member_repo};
use crate::error::HuddleResult;
use crate::model::{ConfirmedMeeting, Group, Id, MeetingSuggestion, Member};
use crate::schedule::find_meeting_times;

/// The read-only snapshot the engine runs on: the roster in stable order,
/// each member carrying their availability set as of this read.
pub fn availability_snapshot(conn: &Connection, group_id: Id<Group>) -> HuddleResult<Vec<Member>> {
    member_repo::find_by_group(conn, group_id)
}

/// Loads a fresh snapshot and ranks candidate windows for the duration.
pub fn meeting_suggestions(
    conn: &Connection,
    group_id: Id<Group>,
    duration_slots: u32,
    limit: usize,
) -> HuddleResult<Vec<MeetingSuggestion>> {
    let snapshot = availability_snapshot(conn, group_id)?;
    find_meeting_times(&snapshot, duration_slots, limit)
}

pub fn current_meeting(
    conn: &Connection,
    group_id: Id<Group>,
) -> HuddleResult<Option<ConfirmedMeeting>> {
    meeting_repo::find_latest(conn, group_id)
}

pub fn meeting_history(
    conn: &Connection,
    group_id: Id<Group>,
) -> HuddleResult<Vec<ConfirmedMeeting>> {
    meeting_repo::find_by_group(conn, group_id)
}
