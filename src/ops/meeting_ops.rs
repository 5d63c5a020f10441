use rusqlite::Connection;

use crate::db::{meeting_repo, member_repo};
use crate::error::{HuddleError, HuddleResult};
use crate::model::{AttendeeStatus, ConfirmedMeeting, Group, Id, MeetingSuggestion};
use crate::schedule::{confirm_meeting, StatusOverrides};

/// Confirms one suggestion against the group's current roster and persists
/// the resulting record. The stored meeting becomes the group's current one.
pub fn confirm_suggestion(
    conn: &Connection,
    group_id: Id<Group>,
    suggestion: &MeetingSuggestion,
    overrides: &StatusOverrides,
) -> HuddleResult<ConfirmedMeeting> {
    let roster = member_repo::find_by_group(conn, group_id)?;
    let meeting = confirm_meeting(suggestion, &roster, overrides);
    meeting_repo::insert(conn, group_id, &meeting)?;
    Ok(meeting)
}

/// Updates one attendee's status on a stored meeting, e.g. marking them
/// running late with an ETA.
pub fn set_attendee_status(
    conn: &Connection,
    meeting_id: Id<ConfirmedMeeting>,
    name: &str,
    status: AttendeeStatus,
    eta: Option<&str>,
) -> HuddleResult<()> {
    let changed = meeting_repo::update_attendee(conn, meeting_id, name, status, eta)?;
    if changed == 0 {
        return Err(HuddleError::NotFound {
            entity_type: "Attendee".into(),
            id: name.to_string(),
        });
    }
    Ok(())
}
