use rusqlite::{params, Connection};

use super::parse_id;
use crate::error::{HuddleError, HuddleResult};
use crate::model::{AttendeeStatus, ConfirmedMeeting, Group, Id, MemberStatus};

pub fn insert(
    conn: &Connection,
    group_id: Id<Group>,
    meeting: &ConfirmedMeeting,
) -> HuddleResult<()> {
    conn.execute(
        "INSERT INTO meetings (id, group_id, day, time_range) VALUES (?1, ?2, ?3, ?4)",
        params![
            meeting.id.to_string(),
            group_id.to_string(),
            meeting.day,
            meeting.time_range,
        ],
    )?;

    for (ord, attendee) in meeting.attendees.iter().enumerate() {
        conn.execute(
            "INSERT INTO meeting_attendees (meeting_id, ord, name, status, eta)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                meeting.id.to_string(),
                ord as i64,
                attendee.name,
                attendee.status.label(),
                attendee.eta,
            ],
        )?;
    }

    Ok(())
}

/// The newest confirmation for a group — the app's notion of the "current"
/// meeting. Older confirmations stay in the table as history.
pub fn find_latest(conn: &Connection, group_id: Id<Group>) -> HuddleResult<Option<ConfirmedMeeting>> {
    let mut stmt = conn.prepare(
        "SELECT id, day, time_range, created_at FROM meetings
         WHERE group_id = ?1 ORDER BY created_at DESC, rowid DESC LIMIT 1",
    )?;

    let result = stmt.query_row(params![group_id.to_string()], |row| {
        let id_str: String = row.get(0)?;
        let day: String = row.get(1)?;
        let time_range: String = row.get(2)?;
        let created_at: String = row.get(3)?;
        Ok((id_str, day, time_range, created_at))
    });

    match result {
        Ok(row) => Ok(Some(assemble(conn, row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All confirmations for a group, newest first.
pub fn find_by_group(conn: &Connection, group_id: Id<Group>) -> HuddleResult<Vec<ConfirmedMeeting>> {
    let mut stmt = conn.prepare(
        "SELECT id, day, time_range, created_at FROM meetings
         WHERE group_id = ?1 ORDER BY created_at DESC, rowid DESC",
    )?;

    let rows: Vec<(String, String, String, String)> = stmt
        .query_map(params![group_id.to_string()], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut meetings = Vec::with_capacity(rows.len());
    for row in rows {
        meetings.push(assemble(conn, row)?);
    }
    Ok(meetings)
}

/// Rewrites one attendee row on a stored meeting (e.g. marking a member
/// running late with an ETA). Returns the updated record.
pub fn update_attendee(
    conn: &Connection,
    meeting_id: Id<ConfirmedMeeting>,
    name: &str,
    status: AttendeeStatus,
    eta: Option<&str>,
) -> HuddleResult<usize> {
    let changed = conn.execute(
        "UPDATE meeting_attendees SET status = ?1, eta = ?2
         WHERE meeting_id = ?3 AND name = ?4 COLLATE NOCASE",
        params![status.label(), eta, meeting_id.to_string(), name],
    )?;
    Ok(changed)
}

fn assemble(
    conn: &Connection,
    (id_str, day, time_range, created_at): (String, String, String, String),
) -> HuddleResult<ConfirmedMeeting> {
    let id: Id<ConfirmedMeeting> = parse_id(&id_str)?;
    let confirmed_at =
        chrono::NaiveDateTime::parse_from_str(&created_at, "%Y-%m-%d %H:%M:%S").ok();

    let mut stmt = conn.prepare(
        "SELECT name, status, eta FROM meeting_attendees
         WHERE meeting_id = ?1 ORDER BY ord",
    )?;

    let rows: Vec<(String, String, Option<String>)> = stmt
        .query_map(params![id_str], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut attendees = Vec::with_capacity(rows.len());
    for (name, status_str, eta) in rows {
        let status = AttendeeStatus::from_label(&status_str).ok_or_else(|| {
            HuddleError::Other(format!("Unknown attendee status: {}", status_str))
        })?;
        attendees.push(MemberStatus { name, status, eta });
    }

    Ok(ConfirmedMeeting {
        id,
        day,
        time_range,
        attendees,
        confirmed_at,
    })
}
