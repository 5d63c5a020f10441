use std::collections::BTreeSet;
use std::path::Path;

use rusqlite::Connection;
use serde_json::Value;

use crate::db::{availability_repo, group_repo, meeting_repo, member_repo, schema};
use crate::error::{HuddleError, HuddleResult};
use crate::model::{
    AttendeeStatus, ConfirmedMeeting, Group, Id, Member, MemberStatus, SlotId,
};
use crate::validation;

/// Imports a group export (the old app's backend document shape: camelCase
/// keys, availability as {dayIndex, slotIndex} pairs) into a SQLite
/// database. Member ids are regenerated; the old backend's ids were
/// auth-provider strings with no meaning here.
pub fn import_json(json_path: &Path, db_path: &Path) -> HuddleResult<ImportStats> {
    let json_str = std::fs::read_to_string(json_path)?;
    let json: Value = serde_json::from_str(&json_str)?;

    let conn = Connection::open(db_path)?;
    schema::initialize(&conn)?;

    import_group(&conn, &json)
}

#[derive(Debug)]
pub struct ImportStats {
    pub members: usize,
    pub slots: usize,
    pub meetings: usize,
}

fn import_group(conn: &Connection, json: &Value) -> HuddleResult<ImportStats> {
    let group_name = json["groupName"]
        .as_str()
        .ok_or_else(|| HuddleError::Other("Missing groupName".into()))?;

    let group = Group::create(validation::non_blank(group_name, "groupName")?);
    group_repo::insert(conn, &group)?;

    let mut member_count = 0;
    let mut slot_count = 0;

    if let Some(members) = json["members"].as_array() {
        for member_val in members {
            let name = member_val["name"]
                .as_str()
                .ok_or_else(|| HuddleError::Other("Member missing name".into()))?;

            let mut member = Member::create(validation::non_blank(name, "name")?);
            member.avatar_url = member_val["avatarUrl"].as_str().map(str::to_string);
            member_repo::insert(conn, group.id, &member)?;

            let slots = parse_availability(member_val, &member.name)?;
            slot_count += slots.len();
            availability_repo::replace(conn, member.id, &slots)?;

            member_count += 1;
        }
    }

    let mut meeting_count = 0;
    if let Some(meeting_val) = json.get("meeting").filter(|m| !m.is_null()) {
        let meeting = parse_meeting(meeting_val)?;
        meeting_repo::insert(conn, group.id, &meeting)?;
        meeting_count += 1;
    }

    Ok(ImportStats {
        members: member_count,
        slots: slot_count,
        meetings: meeting_count,
    })
}

fn parse_availability(member_val: &Value, member_name: &str) -> HuddleResult<BTreeSet<SlotId>> {
    let mut slots = BTreeSet::new();

    if let Some(entries) = member_val["availability"].as_array() {
        for entry in entries {
            let day = entry["dayIndex"]
                .as_u64()
                .ok_or_else(|| HuddleError::Other(format!("{}: missing dayIndex", member_name)))?;
            let slot = entry["slotIndex"]
                .as_u64()
                .ok_or_else(|| HuddleError::Other(format!("{}: missing slotIndex", member_name)))?;

            let slot_id = SlotId::new(day as u8, slot as u8)
                .map_err(|e| HuddleError::Other(format!("{}: {}", member_name, e)))?;
            slots.insert(slot_id);
        }
    }

    Ok(slots)
}

fn parse_meeting(meeting_val: &Value) -> HuddleResult<ConfirmedMeeting> {
    let day = meeting_val["day"]
        .as_str()
        .ok_or_else(|| HuddleError::Other("Meeting missing day".into()))?;
    let time_range = meeting_val["timeRange"]
        .as_str()
        .ok_or_else(|| HuddleError::Other("Meeting missing timeRange".into()))?;

    let mut attendees = Vec::new();
    if let Some(entries) = meeting_val["attendees"].as_array() {
        for entry in entries {
            let name = entry["name"]
                .as_str()
                .ok_or_else(|| HuddleError::Other("Attendee missing name".into()))?;
            let status_str = entry["status"].as_str().unwrap_or("Pending");
            let status = AttendeeStatus::from_label(status_str).ok_or_else(|| {
                HuddleError::Other(format!("Unknown attendee status: {}", status_str))
            })?;

            attendees.push(MemberStatus {
                name: name.to_string(),
                status,
                eta: entry["eta"].as_str().map(str::to_string),
            });
        }
    }

    Ok(ConfirmedMeeting {
        id: Id::generate(),
        day: day.to_string(),
        time_range: time_range.to_string(),
        attendees,
        confirmed_at: None,
    })
}
