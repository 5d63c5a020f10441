use rusqlite::{params, Connection};

use super::{availability_repo, parse_id};
use crate::error::HuddleResult;
use crate::model::{Group, Id, Member};

pub fn insert(conn: &Connection, group_id: Id<Group>, member: &Member) -> HuddleResult<()> {
    conn.execute(
        "INSERT INTO members (id, group_id, name, avatar_url, location)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            member.id.to_string(),
            group_id.to_string(),
            member.name,
            member.avatar_url,
            member.location,
        ],
    )?;
    Ok(())
}

pub fn update(conn: &Connection, member: &Member) -> HuddleResult<()> {
    conn.execute(
        "UPDATE members SET name = ?1, avatar_url = ?2, location = ?3 WHERE id = ?4",
        params![
            member.name,
            member.avatar_url,
            member.location,
            member.id.to_string(),
        ],
    )?;
    Ok(())
}

pub fn delete(conn: &Connection, member_id: Id<Member>) -> HuddleResult<()> {
    conn.execute(
        "DELETE FROM availability_slots WHERE member_id = ?1",
        params![member_id.to_string()],
    )?;
    conn.execute(
        "DELETE FROM members WHERE id = ?1",
        params![member_id.to_string()],
    )?;
    Ok(())
}

pub fn find_by_id(conn: &Connection, member_id: Id<Member>) -> HuddleResult<Option<Member>> {
    let mut stmt =
        conn.prepare("SELECT id, name, avatar_url, location FROM members WHERE id = ?1")?;

    let result = stmt.query_row(params![member_id.to_string()], |row| {
        let id_str: String = row.get(0)?;
        let name: String = row.get(1)?;
        let avatar_url: Option<String> = row.get(2)?;
        let location: Option<String> = row.get(3)?;
        Ok((id_str, name, avatar_url, location))
    });

    match result {
        Ok(row) => Ok(Some(assemble(conn, row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// The roster, in joining order. Order is stable across reads; suggestion
/// member lists and confirmation attendee lists both follow it.
pub fn find_by_group(conn: &Connection, group_id: Id<Group>) -> HuddleResult<Vec<Member>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, avatar_url, location FROM members
         WHERE group_id = ?1 ORDER BY rowid",
    )?;

    let rows: Vec<(String, String, Option<String>, Option<String>)> = stmt
        .query_map(params![group_id.to_string()], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut members = Vec::with_capacity(rows.len());
    for row in rows {
        members.push(assemble(conn, row)?);
    }
    Ok(members)
}

/// Exact name match within the group, case-insensitive.
pub fn find_by_name(
    conn: &Connection,
    group_id: Id<Group>,
    name: &str,
) -> HuddleResult<Option<Member>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, avatar_url, location FROM members
         WHERE group_id = ?1 AND name = ?2 COLLATE NOCASE",
    )?;

    let result = stmt.query_row(params![group_id.to_string(), name], |row| {
        let id_str: String = row.get(0)?;
        let name: String = row.get(1)?;
        let avatar_url: Option<String> = row.get(2)?;
        let location: Option<String> = row.get(3)?;
        Ok((id_str, name, avatar_url, location))
    });

    match result {
        Ok(row) => Ok(Some(assemble(conn, row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn assemble(
    conn: &Connection,
    (id_str, name, avatar_url, location): (String, String, Option<String>, Option<String>),
) -> HuddleResult<Member> {
    let id: Id<Member> = parse_id(&id_str)?;
    Ok(Member {
        id,
        name,
        avatar_url,
        location,
        availability: availability_repo::find_by_member(conn, id)?,
    })
}
