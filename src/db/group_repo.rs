use rusqlite::{params, Connection};

use super::parse_id;
use crate::error::HuddleResult;
use crate::model::{Group, Id};

pub fn insert(conn: &Connection, group: &Group) -> HuddleResult<()> {
    conn.execute(
        "INSERT INTO groups (id, name) VALUES (?1, ?2)",
        params![group.id.to_string(), group.name],
    )?;
    Ok(())
}

pub fn rename(conn: &Connection, group_id: Id<Group>, name: &str) -> HuddleResult<()> {
    conn.execute(
        "UPDATE groups SET name = ?1 WHERE id = ?2",
        params![name, group_id.to_string()],
    )?;
    Ok(())
}

pub fn find_by_id(conn: &Connection, group_id: Id<Group>) -> HuddleResult<Option<Group>> {
    let mut stmt = conn.prepare("SELECT id, name FROM groups WHERE id = ?1")?;

    let result = stmt.query_row(params![group_id.to_string()], |row| {
        let id_str: String = row.get(0)?;
        let name: String = row.get(1)?;
        Ok((id_str, name))
    });

    match result {
        Ok((id_str, name)) => Ok(Some(Group {
            id: parse_id(&id_str)?,
            name,
        })),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// The single-group CLI opens whatever group the database holds.
pub fn find_first(conn: &Connection) -> HuddleResult<Option<Group>> {
    let mut stmt = conn.prepare("SELECT id, name FROM groups ORDER BY created_at LIMIT 1")?;

    let result = stmt.query_row([], |row| {
        let id_str: String = row.get(0)?;
        let name: String = row.get(1)?;
        Ok((id_str, name))
    });

    match result {
        Ok((id_str, name)) => Ok(Some(Group {
            id: parse_id(&id_str)?,
            name,
        })),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
