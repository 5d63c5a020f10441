use rusqlite::Connection;

use crate::error::HuddleResult;

/// Initialize the database schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> HuddleResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS groups (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS members (
            id TEXT PRIMARY KEY NOT NULL,
            group_id TEXT NOT NULL REFERENCES groups(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            avatar_url TEXT,
            location TEXT,
            joined_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(group_id, name COLLATE NOCASE)
        );

        CREATE TABLE IF NOT EXISTS availability_slots (
            member_id TEXT NOT NULL REFERENCES members(id) ON DELETE CASCADE,
            day INTEGER NOT NULL,
            slot INTEGER NOT NULL,
            PRIMARY KEY (member_id, day, slot)
        );

        CREATE TABLE IF NOT EXISTS meetings (
            id TEXT PRIMARY KEY NOT NULL,
            group_id TEXT NOT NULL REFERENCES groups(id) ON DELETE CASCADE,
            day TEXT NOT NULL,
            time_range TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS meeting_attendees (
            meeting_id TEXT NOT NULL REFERENCES meetings(id) ON DELETE CASCADE,
            ord INTEGER NOT NULL,
            name TEXT NOT NULL,
            status TEXT NOT NULL,
            eta TEXT,
            PRIMARY KEY (meeting_id, ord)
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// In-memory database for tests.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
