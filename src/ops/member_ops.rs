use rusqlite::Connection;

use crate::db::member_repo;
use crate::error::{HuddleError, HuddleResult};
use crate::model::{Group, Id, Member};
use crate::validation::{self, trim_optional};

pub fn add_member(
    conn: &Connection,
    group_id: Id<Group>,
    name: &str,
    avatar_url: Option<&str>,
) -> HuddleResult<Member> {
    let valid_name = validation::non_blank(name, "name")?;

    if member_repo::find_by_name(conn, group_id, &valid_name)?.is_some() {
        return Err(HuddleError::DuplicateName {
            entity_type: "Member".into(),
            name: valid_name,
        });
    }

    let mut member = Member::create(valid_name);
    member.avatar_url = trim_optional(avatar_url);

    member_repo::insert(conn, group_id, &member)?;
    Ok(member)
}

pub fn rename_member(
    conn: &Connection,
    group_id: Id<Group>,
    member_id: Id<Member>,
    new_name: &str,
) -> HuddleResult<Member> {
    let member = require(conn, member_id)?;
    let valid_name = validation::non_blank(new_name, "name")?;

    if let Some(existing) = member_repo::find_by_name(conn, group_id, &valid_name)? {
        if existing.id != member.id {
            return Err(HuddleError::DuplicateName {
                entity_type: "Member".into(),
                name: valid_name,
            });
        }
    }

    let mut updated = member;
    updated.name = valid_name;
    member_repo::update(conn, &updated)?;
    Ok(updated)
}

pub fn set_avatar(
    conn: &Connection,
    member_id: Id<Member>,
    avatar_url: Option<&str>,
) -> HuddleResult<Member> {
    let mut updated = require(conn, member_id)?;
    updated.avatar_url = trim_optional(avatar_url);
    member_repo::update(conn, &updated)?;
    Ok(updated)
}

/// Stores an opaque live-location reference on the member. The scheduler
/// never reads it; the surrounding app shows it on its map.
pub fn set_location(
    conn: &Connection,
    member_id: Id<Member>,
    location: &str,
) -> HuddleResult<Member> {
    let valid = validation::non_blank(location, "location")?;
    let mut updated = require(conn, member_id)?;
    updated.location = Some(valid);
    member_repo::update(conn, &updated)?;
    Ok(updated)
}

pub fn clear_location(conn: &Connection, member_id: Id<Member>) -> HuddleResult<Member> {
    let mut updated = require(conn, member_id)?;
    updated.location = None;
    member_repo::update(conn, &updated)?;
    Ok(updated)
}

pub fn remove_member(conn: &Connection, member_id: Id<Member>) -> HuddleResult<()> {
    require(conn, member_id)?;
    member_repo::delete(conn, member_id)
}

fn require(conn: &Connection, member_id: Id<Member>) -> HuddleResult<Member> {
    member_repo::find_by_id(conn, member_id)?.ok_or_else(|| HuddleError::NotFound {
        entity_type: "Member".into(),
        id: member_id.to_string(),
    })
}
