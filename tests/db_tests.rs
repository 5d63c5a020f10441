use std::collections::BTreeSet;

use huddle::db::*;
use huddle::model::*;

fn setup() -> (rusqlite::Connection, Group) {
    let conn = schema::test_connection();
    let group = Group::create("Study Group".into());
    group_repo::insert(&conn, &group).unwrap();
    (conn, group)
}

// ==========================================================================
// GROUP REPO
// ==========================================================================

#[test]
fn find_first_returns_the_created_group() {
    let (conn, group) = setup();
    let found = group_repo::find_first(&conn).unwrap().unwrap();
    assert_eq!(found.id, group.id);
    assert_eq!(found.name, "Study Group");
}

#[test]
fn find_first_is_none_on_an_empty_database() {
    let conn = schema::test_connection();
    assert!(group_repo::find_first(&conn).unwrap().is_none());
}

#[test]
fn rename_updates_the_group() {
    let (conn, group) = setup();
    group_repo::rename(&conn, group.id, "Project Team").unwrap();
    let found = group_repo::find_by_id(&conn, group.id).unwrap().unwrap();
    assert_eq!(found.name, "Project Team");
}

// ==========================================================================
// MEMBER REPO
// ==========================================================================

#[test]
fn roster_keeps_insertion_order() {
    let (conn, group) = setup();
    for name in ["Cara", "Alice", "Bob"] {
        member_repo::insert(&conn, group.id, &Member::create(name.into())).unwrap();
    }

    let roster = member_repo::find_by_group(&conn, group.id).unwrap();
    let names: Vec<&str> = roster.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Cara", "Alice", "Bob"]);
}

#[test]
fn find_by_name_matches_case_insensitively() {
    let (conn, group) = setup();
    member_repo::insert(&conn, group.id, &Member::create("Alice".into())).unwrap();

    assert!(member_repo::find_by_name(&conn, group.id, "alice")
        .unwrap()
        .is_some());
    assert!(member_repo::find_by_name(&conn, group.id, "Bob")
        .unwrap()
        .is_none());
}

#[test]
fn delete_removes_member_and_availability() {
    let (conn, group) = setup();
    let member = Member::create("Alice".into());
    member_repo::insert(&conn, group.id, &member).unwrap();
    availability_repo::toggle(&conn, member.id, SlotId::new(0, 0).unwrap()).unwrap();

    member_repo::delete(&conn, member.id).unwrap();
    assert!(member_repo::find_by_id(&conn, member.id).unwrap().is_none());
    assert!(availability_repo::find_by_member(&conn, member.id)
        .unwrap()
        .is_empty());
}

// ==========================================================================
// AVAILABILITY REPO
// ==========================================================================

#[test]
fn toggle_flips_and_restores() {
    let (conn, group) = setup();
    let member = Member::create("Alice".into());
    member_repo::insert(&conn, group.id, &member).unwrap();
    let slot = SlotId::new(2, 10).unwrap();

    assert!(availability_repo::toggle(&conn, member.id, slot).unwrap());
    assert!(availability_repo::find_by_member(&conn, member.id)
        .unwrap()
        .contains(&slot));

    assert!(!availability_repo::toggle(&conn, member.id, slot).unwrap());
    assert!(availability_repo::find_by_member(&conn, member.id)
        .unwrap()
        .is_empty());
}

#[test]
fn member_read_back_carries_availability() {
    let (conn, group) = setup();
    let member = Member::create("Alice".into());
    member_repo::insert(&conn, group.id, &member).unwrap();
    availability_repo::toggle(&conn, member.id, SlotId::new(1, 3).unwrap()).unwrap();
    availability_repo::toggle(&conn, member.id, SlotId::new(0, 7).unwrap()).unwrap();

    let found = member_repo::find_by_id(&conn, member.id).unwrap().unwrap();
    assert_eq!(found.availability.len(), 2);
    assert!(found.is_free(SlotId::new(0, 7).unwrap()));
}

#[test]
fn replace_swaps_the_whole_set() {
    let (conn, group) = setup();
    let member = Member::create("Alice".into());
    member_repo::insert(&conn, group.id, &member).unwrap();
    availability_repo::toggle(&conn, member.id, SlotId::new(0, 0).unwrap()).unwrap();

    let mut slots = BTreeSet::new();
    slots.insert(SlotId::new(5, 5).unwrap());
    slots.insert(SlotId::new(6, 6).unwrap());
    availability_repo::replace(&conn, member.id, &slots).unwrap();

    let found = availability_repo::find_by_member(&conn, member.id).unwrap();
    assert_eq!(found, slots);
}

// ==========================================================================
// MEETING REPO
// ==========================================================================

fn sample_meeting() -> ConfirmedMeeting {
    ConfirmedMeeting {
        id: Id::generate(),
        day: "Wed".into(),
        time_range: "10:00 - 11:00".into(),
        attendees: vec![
            MemberStatus {
                name: "Alice".into(),
                status: AttendeeStatus::Confirmed,
                eta: None,
            },
            MemberStatus {
                name: "Bob".into(),
                status: AttendeeStatus::Pending,
                eta: None,
            },
        ],
        confirmed_at: None,
    }
}

#[test]
fn meeting_round_trips_with_attendee_order() {
    let (conn, group) = setup();
    let meeting = sample_meeting();
    meeting_repo::insert(&conn, group.id, &meeting).unwrap();

    let found = meeting_repo::find_latest(&conn, group.id).unwrap().unwrap();
    assert_eq!(found.id, meeting.id);
    assert_eq!(found.day, "Wed");
    assert_eq!(found.time_range, "10:00 - 11:00");
    assert_eq!(found.attendees, meeting.attendees);
    assert!(found.confirmed_at.is_some());
}

#[test]
fn latest_meeting_wins() {
    let (conn, group) = setup();
    let first = sample_meeting();
    meeting_repo::insert(&conn, group.id, &first).unwrap();

    let mut second = sample_meeting();
    second.day = "Fri".into();
    meeting_repo::insert(&conn, group.id, &second).unwrap();

    let found = meeting_repo::find_latest(&conn, group.id).unwrap().unwrap();
    assert_eq!(found.id, second.id);

    let all = meeting_repo::find_by_group(&conn, group.id).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second.id);
}

#[test]
fn update_attendee_rewrites_status_and_eta() {
    let (conn, group) = setup();
    let meeting = sample_meeting();
    meeting_repo::insert(&conn, group.id, &meeting).unwrap();

    let changed = meeting_repo::update_attendee(
        &conn,
        meeting.id,
        "Bob",
        AttendeeStatus::RunningLate,
        Some("ETA: 14:08"),
    )
    .unwrap();
    assert_eq!(changed, 1);

    let found = meeting_repo::find_latest(&conn, group.id).unwrap().unwrap();
    assert_eq!(found.attendees[1].status, AttendeeStatus::RunningLate);
    assert_eq!(found.attendees[1].eta.as_deref(), Some("ETA: 14:08"));
    // Order untouched
    assert_eq!(found.attendees[0].name, "Alice");
}

#[test]
fn update_attendee_misses_unknown_names() {
    let (conn, group) = setup();
    let meeting = sample_meeting();
    meeting_repo::insert(&conn, group.id, &meeting).unwrap();

    let changed = meeting_repo::update_attendee(
        &conn,
        meeting.id,
        "Nobody",
        AttendeeStatus::Confirmed,
        None,
    )
    .unwrap();
    assert_eq!(changed, 0);
}
