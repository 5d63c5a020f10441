use std::path::PathBuf;

use huddle::db::{group_repo, member_repo, meeting_repo};
use huddle::migrate;
use huddle::model::{AttendeeStatus, SlotId};

fn temp_paths(tag: &str) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir();
    let unique = uuid::Uuid::new_v4();
    (
        dir.join(format!("huddle-{}-{}.json", tag, unique)),
        dir.join(format!("huddle-{}-{}.db", tag, unique)),
    )
}

#[test]
fn import_builds_group_members_and_meeting() {
    let (json_path, db_path) = temp_paths("full");
    let doc = r#"{
        "groupName": "My Team",
        "members": [
            {
                "name": "Alice",
                "avatarUrl": "https://example.com/a.png",
                "availability": [
                    {"dayIndex": 0, "slotIndex": 0},
                    {"dayIndex": 0, "slotIndex": 1}
                ]
            },
            {
                "name": "Bob",
                "availability": [
                    {"dayIndex": 0, "slotIndex": 1}
                ]
            }
        ],
        "meeting": {
            "day": "Mon",
            "timeRange": "08:30 - 09:30",
            "attendees": [
                {"name": "Alice", "status": "Confirmed"},
                {"name": "Bob", "status": "Running Late", "eta": "ETA: 14:08"}
            ]
        }
    }"#;
    std::fs::write(&json_path, doc).unwrap();

    let stats = migrate::import_json(&json_path, &db_path).unwrap();
    assert_eq!(stats.members, 2);
    assert_eq!(stats.slots, 3);
    assert_eq!(stats.meetings, 1);

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let group = group_repo::find_first(&conn).unwrap().unwrap();
    assert_eq!(group.name, "My Team");

    let roster = member_repo::find_by_group(&conn, group.id).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].name, "Alice");
    assert_eq!(roster[0].avatar_url.as_deref(), Some("https://example.com/a.png"));
    assert!(roster[0].is_free(SlotId::new(0, 0).unwrap()));
    assert_eq!(roster[1].availability.len(), 1);

    let meeting = meeting_repo::find_latest(&conn, group.id).unwrap().unwrap();
    assert_eq!(meeting.day, "Mon");
    assert_eq!(meeting.attendees[1].status, AttendeeStatus::RunningLate);
    assert_eq!(meeting.attendees[1].eta.as_deref(), Some("ETA: 14:08"));

    drop(conn);
    let _ = std::fs::remove_file(&json_path);
    let _ = std::fs::remove_file(&db_path);
}

#[test]
fn import_rejects_out_of_grid_slots() {
    let (json_path, db_path) = temp_paths("badslot");
    let doc = r#"{
        "groupName": "My Team",
        "members": [
            {
                "name": "Alice",
                "availability": [{"dayIndex": 9, "slotIndex": 0}]
            }
        ]
    }"#;
    std::fs::write(&json_path, doc).unwrap();

    let result = migrate::import_json(&json_path, &db_path);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("Alice"), "error should name the member: {}", err);

    let _ = std::fs::remove_file(&json_path);
    let _ = std::fs::remove_file(&db_path);
}

#[test]
fn import_without_a_meeting_is_fine() {
    let (json_path, db_path) = temp_paths("nomeeting");
    let doc = r#"{
        "groupName": "My Team",
        "members": [{"name": "Alice", "availability": []}]
    }"#;
    std::fs::write(&json_path, doc).unwrap();

    let stats = migrate::import_json(&json_path, &db_path).unwrap();
    assert_eq!(stats.members, 1);
    assert_eq!(stats.meetings, 0);

    let _ = std::fs::remove_file(&json_path);
    let _ = std::fs::remove_file(&db_path);
}
