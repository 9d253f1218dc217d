use clubdesk_core::db::open_db_in_memory;
use clubdesk_core::store::{SlotStore, SLOT_MINUTES};
use clubdesk_core::{EntityController, Identity, MinutesDraft, MinutesRecord, Role};
use chrono::NaiveDate;

fn secretary() -> Identity {
    clubdesk_core::roster()
        .iter()
        .find(|identity| identity.role == Role::Secretary)
        .expect("roster has a secretary")
        .clone()
}

fn draft(participants: Vec<&str>, decisions: Vec<&str>) -> MinutesDraft {
    MinutesDraft {
        title: "weekly sync".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        participants: participants.into_iter().map(String::from).collect(),
        summary: "progress review".to_string(),
        decisions: decisions.into_iter().map(String::from).collect(),
    }
}

#[test]
fn removing_a_participant_row_before_submit_persists_one_participant() {
    let conn = open_db_in_memory().unwrap();
    let secretary = secretary();
    let minutes = EntityController::<MinutesRecord>::new(&conn);

    let created = minutes
        .create(&secretary, draft(vec!["alice", "bob"], vec!["adopt rust"]))
        .unwrap();
    assert_eq!(created.participants.len(), 2);

    // The form removes one participant row, then submits the rest.
    minutes
        .update(
            &secretary,
            created.id,
            draft(vec!["alice"], vec!["adopt rust"]),
        )
        .unwrap();

    let stored: Vec<MinutesRecord> = SlotStore::new(&conn).load(SLOT_MINUTES).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].participants, vec!["alice"]);
    assert_eq!(stored[0].decisions, vec!["adopt rust"]);
}

#[test]
fn blank_rows_are_stripped_before_persisting() {
    let conn = open_db_in_memory().unwrap();
    let secretary = secretary();
    let minutes = EntityController::<MinutesRecord>::new(&conn);

    let created = minutes
        .create(
            &secretary,
            draft(vec!["alice", "", "  "], vec!["", "ship friday"]),
        )
        .unwrap();
    assert_eq!(created.participants, vec!["alice"]);
    assert_eq!(created.decisions, vec!["ship friday"]);

    let stored: Vec<MinutesRecord> = SlotStore::new(&conn).load(SLOT_MINUTES).unwrap();
    assert_eq!(stored[0].participants, vec!["alice"]);
}

#[test]
fn update_preserves_creation_stamp_and_creator() {
    let conn = open_db_in_memory().unwrap();
    let secretary = secretary();
    let minutes = EntityController::<MinutesRecord>::new(&conn);

    let created = minutes
        .create(&secretary, draft(vec!["alice"], vec![]))
        .unwrap();
    minutes
        .update(&secretary, created.id, draft(vec!["bob"], vec!["decided"]))
        .unwrap();

    let list = minutes.list(&secretary).unwrap();
    assert_eq!(list[0].id, created.id);
    assert_eq!(list[0].created_by, created.created_by);
    assert_eq!(list[0].created_at, created.created_at);
    assert_eq!(list[0].participants, vec!["bob"]);
}

#[test]
fn minutes_prepend_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let secretary = secretary();
    let minutes = EntityController::<MinutesRecord>::new(&conn);

    let older = minutes
        .create(&secretary, draft(vec!["alice"], vec![]))
        .unwrap();
    let newer = minutes
        .create(&secretary, draft(vec!["bob"], vec![]))
        .unwrap();

    let list = minutes.list(&secretary).unwrap();
    assert_eq!(list[0].id, newer.id);
    assert_eq!(list[1].id, older.id);
}
