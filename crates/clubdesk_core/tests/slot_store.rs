use clubdesk_core::db::{open_db, open_db_in_memory};
use clubdesk_core::store::{SlotStore, SLOT_NOTICES, SLOT_SESSION, SLOT_TASKS};
use clubdesk_core::{Notice, NoticeDraft, Priority};
use clubdesk_core::{Entity, Identity};
use chrono::Utc;
use uuid::Uuid;

fn sample_notice(title: &str) -> Notice {
    Notice::create(
        Uuid::new_v4(),
        NoticeDraft {
            title: title.to_string(),
            content: "body".to_string(),
            priority: Priority::Low,
        },
        Uuid::new_v4(),
        Utc::now(),
    )
}

#[test]
fn save_then_load_round_trips_the_full_sequence() {
    let conn = open_db_in_memory().unwrap();
    let store = SlotStore::new(&conn);

    let notices = vec![sample_notice("first"), sample_notice("second")];
    store.save(SLOT_NOTICES, &notices).unwrap();

    let loaded: Vec<Notice> = store.load(SLOT_NOTICES).unwrap();
    assert_eq!(loaded, notices);
}

#[test]
fn load_returns_default_when_slot_is_absent() {
    let conn = open_db_in_memory().unwrap();
    let store = SlotStore::new(&conn);

    let loaded: Vec<Notice> = store.load(SLOT_NOTICES).unwrap();
    assert!(loaded.is_empty());

    let fallback = vec![sample_notice("seeded")];
    let loaded = store.load_or(SLOT_TASKS, fallback.clone()).unwrap();
    assert_eq!(loaded, fallback);
}

#[test]
fn load_falls_back_silently_on_undecodable_payload() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO slots (slot, payload) VALUES (?1, ?2);",
        [SLOT_NOTICES, "{not json"],
    )
    .unwrap();

    let store = SlotStore::new(&conn);
    let loaded: Vec<Notice> = store.load(SLOT_NOTICES).unwrap();
    assert!(loaded.is_empty());

    let fallback = vec![sample_notice("default")];
    let loaded = store.load_or(SLOT_NOTICES, fallback.clone()).unwrap();
    assert_eq!(loaded, fallback);
}

#[test]
fn save_replaces_any_prior_payload() {
    let conn = open_db_in_memory().unwrap();
    let store = SlotStore::new(&conn);

    store
        .save(SLOT_NOTICES, &[sample_notice("a"), sample_notice("b")])
        .unwrap();
    let replacement = vec![sample_notice("only")];
    store.save(SLOT_NOTICES, &replacement).unwrap();

    let loaded: Vec<Notice> = store.load(SLOT_NOTICES).unwrap();
    assert_eq!(loaded, replacement);
}

#[test]
fn record_slot_round_trips_and_clears() {
    let conn = open_db_in_memory().unwrap();
    let store = SlotStore::new(&conn);
    let identity = clubdesk_core::roster()[0].clone();

    assert!(store
        .load_record::<Identity>(SLOT_SESSION)
        .unwrap()
        .is_none());

    store.save_record(SLOT_SESSION, &identity).unwrap();
    let loaded = store.load_record::<Identity>(SLOT_SESSION).unwrap();
    assert_eq!(loaded, Some(identity));

    store.clear(SLOT_SESSION).unwrap();
    assert!(store
        .load_record::<Identity>(SLOT_SESSION)
        .unwrap()
        .is_none());
}

#[test]
fn record_slot_reads_undecodable_payload_as_absent() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO slots (slot, payload) VALUES (?1, ?2);",
        [SLOT_SESSION, "[]"],
    )
    .unwrap();

    let store = SlotStore::new(&conn);
    assert!(store
        .load_record::<Identity>(SLOT_SESSION)
        .unwrap()
        .is_none());
}

#[test]
fn collections_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clubdesk.db");

    let notices = vec![sample_notice("durable")];
    {
        let conn = open_db(&path).unwrap();
        SlotStore::new(&conn).save(SLOT_NOTICES, &notices).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let loaded: Vec<Notice> = SlotStore::new(&conn).load(SLOT_NOTICES).unwrap();
    assert_eq!(loaded, notices);
}
