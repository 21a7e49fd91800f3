use chrono::{Duration, TimeZone, Utc};
use myspace_core::{
    format_relative_age, Clock, FixedClock, KeyValueStore, MemoryKeyValueStore, RecordId,
    StoreError, ValidationError, WorkspaceStore, UNTITLED,
};
use std::sync::Arc;

fn store_at(
    start: chrono::DateTime<Utc>,
) -> (WorkspaceStore<MemoryKeyValueStore>, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(start));
    let store = WorkspaceStore::open_with_clock(MemoryKeyValueStore::new(), clock.clone());
    (store, clock)
}

fn persisted(store: &WorkspaceStore<MemoryKeyValueStore>, key: &str) -> Option<String> {
    store.repository().store().get(key).unwrap()
}

#[test]
fn create_note_inserts_one_record_at_front_with_equal_timestamps() {
    let (mut store, clock) = store_at(Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap());
    let first = store.create_note("first", "").unwrap();
    clock.advance(Duration::seconds(30));
    let second = store.create_note("  ", "  just content  ").unwrap();

    assert_eq!(store.notes().len(), 2);
    assert_eq!(store.notes()[0].id, second.id);
    assert_eq!(store.notes()[1].id, first.id);
    assert_eq!(second.title, UNTITLED);
    assert_eq!(second.content, "just content");
    assert_eq!(second.created_at, second.updated_at);
    assert_eq!(second.created_at, clock.now());
    assert!(persisted(&store, "notes").unwrap().contains(second.id.as_str()));
}

#[test]
fn blank_note_is_rejected_without_changing_collection() {
    let (mut store, _) = store_at(Utc::now());
    store.create_note("keep", "").unwrap();

    let err = store.create_note("", "").unwrap_err();
    assert!(matches!(err, StoreError::Validation(ValidationError::EmptyNote)));
    let err = store.create_note(" \t", "\n").unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.notes().len(), 1);
}

#[test]
fn groceries_edit_keeps_created_at_and_reads_just_now() {
    let t0 = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
    let (mut store, clock) = store_at(t0);

    let note = store.create_note("Groceries", "milk, eggs").unwrap();
    assert_eq!(note.created_at, t0);
    assert_eq!(note.updated_at, t0);

    clock.advance(Duration::minutes(5));
    let edited = store
        .update_note(&note.id, "Groceries", "milk, eggs, bread")
        .unwrap();
    assert_eq!(edited.created_at, t0);
    assert_eq!(edited.updated_at, t0 + Duration::minutes(5));
    assert_eq!(edited.content, "milk, eggs, bread");
    assert!(edited.is_edited());
    assert_eq!(store.note(&note.id), Some(&edited));

    let viewed_at = t0 + Duration::minutes(5) + Duration::seconds(10);
    assert_eq!(format_relative_age(edited.updated_at, viewed_at), "just now");
}

#[test]
fn update_missing_note_reports_not_found() {
    let (mut store, _) = store_at(Utc::now());
    let missing = RecordId::from("gone");
    let err = store.update_note(&missing, "t", "c").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(ref id) if id == &missing));
}

#[test]
fn update_with_blank_input_leaves_note_untouched() {
    let (mut store, _) = store_at(Utc::now());
    let note = store.create_note("title", "body").unwrap();
    let err = store.update_note(&note.id, "", " ").unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.note(&note.id), Some(&note));
}

#[test]
fn deleting_absent_ids_is_an_idempotent_no_op() {
    let (mut store, _) = store_at(Utc::now());
    let note = store.create_note("a", "").unwrap();
    let todo = store.create_todo("b").unwrap();
    let entry = store.create_log("c").unwrap();
    let notes_before = store.notes().to_vec();
    let todos_before = store.todos().to_vec();
    let logs_before = store.logs().to_vec();

    let absent = RecordId::from("absent");
    for _ in 0..2 {
        assert!(!store.delete_note(&absent));
        assert!(!store.delete_todo(&absent));
        assert!(!store.delete_log(&absent));
        assert_eq!(store.toggle_todo(&absent), None);
    }
    assert_eq!(store.notes(), notes_before.as_slice());
    assert_eq!(store.todos(), todos_before.as_slice());
    assert_eq!(store.logs(), logs_before.as_slice());

    assert!(store.delete_note(&note.id));
    assert!(!store.delete_note(&note.id));
    assert!(store.delete_todo(&todo.id));
    assert!(store.delete_log(&entry.id));
    assert!(store.notes().is_empty() && store.todos().is_empty() && store.logs().is_empty());
}

#[test]
fn toggle_is_its_own_inverse() {
    let (mut store, _) = store_at(Utc::now());
    store.create_todo("one").unwrap();
    let two = store.create_todo("two").unwrap();
    store.toggle_todo(&two.id);
    let before = store.todos().to_vec();

    for todo in &before {
        store.toggle_todo(&todo.id);
        store.toggle_todo(&todo.id);
    }
    assert_eq!(store.todos(), before.as_slice());
}

#[test]
fn blank_todo_and_log_are_rejected() {
    let (mut store, _) = store_at(Utc::now());
    assert!(matches!(
        store.create_todo("   "),
        Err(StoreError::Validation(ValidationError::EmptyTodo))
    ));
    assert!(matches!(
        store.create_log(""),
        Err(StoreError::Validation(ValidationError::EmptyLog))
    ));
    assert!(store.todos().is_empty());
    assert!(store.logs().is_empty());
    assert_eq!(persisted(&store, "todos"), None);
}

#[test]
fn created_todo_is_pending_and_trimmed() {
    let (mut store, _) = store_at(Utc::now());
    let todo = store.create_todo("  Pay rent ").unwrap();
    assert_eq!(todo.text, "Pay rent");
    assert!(!todo.completed);
    assert_eq!(store.toggle_todo(&todo.id), Some(true));
    assert!(persisted(&store, "todos").unwrap().contains("\"completed\":true"));
}

#[test]
fn clear_logs_empties_memory_and_store_and_repeats_as_no_op() {
    let (mut store, _) = store_at(Utc::now());
    store.create_log("coffee").unwrap();
    store.create_log("standup").unwrap();

    assert_eq!(store.clear_logs(), 2);
    assert!(store.logs().is_empty());
    assert_eq!(persisted(&store, "logs").as_deref(), Some("[]"));

    assert_eq!(store.clear_logs(), 0);
    assert_eq!(persisted(&store, "logs").as_deref(), Some("[]"));
}
