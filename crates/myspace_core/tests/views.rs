use chrono::{Duration, TimeZone, Utc};
use myspace_core::{
    compare_titles, filter_notes, filter_todos, format_log_timestamp, sort_logs, visible_notes,
    FixedClock, LogSort, MemoryKeyValueStore, NoteSort, TodoFilter, WorkspaceStore,
};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

fn store_with_clock() -> (WorkspaceStore<MemoryKeyValueStore>, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2026, 10, 10, 6, 0, 0).unwrap(),
    ));
    let store = WorkspaceStore::open_with_clock(MemoryKeyValueStore::new(), clock.clone());
    (store, clock)
}

#[test]
fn note_search_matches_title_or_content_ignoring_case() {
    let (mut store, _) = store_with_clock();
    store.create_note("Groceries", "milk, eggs").unwrap();
    store.create_note("Meeting", "Bring MILK for coffee").unwrap();
    store.create_note("Ideas", "nothing here").unwrap();

    let titles = |query: &str| -> Vec<String> {
        filter_notes(store.notes(), query)
            .into_iter()
            .map(|note| note.title.clone())
            .collect()
    };
    assert_eq!(titles("milk"), vec!["Meeting", "Groceries"]);
    assert_eq!(titles("GROC"), vec!["Groceries"]);
    assert_eq!(titles(""), vec!["Ideas", "Meeting", "Groceries"]);
    assert!(titles("absent").is_empty());
}

#[test]
fn note_search_treats_whitespace_literally() {
    let (mut store, _) = store_with_clock();
    store.create_note("Groceries", "milk, eggs").unwrap();
    store.create_note("Meeting", "Bring MILK for coffee").unwrap();

    let hits = |query: &str| filter_notes(store.notes(), query).len();
    assert_eq!(hits("milk "), 1);
    assert_eq!(hits("   "), 0);
}

#[test]
fn note_sort_orders_by_updated_at_and_title() {
    let (mut store, clock) = store_with_clock();
    let banana = store.create_note("banana", "").unwrap();
    clock.advance(Duration::minutes(1));
    store.create_note("Apple", "").unwrap();
    clock.advance(Duration::minutes(1));
    store.create_note("cherry", "").unwrap();
    clock.advance(Duration::minutes(1));
    store.update_note(&banana.id, "banana", "edited").unwrap();

    let order = |sort: NoteSort| -> Vec<String> {
        visible_notes(store.notes(), "", sort)
            .into_iter()
            .map(|note| note.title.clone())
            .collect()
    };
    assert_eq!(order(NoteSort::Newest), vec!["banana", "cherry", "Apple"]);
    assert_eq!(order(NoteSort::Oldest), vec!["Apple", "cherry", "banana"]);
    assert_eq!(order(NoteSort::Title), vec!["Apple", "banana", "cherry"]);
    assert_eq!(order(NoteSort::parse("bogus")), order(NoteSort::Newest));
}

#[test]
fn title_sort_is_non_decreasing_with_case_and_diacritics() {
    let (mut store, _) = store_with_clock();
    for title in ["zèbre", "Zebra", "éclair", "Eclair", "eclair", "apple", "Äpfel", "b"] {
        store.create_note(title, "").unwrap();
    }
    let sorted = visible_notes(store.notes(), "", NoteSort::Title);
    assert_eq!(sorted.len(), 8);
    for pair in sorted.windows(2) {
        assert_ne!(
            compare_titles(&pair[0].title, &pair[1].title),
            Ordering::Greater,
            "{} should not sort after {}",
            pair[0].title,
            pair[1].title
        );
    }
    let first_two: Vec<&str> = sorted[..2].iter().map(|n| n.title.as_str()).collect();
    assert_eq!(first_two, vec!["Äpfel", "apple"]);
}

#[test]
fn views_do_not_mutate_collections() {
    let (mut store, _) = store_with_clock();
    store.create_note("b", "").unwrap();
    store.create_note("a", "").unwrap();
    let before = store.notes().to_vec();
    let _ = visible_notes(store.notes(), "a", NoteSort::Title);
    assert_eq!(store.notes(), before.as_slice());
}

#[test]
fn pending_and_completed_partition_all() {
    let (mut store, _) = store_with_clock();
    for text in ["a", "b", "c", "d", "e"] {
        store.create_todo(text).unwrap();
    }
    let ids: Vec<_> = store.todos().iter().map(|t| t.id.clone()).collect();
    store.toggle_todo(&ids[1]);
    store.toggle_todo(&ids[3]);

    let set = |filter: TodoFilter| -> HashSet<String> {
        filter_todos(store.todos(), filter)
            .into_iter()
            .map(|t| t.id.to_string())
            .collect()
    };
    let pending = set(TodoFilter::Pending);
    let completed = set(TodoFilter::Completed);
    let all = set(TodoFilter::All);

    assert!(pending.is_disjoint(&completed));
    assert_eq!(&pending | &completed, all);
    assert_eq!(all.len(), 5);
    assert_eq!(completed.len(), 2);
}

#[test]
fn pay_rent_toggled_moves_to_completed() {
    let (mut store, _) = store_with_clock();
    let todo = store.create_todo("Pay rent").unwrap();
    store.toggle_todo(&todo.id);

    let completed = filter_todos(store.todos(), TodoFilter::Completed);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, todo.id);
    assert!(filter_todos(store.todos(), TodoFilter::Pending).is_empty());
}

#[test]
fn log_sort_orders_by_created_at() {
    let (mut store, clock) = store_with_clock();
    store.create_log("first").unwrap();
    clock.advance(Duration::minutes(2));
    store.create_log("second").unwrap();

    let texts = |sort: LogSort| -> Vec<String> {
        sort_logs(store.logs(), sort)
            .into_iter()
            .map(|e| e.text.clone())
            .collect()
    };
    assert_eq!(texts(LogSort::Newest), vec!["second", "first"]);
    assert_eq!(texts(LogSort::Oldest), vec!["first", "second"]);
    assert_eq!(LogSort::parse("anything"), LogSort::Newest);
}

#[test]
fn log_from_previous_calendar_day_reads_yesterday_with_original_time() {
    // 2026-10-10 14:05 IST
    let logged_at = Utc.with_ymd_and_hms(2026, 10, 10, 8, 35, 0).unwrap();
    let clock = Arc::new(FixedClock::new(logged_at));
    let mut store = WorkspaceStore::open_with_clock(MemoryKeyValueStore::new(), clock.clone());
    let entry = store.create_log("lunch").unwrap();

    clock.advance(Duration::days(1) + Duration::minutes(10));
    let now = store.now();
    assert_eq!(format_log_timestamp(entry.created_at, now), "Yesterday, 14:05");
}
