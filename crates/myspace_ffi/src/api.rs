//! FFI use-case API for the Flutter dashboard.
//!
//! # Responsibility
//! - Expose the dashboard session as sync, use-case-level functions.
//! - Flatten records into display-ready items (labels pre-formatted).
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One workspace session per process; `workspace_open` replaces it.

use log::info;
use myspace_core::{
    core_version as core_version_inner, format_log_timestamp, format_relative_age,
    ping as ping_inner, pluralize, truncate_content,
    Clock, ClockReading, DashboardSession, LogSort, Notice, NoticeKind, NoteSort, RecordId,
    SqliteKeyValueStore, SystemClock, TodoFilter, WorkspaceConfig,
};
use std::sync::{Mutex, MutexGuard};

type Session = DashboardSession<SqliteKeyValueStore>;

static SESSION: Mutex<Option<Session>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// Safe to repeat with the same `level + log_dir`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let started = WorkspaceConfig::default()
        .log_to(&level, &log_dir)
        .and_then(|config| config.init_logging());
    match started {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Toast shown by the UI (`success|warning|error`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeItem {
    pub kind: String,
    pub message: String,
}

/// Result envelope for every mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// False when the session is closed or an error notice was produced.
    pub ok: bool,
    pub notices: Vec<NoticeItem>,
}

impl ActionResponse {
    fn from_notices(notices: Vec<Notice>) -> Self {
        Self {
            ok: notices.iter().all(|notice| notice.kind != NoticeKind::Error),
            notices: notices.into_iter().map(to_notice_item).collect(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            notices: vec![NoticeItem {
                kind: "error".to_string(),
                message: message.into(),
            }],
        }
    }
}

/// Note card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: String,
    pub title: String,
    /// Content cut to 200 characters for the card.
    pub preview: String,
    pub created_label: String,
    /// Present only when the note was edited after creation.
    pub updated_label: Option<String>,
}

/// Editor drafts after `note_begin_edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub editing_id: Option<String>,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    pub items: Vec<TodoItem>,
    /// Filter actually applied; unknown inputs resolve to `all`.
    pub filter: String,
    /// e.g. `3 pending`, `1 done`, `4 tasks`.
    pub count_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogItem {
    pub id: String,
    pub text: String,
    pub time_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsItem {
    pub notes_label: String,
    pub logs_label: String,
    pub pending_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockItem {
    pub time: String,
    pub date: String,
}

/// Opens (or replaces) the workspace backed by `db_path`.
///
/// `db_path` may be a file or an existing directory; an empty path keeps
/// data in memory for this process only.
#[flutter_rust_bridge::frb(sync)]
pub fn workspace_open(db_path: String) -> ActionResponse {
    let config = if db_path.trim().is_empty() {
        WorkspaceConfig::default()
    } else {
        WorkspaceConfig::with_db_path(db_path.trim())
    };

    match config.open_session() {
        Ok(session) => {
            *lock_session() = Some(session);
            info!("event=workspace_open module=ffi status=ok");
            ActionResponse::from_notices(Vec::new())
        }
        Err(err) => ActionResponse::failure(format!("workspace_open failed: {err}")),
    }
}

/// Drops the current session.
#[flutter_rust_bridge::frb(sync)]
pub fn workspace_close() {
    *lock_session() = None;
}

#[flutter_rust_bridge::frb(sync)]
pub fn note_save(title: String, content: String) -> ActionResponse {
    act(|session| {
        session.note_title = title;
        session.note_content = content;
        session.save_note()
    })
}

/// Loads a note into the editor; the draft is empty when the note is gone.
#[flutter_rust_bridge::frb(sync)]
pub fn note_begin_edit(id: String) -> NoteDraft {
    with_session(|session| {
        session.begin_edit(&RecordId::from(id));
        current_draft(session)
    })
    .unwrap_or_else(|_| NoteDraft {
        editing_id: None,
        title: String::new(),
        content: String::new(),
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn note_cancel_edit() -> ActionResponse {
    act(|session| {
        session.cancel_edit();
        Vec::new()
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn note_delete_request(id: String) -> ActionResponse {
    act(|session| {
        session.request_delete(&RecordId::from(id));
        Vec::new()
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn note_delete_confirm() -> ActionResponse {
    act(|session| session.confirm_delete())
}

#[flutter_rust_bridge::frb(sync)]
pub fn note_delete_cancel() -> ActionResponse {
    act(|session| {
        session.cancel_delete();
        Vec::new()
    })
}

/// Escape key handler.
#[flutter_rust_bridge::frb(sync)]
pub fn escape_pressed() -> ActionResponse {
    act(|session| {
        session.escape();
        Vec::new()
    })
}

/// Search-filtered, sorted note cards. Unknown `sort` values mean newest.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list(query: String, sort: String) -> Vec<NoteItem> {
    with_session(|session| {
        session.search_query = query;
        session.note_sort = NoteSort::parse(&sort);
        let now = session.store().now();
        session
            .visible_notes()
            .into_iter()
            .map(|note| NoteItem {
                id: note.id.to_string(),
                title: note.title.clone(),
                preview: truncate_content(&note.content),
                created_label: format_relative_age(note.created_at, now),
                updated_label: note
                    .is_edited()
                    .then(|| format_relative_age(note.updated_at, now)),
            })
            .collect()
    })
    .unwrap_or_default()
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(text: String) -> ActionResponse {
    act(|session| {
        session.todo_input = text;
        session.add_todo()
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle(id: String) -> ActionResponse {
    act(|session| session.toggle_todo(&RecordId::from(id)))
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: String) -> ActionResponse {
    act(|session| session.delete_todo(&RecordId::from(id)))
}

/// Todos for `filter` (`pending|completed|all`).
#[flutter_rust_bridge::frb(sync)]
pub fn todos_list(filter: String) -> TodoListResponse {
    with_session(|session| {
        session.todo_filter = TodoFilter::parse(&filter);
        let items: Vec<TodoItem> = session
            .visible_todos()
            .into_iter()
            .map(|todo| TodoItem {
                id: todo.id.to_string(),
                text: todo.text.clone(),
                completed: todo.completed,
            })
            .collect();
        let count_label = format!("{} {}", items.len(), session.todo_filter.count_label());
        TodoListResponse {
            items,
            filter: session.todo_filter.as_str().to_string(),
            count_label,
        }
    })
    .unwrap_or_else(|_| TodoListResponse {
        items: Vec::new(),
        filter: String::new(),
        count_label: String::new(),
    })
}

/// Adds a log entry; text beyond 200 characters is cut.
#[flutter_rust_bridge::frb(sync)]
pub fn log_add(text: String) -> ActionResponse {
    act(|session| {
        session.set_log_input(&text);
        session.add_log()
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn log_delete(id: String) -> ActionResponse {
    act(|session| session.delete_log(&RecordId::from(id)))
}

/// Clears every log entry. The caller confirms with the user first.
#[flutter_rust_bridge::frb(sync)]
pub fn logs_clear() -> ActionResponse {
    act(|session| session.clear_logs())
}

#[flutter_rust_bridge::frb(sync)]
pub fn logs_list(sort: String) -> Vec<LogItem> {
    with_session(|session| {
        session.log_sort = LogSort::parse(&sort);
        let now = session.store().now();
        session
            .visible_logs()
            .into_iter()
            .map(|entry| LogItem {
                id: entry.id.to_string(),
                text: entry.text.clone(),
                time_label: format_log_timestamp(entry.created_at, now),
            })
            .collect()
    })
    .unwrap_or_default()
}

#[flutter_rust_bridge::frb(sync)]
pub fn workspace_stats() -> StatsItem {
    with_session(|session| {
        let stats = session.stats();
        StatsItem {
            notes_label: stats.notes_label(),
            logs_label: stats.logs_label(),
            pending_label: stats.pending_label(),
        }
    })
    .unwrap_or_else(|_| StatsItem {
        notes_label: pluralize(0, "note", "notes"),
        logs_label: pluralize(0, "log", "logs"),
        pending_label: "0 pending".to_string(),
    })
}

/// Date/time widget readout; the UI polls this once per second.
#[flutter_rust_bridge::frb(sync)]
pub fn clock_now() -> ClockItem {
    let now = with_session(|session| session.store().now())
        .unwrap_or_else(|_| SystemClock.now());
    let reading = ClockReading::at(now);
    ClockItem {
        time: reading.time,
        date: reading.date,
    }
}

fn act(f: impl FnOnce(&mut Session) -> Vec<Notice>) -> ActionResponse {
    match with_session(f) {
        Ok(notices) => ActionResponse::from_notices(notices),
        Err(message) => ActionResponse::failure(message),
    }
}

fn with_session<T>(f: impl FnOnce(&mut Session) -> T) -> Result<T, String> {
    let mut guard = lock_session();
    match guard.as_mut() {
        Some(session) => Ok(f(session)),
        None => Err("workspace is not open; call workspace_open first".to_string()),
    }
}

fn lock_session() -> MutexGuard<'static, Option<Session>> {
    SESSION
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn current_draft(session: &Session) -> NoteDraft {
    NoteDraft {
        editing_id: session.editing().map(ToString::to_string),
        title: session.note_title.clone(),
        content: session.note_content.clone(),
    }
}

fn to_notice_item(notice: Notice) -> NoticeItem {
    let kind = match notice.kind {
        NoticeKind::Success => "success",
        NoticeKind::Warning => "warning",
        NoticeKind::Error => "error",
    };
    NoticeItem {
        kind: kind.to_string(),
        message: notice.message,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, escape_pressed, init_logging, log_add, logs_clear, logs_list,
        note_begin_edit, note_delete_confirm, note_delete_request, note_save, notes_list, ping,
        todo_add, todo_toggle, todos_list, workspace_close, workspace_open, workspace_stats,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    // The session is process-global, so the whole flow lives in one test.
    #[test]
    fn dashboard_flow_persists_across_reopen() {
        let dir = tempfile::tempdir().expect("temp dir");
        let db_path = dir.path().to_str().expect("utf-8 path").to_string();
        assert!(workspace_open(db_path.clone()).ok);

        let empty = note_save(" ".to_string(), String::new());
        assert!(!empty.ok);
        assert_eq!(empty.notices[0].kind, "error");

        assert!(note_save("Groceries".to_string(), "milk, eggs".to_string()).ok);
        let cards = notes_list("MILK".to_string(), "newest".to_string());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].created_label, "just now");
        assert_eq!(cards[0].updated_label, None);

        let draft = note_begin_edit(cards[0].id.clone());
        assert_eq!(draft.editing_id.as_deref(), Some(cards[0].id.as_str()));
        assert_eq!(draft.title, "Groceries");
        assert!(escape_pressed().ok);

        assert!(todo_add("Pay rent".to_string()).ok);
        let silent = todo_add("   ".to_string());
        assert!(silent.ok);
        assert!(silent.notices.is_empty());
        let pending = todos_list("pending".to_string());
        assert_eq!(pending.count_label, "1 pending");
        assert!(todo_toggle(pending.items[0].id.clone()).ok);
        assert_eq!(todos_list("completed".to_string()).count_label, "1 done");
        let fallback = todos_list("archived".to_string());
        assert_eq!(fallback.filter, "all");
        assert_eq!(fallback.count_label, "1 tasks");

        assert!(log_add("stand-up".to_string()).ok);
        let logs = logs_list("newest".to_string());
        assert_eq!(logs.len(), 1);
        assert!(logs[0].time_label.starts_with("Today, "));

        let stats = workspace_stats();
        assert_eq!(stats.notes_label, "1 note");
        assert_eq!(stats.logs_label, "1 log");
        assert_eq!(stats.pending_label, "0 pending");

        workspace_close();
        assert!(!todo_add("closed".to_string()).ok);

        assert!(workspace_open(db_path).ok);
        assert_eq!(notes_list(String::new(), "title".to_string()).len(), 1);
        assert!(logs_clear().ok);
        assert!(logs_list("oldest".to_string()).is_empty());

        note_delete_request(cards[0].id.clone());
        assert!(note_delete_confirm().ok);
        assert!(notes_list(String::new(), String::new()).is_empty());
        workspace_close();
    }
}
