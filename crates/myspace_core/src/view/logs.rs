//! Log ordering.

use crate::model::log_entry::LogEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogSort {
    /// `created_at` descending.
    #[default]
    Newest,
    /// `created_at` ascending.
    Oldest,
}

impl LogSort {
    /// Only `oldest` flips the order; anything else is newest-first.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("oldest") {
            Self::Oldest
        } else {
            Self::Newest
        }
    }
}

pub fn sort_logs(logs: &[LogEntry], sort: LogSort) -> Vec<&LogEntry> {
    let mut sorted: Vec<&LogEntry> = logs.iter().collect();
    match sort {
        LogSort::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        LogSort::Oldest => sorted.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
    sorted
}
