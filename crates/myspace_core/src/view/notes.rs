//! Note search, ordering and card preview.

use crate::model::note::Note;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Preview length of note content on cards, in characters.
pub const CONTENT_PREVIEW_MAX_CHARS: usize = 200;
const ELLIPSIS: &str = "...";

/// Note list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteSort {
    /// `updated_at` descending.
    #[default]
    Newest,
    /// `updated_at` ascending.
    Oldest,
    /// Title ascending, case- and accent-insensitive first.
    Title,
}

impl NoteSort {
    /// Parses a UI selector value; unknown values fall back to `Newest`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "oldest" => Self::Oldest,
            "title" => Self::Title,
            _ => Self::Newest,
        }
    }
}

/// Notes whose title or content contains `query`, ignoring case.
///
/// Only an empty query matches everything; whitespace is matched literally.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.is_empty() {
        return notes.iter().collect();
    }
    let needle = query.to_lowercase();

    notes
        .iter()
        .filter(|note| {
            note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Orders notes in place according to `sort`.
pub fn sort_notes(notes: &mut [&Note], sort: NoteSort) {
    match sort {
        NoteSort::Newest => notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        NoteSort::Oldest => notes.sort_by(|a, b| a.updated_at.cmp(&b.updated_at)),
        NoteSort::Title => notes.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
}

/// Search-filtered and sorted notes, as listed in the notes view.
pub fn visible_notes<'a>(notes: &'a [Note], query: &str, sort: NoteSort) -> Vec<&'a Note> {
    let mut visible = filter_notes(notes, query);
    sort_notes(&mut visible, sort);
    visible
}

/// Locale-style title comparison.
///
/// Letters compare by base form first (`é` sorts with `e`, `B` with `b`);
/// accents break ties next, then lowercase before uppercase, then raw text.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

/// Card preview: content over 200 characters is cut and gets `...`.
pub fn truncate_content(content: &str) -> String {
    match content.char_indices().nth(CONTENT_PREVIEW_MAX_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &content[..cut]),
        None => content.to_string(),
    }
}

fn primary_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn secondary_key(value: &str) -> String {
    value.nfd().flat_map(char::to_lowercase).collect()
}

fn tertiary_key(value: &str) -> Vec<bool> {
    value.chars().map(char::is_uppercase).collect()
}
