//! Todo status filter.

use crate::model::todo::Todo;

/// Todo list filter. The dashboard opens on `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    Pending,
    Completed,
    All,
}

impl TodoFilter {
    /// Parses a UI selector value; unknown values show everything.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::All => "all",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::Pending => !todo.completed,
            Self::Completed => todo.completed,
            Self::All => true,
        }
    }

    /// Noun shown next to the filtered count (`3 pending`, `2 done`, `5 tasks`).
    pub fn count_label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "done",
            Self::All => "tasks",
        }
    }
}

pub fn filter_todos(todos: &[Todo], filter: TodoFilter) -> Vec<&Todo> {
    todos.iter().filter(|todo| filter.matches(todo)).collect()
}

pub fn pending_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}
