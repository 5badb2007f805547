use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A wellness task tracked by the task service.
///
/// Tasks are addressed by `id`, which is assigned from the store's counter at
/// creation and never reused. `category` is free-form here; only the item
/// service restricts categories to [`super::Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u64,
    pub category: String,
    pub description: String,
    /// Uninterpreted ISO-8601 string as submitted by the client.
    pub deadline: Option<String>,
    pub completed: bool,
    pub notes: Option<String>,
    /// Reference to an uploaded attachment, e.g. `uploads/3_plan.pdf`.
    pub file: Option<String>,
    pub created_at: NaiveDateTime,
    /// Set each time the task is completed.
    pub completed_at: Option<NaiveDateTime>,
    /// Reserved. Nothing sets it yet, but the `archived` list view reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl Task {
    pub fn is_archived(&self) -> bool {
        self.archived.unwrap_or(false)
    }

    /// Case-insensitive substring match against description or notes.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.description.to_lowercase().contains(&needle)
            || self
                .notes
                .as_deref()
                .is_some_and(|notes| notes.to_lowercase().contains(&needle))
    }

    pub fn has_notes(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// Which lifecycle slice of the task list to show.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShowFilter {
    #[default]
    Active,
    Completed,
    Archived,
}

impl ShowFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }

    pub fn includes(&self, task: &Task) -> bool {
        match self {
            Self::Active => !task.completed && !task.is_archived(),
            Self::Completed => task.completed,
            Self::Archived => task.is_archived(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Deadline ascending, tasks without a deadline first.
    Date,
    Category,
    /// Completed tasks first.
    Status,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Category => "category",
            Self::Status => "status",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "date" => Some(Self::Date),
            "category" => Some(Self::Category),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    /// Stable sort, so ties keep their filtered order.
    pub fn apply(&self, tasks: &mut [Task]) {
        match self {
            Self::Date => tasks.sort_by(|a, b| {
                let a = a.deadline.as_deref().unwrap_or("");
                let b = b.deadline.as_deref().unwrap_or("");
                a.cmp(b)
            }),
            Self::Category => tasks.sort_by(|a, b| a.category.cmp(&b.category)),
            Self::Status => tasks.sort_by(|a, b| b.completed.cmp(&a.completed)),
        }
    }
}

/// Filters for listing tasks. Filters apply first, then the sort.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<SortOrder>,
    pub show: ShowFilter,
}

impl TaskQuery {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(category) = &self.category {
            if &task.category != category {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !task.matches_search(search) {
                return false;
            }
        }
        self.show.includes(task)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskInput {
    pub category: String,
    pub description: String,
    pub deadline: Option<String>,
    pub notes: Option<String>,
}

/// Full overwrite of a task's editable fields. `file` is handled separately
/// so an update without an attachment keeps the existing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskInput {
    pub category: String,
    pub description: String,
    pub deadline: Option<String>,
    pub notes: Option<String>,
}
