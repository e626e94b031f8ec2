//! Personal to-do list.
//!
//! Stored as a JSON array of tasks under [`STORAGE_KEY`].

#[cfg(test)]
#[path = "todo_test.rs"]
mod todo_test;

use serde::{Deserialize, Serialize};

use crate::store::Reducer;

pub const STORAGE_KEY: &str = "personal_todo_tasks_v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
}

/// The whole list, serialized as a bare array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    pub tasks: Vec<Task>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    Add { title: String, created_at: String },
    Toggle(u64),
    Rename { id: u64, title: String },
    Remove(u64),
    ClearCompleted,
}

impl TodoList {
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Id the next added task will receive, or `None` once ids are exhausted.
    #[must_use]
    pub fn next_id(&self) -> Option<u64> {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0).checked_add(1)
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}

impl Reducer for TodoList {
    type Action = TodoAction;

    fn reduce(&self, action: TodoAction) -> Option<Self> {
        let mut next = self.clone();
        match action {
            TodoAction::Add { title, created_at } => {
                let title = title.trim();
                if title.is_empty() {
                    return None;
                }
                let id = self.next_id()?;
                next.tasks.push(Task {
                    id,
                    title: title.to_owned(),
                    completed: false,
                    created_at,
                });
            }
            TodoAction::Toggle(id) => {
                let idx = self.position(id)?;
                next.tasks[idx].completed = !next.tasks[idx].completed;
            }
            TodoAction::Rename { id, title } => {
                let title = title.trim();
                if title.is_empty() {
                    return None;
                }
                let idx = self.position(id)?;
                title.clone_into(&mut next.tasks[idx].title);
            }
            TodoAction::Remove(id) => {
                let idx = self.position(id)?;
                next.tasks.remove(idx);
            }
            TodoAction::ClearCompleted => {
                if !self.tasks.iter().any(|t| t.completed) {
                    return None;
                }
                next.tasks.retain(|t| !t.completed);
            }
        }
        Some(next)
    }
}

// =============================================================================
// VIEWS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

#[must_use]
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

#[must_use]
pub fn active_tasks(tasks: &[Task]) -> Vec<Task> {
    filter_tasks(tasks, TaskFilter::Active)
}

#[must_use]
pub fn completed_tasks(tasks: &[Task]) -> Vec<Task> {
    filter_tasks(tasks, TaskFilter::Completed)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

#[must_use]
pub fn task_counts(tasks: &[Task]) -> TaskCounts {
    let completed = tasks.iter().filter(|t| t.completed).count();
    TaskCounts { total: tasks.len(), active: tasks.len() - completed, completed }
}
