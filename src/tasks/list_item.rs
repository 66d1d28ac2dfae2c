//! Sidebar conversation-list item.
//!
//! A row is a pure function of `(task, current_path)`: active state and the
//! status icon are recomputed on every render, never cached. Clicking
//! requests navigation to the task's execution route; whether that is a
//! no-op is the navigator's call.

use uuid::Uuid;

use crate::nav::Navigator;

use super::model::{Task, TaskStatus};

/// Route prefix for task execution views.
const EXECUTION_PREFIX: &str = "/execution";

/// Derive the execution route for a task.
pub fn execution_path(id: Uuid) -> String {
    format!("{EXECUTION_PREFIX}/{id}")
}

/// Status indicator shown on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    /// Spinning indicator — task is running.
    Spinner,
    /// Check indicator — task is completed.
    Check,
}

/// Everything the host needs to draw one sidebar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemRender {
    /// Display label (truncated prompt).
    pub label: String,
    /// Navigation target for the row.
    pub target: String,
    /// Whether this row is the currently-viewed task.
    pub active: bool,
    /// Status indicator, if the status has one.
    pub icon: Option<StatusIcon>,
}

/// A sidebar row for one task.
pub struct TaskListItem<'a> {
    task: &'a Task,
    label_chars: usize,
}

/// Default prompt truncation for rows built without a [`crate::config::ShellConfig`].
const DEFAULT_LABEL_CHARS: usize = 48;

impl<'a> TaskListItem<'a> {
    pub fn new(task: &'a Task) -> Self {
        Self {
            task,
            label_chars: DEFAULT_LABEL_CHARS,
        }
    }

    /// Builder: set the label truncation length.
    pub fn with_label_chars(mut self, chars: usize) -> Self {
        self.label_chars = chars;
        self
    }

    /// Icon for this task's status. Total over all statuses; unknown ones
    /// simply get no icon.
    pub fn status_icon(&self) -> Option<StatusIcon> {
        match self.task.status {
            TaskStatus::Running => Some(StatusIcon::Spinner),
            TaskStatus::Completed => Some(StatusIcon::Check),
            TaskStatus::Unknown => None,
        }
    }

    /// Compute the row's render state against the current path.
    pub fn render(&self, current_path: &str) -> ListItemRender {
        let target = execution_path(self.task.id);
        ListItemRender {
            label: truncate_label(&self.task.prompt, self.label_chars),
            active: current_path == target,
            icon: self.status_icon(),
            target,
        }
    }

    /// Navigate to this task's execution view. One call, one navigation;
    /// no already-active check here.
    pub fn click(&self, navigator: &dyn Navigator) {
        navigator.navigate(&execution_path(self.task.id));
    }
}

/// Render a full sidebar: one row per task, in the order given.
pub fn render_sidebar(tasks: &[Task], current_path: &str, label_chars: usize) -> Vec<ListItemRender> {
    tasks
        .iter()
        .map(|task| {
            TaskListItem::new(task)
                .with_label_chars(label_chars)
                .render(current_path)
        })
        .collect()
}

fn truncate_label(prompt: &str, max_chars: usize) -> String {
    if prompt.chars().count() <= max_chars {
        return prompt.to_string();
    }
    let head: String = prompt.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{head}…")
}
