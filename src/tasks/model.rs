//! Task data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a task.
///
/// `Unknown` is the forward-compat arm: wire values this build has never
/// heard of land there instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Running,
    Completed,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// A single execution task, as shown in the sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID.
    pub id: Uuid,
    /// The prompt that started the task.
    pub prompt: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new running task.
    pub fn new(prompt: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.into(),
            status: TaskStatus::Running,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder: set status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_defaults() {
        let task = Task::new("Refactor the parser");
        assert_eq!(task.status, TaskStatus::Running);
        assert_eq!(task.prompt, "Refactor the parser");
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn status_serde_snake_case() {
        let json = serde_json::to_string(&TaskStatus::Running).unwrap();
        assert_eq!(json, "\"running\"");

        let parsed: TaskStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, TaskStatus::Completed);
    }

    #[test]
    fn unrecognized_status_parses_as_unknown() {
        let parsed: TaskStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(parsed, TaskStatus::Unknown);

        let parsed: TaskStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, TaskStatus::Unknown);
    }

    #[test]
    fn task_with_unrecognized_status_still_deserializes() {
        let task: Task = serde_json::from_value(serde_json::json!({
            "id": Uuid::new_v4(),
            "prompt": "Ship it",
            "status": "queued",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(task.status, TaskStatus::Unknown);
    }

    #[test]
    fn task_serde_roundtrip() {
        let task = Task::new("Write release notes").with_status(TaskStatus::Completed);
        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, task.id);
        assert_eq!(parsed.status, TaskStatus::Completed);
    }
}
