//! `ShellStore` trait — async interface for task and session persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::model::Session;
use crate::error::StoreError;
use crate::tasks::model::{Task, TaskStatus};

/// Backend-agnostic store covering tasks and sessions.
#[async_trait]
pub trait ShellStore: Send + Sync {
    // ── Tasks ───────────────────────────────────────────────────────

    /// Insert a new task.
    async fn insert_task(&self, task: &Task) -> Result<(), StoreError>;

    /// Get a task by ID.
    async fn get_task(&self, id: Uuid) -> Result<Option<Task>, StoreError>;

    /// All tasks, newest first.
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError>;

    /// Update a task's status, bumping `updated_at`.
    async fn update_task_status(&self, id: Uuid, status: TaskStatus) -> Result<(), StoreError>;

    // ── Sessions ────────────────────────────────────────────────────

    /// Insert a session created at login.
    async fn insert_session(&self, session: &Session) -> Result<(), StoreError>;

    /// Get a session by ID.
    async fn get_session(&self, id: Uuid) -> Result<Option<Session>, StoreError>;

    /// Delete a session (logout).
    async fn delete_session(&self, id: Uuid) -> Result<(), StoreError>;

    /// Remove every session expired as of `now`. Returns how many went.
    async fn prune_expired_sessions(&self, now: DateTime<Utc>) -> Result<usize, StoreError>;
}
