//! In-memory `ShellStore` backend for the demo shell and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::model::Session;
use crate::error::StoreError;
use crate::tasks::model::{Task, TaskStatus};

use super::traits::ShellStore;

#[derive(Default)]
struct Inner {
    tasks: HashMap<Uuid, Task>,
    sessions: HashMap<Uuid, Session>,
}

/// Keeps everything in process memory. Gone on restart, which is exactly
/// what the demo shell and tests want.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShellStore for MemoryStore {
    async fn insert_task(&self, task: &Task) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if inner.tasks.contains_key(&task.id) {
            return Err(StoreError::Duplicate {
                entity: "task",
                id: task.id,
            });
        }
        inner.tasks.insert(task.id, task.clone());
        Ok(())
    }

    async fn get_task(&self, id: Uuid) -> Result<Option<Task>, StoreError> {
        Ok(self.inner.read().await.tasks.get(&id).cloned())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let inner = self.inner.read().await;
        let mut tasks: Vec<Task> = inner.tasks.values().cloned().collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn update_task_status(&self, id: Uuid, status: TaskStatus) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let task = inner
            .tasks
            .get_mut(&id)
            .ok_or(StoreError::NotFound { entity: "task", id })?;
        task.status = status;
        task.updated_at = Utc::now();
        Ok(())
    }

    async fn insert_session(&self, session: &Session) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if inner.sessions.contains_key(&session.id) {
            return Err(StoreError::Duplicate {
                entity: "session",
                id: session.id,
            });
        }
        inner.sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn get_session(&self, id: Uuid) -> Result<Option<Session>, StoreError> {
        Ok(self.inner.read().await.sessions.get(&id).cloned())
    }

    async fn delete_session(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .sessions
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound {
                entity: "session",
                id,
            })
    }

    async fn prune_expired_sessions(&self, now: DateTime<Utc>) -> Result<usize, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.sessions.len();
        inner.sessions.retain(|_, s| !s.is_expired(now));
        Ok(before - inner.sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_and_get_task() {
        let store = MemoryStore::new();
        let task = Task::new("Write docs");
        store.insert_task(&task).await.unwrap();

        let loaded = store.get_task(task.id).await.unwrap().unwrap();
        assert_eq!(loaded.prompt, "Write docs");
    }

    #[tokio::test]
    async fn duplicate_task_insert_fails() {
        let store = MemoryStore::new();
        let task = Task::new("Write docs");
        store.insert_task(&task).await.unwrap();

        let err = store.insert_task(&task).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { entity: "task", .. }));
    }

    #[tokio::test]
    async fn list_tasks_newest_first() {
        let store = MemoryStore::new();
        let mut old = Task::new("old");
        old.created_at = Utc::now() - chrono::Duration::hours(1);
        let new = Task::new("new");
        store.insert_task(&old).await.unwrap();
        store.insert_task(&new).await.unwrap();

        let tasks = store.list_tasks().await.unwrap();
        assert_eq!(tasks[0].prompt, "new");
        assert_eq!(tasks[1].prompt, "old");
    }

    #[tokio::test]
    async fn update_status_bumps_updated_at() {
        let store = MemoryStore::new();
        let task = Task::new("Finish it");
        store.insert_task(&task).await.unwrap();

        store
            .update_task_status(task.id, TaskStatus::Completed)
            .await
            .unwrap();

        let loaded = store.get_task(task.id).await.unwrap().unwrap();
        assert_eq!(loaded.status, TaskStatus::Completed);
        assert!(loaded.updated_at >= task.updated_at);
    }

    #[tokio::test]
    async fn update_status_of_missing_task_fails() {
        let store = MemoryStore::new();
        let err = store
            .update_task_status(Uuid::new_v4(), TaskStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "task", .. }));
    }

    #[tokio::test]
    async fn session_lifecycle() {
        let store = MemoryStore::new();
        let session = Session::new(Uuid::new_v4(), chrono::Duration::hours(1));
        store.insert_session(&session).await.unwrap();

        assert!(store.get_session(session.id).await.unwrap().is_some());

        store.delete_session(session.id).await.unwrap();
        assert!(store.get_session(session.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn prune_removes_only_expired_sessions() {
        let store = MemoryStore::new();
        let live = Session::new(Uuid::new_v4(), chrono::Duration::hours(1));
        let dead = Session::new(Uuid::new_v4(), chrono::Duration::seconds(1));
        store.insert_session(&live).await.unwrap();
        store.insert_session(&dead).await.unwrap();

        let pruned = store
            .prune_expired_sessions(Utc::now() + chrono::Duration::minutes(5))
            .await
            .unwrap();

        assert_eq!(pruned, 1);
        assert!(store.get_session(live.id).await.unwrap().is_some());
        assert!(store.get_session(dead.id).await.unwrap().is_none());
    }
}
