//! Navigation collaborator.
//!
//! The shell core never owns routing. It reads the current path and requests
//! navigation through this seam; what a path change actually does is the
//! host's business.

use std::sync::RwLock;

/// Read/write access to the application's navigation state.
pub trait Navigator: Send + Sync {
    /// The path currently displayed.
    fn current_path(&self) -> String;

    /// Request navigation to a path. Fire-and-forget from the caller's view;
    /// navigating to the current path is a no-op decided here, not by callers.
    fn navigate(&self, path: &str);
}

/// In-process navigator holding a single current path.
#[derive(Debug)]
pub struct HistoryNavigator {
    path: RwLock<String>,
}

impl HistoryNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            path: RwLock::new(initial.into()),
        }
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for HistoryNavigator {
    fn current_path(&self) -> String {
        self.path
            .read()
            .map(|p| p.clone())
            .unwrap_or_else(|_| "/".to_string())
    }

    fn navigate(&self, path: &str) {
        if let Ok(mut current) = self.path.write() {
            if *current == path {
                return;
            }
            *current = path.to_string();
        }
    }
}
