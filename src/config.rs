//! Configuration types.

use std::time::Duration;

/// Shell configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Application name for identification.
    pub name: String,
    /// How many characters of a task prompt the sidebar shows before
    /// truncating.
    pub sidebar_label_chars: usize,
    /// Interval between expired-session sweeps.
    pub session_prune_interval: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            name: "taskdeck".to_string(),
            sidebar_label_chars: 48,
            session_prune_interval: Duration::from_secs(300), // 5 minutes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ShellConfig::default();
        assert_eq!(cfg.name, "taskdeck");
        assert_eq!(cfg.sidebar_label_chars, 48);
        assert_eq!(cfg.session_prune_interval, Duration::from_secs(300));
    }
}
