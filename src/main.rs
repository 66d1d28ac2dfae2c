use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use taskdeck::auth::model::{Provider, QuotaStatus, Session};
use taskdeck::config::ShellConfig;
use taskdeck::events::{EventSink, TracingSink};
use taskdeck::nav::{HistoryNavigator, Navigator};
use taskdeck::onboarding::OnboardingOverlay;
use taskdeck::store::{MemoryStore, ShellStore};
use taskdeck::tasks::list_item::{execution_path, render_sidebar, StatusIcon, TaskListItem};
use taskdeck::tasks::model::{Task, TaskStatus};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ShellConfig::default();
    eprintln!("🗂  taskdeck v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Demo shell — onboarding, sidebar, and quota walkthrough\n");

    let events: Arc<dyn EventSink> = Arc::new(TracingSink);
    let navigator = Arc::new(HistoryNavigator::default());
    let store = MemoryStore::new();

    // First run: show the overlay once, unmount after completion.
    let dismissed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&dismissed);
    let overlay = OnboardingOverlay::new(Arc::clone(&events), move || {
        flag.store(true, Ordering::SeqCst);
    });
    overlay.mount();
    for panel in overlay.render().panels {
        eprintln!("   [{}] {} | {}", panel.tone, panel.title, panel.description);
    }
    overlay.complete();
    eprintln!("   Onboarding dismissed: {}\n", dismissed.load(Ordering::SeqCst));

    // Seed a few tasks and render the sidebar.
    let running = Task::new("Migrate the settings screen to the new layout");
    let done = Task::new("Fix flaky login test").with_status(TaskStatus::Completed);
    store.insert_task(&running).await?;
    store.insert_task(&done).await?;

    TaskListItem::new(&running).click(navigator.as_ref());
    let tasks = store.list_tasks().await?;
    for row in render_sidebar(&tasks, &navigator.current_path(), config.sidebar_label_chars) {
        let icon = match row.icon {
            Some(StatusIcon::Spinner) => "◐",
            Some(StatusIcon::Check) => "✓",
            None => " ",
        };
        let marker = if row.active { ">" } else { " " };
        eprintln!("   {marker} {icon} {} ({})", row.label, row.target);
    }

    // Session and quota odds and ends.
    let session = Session::new(Uuid::new_v4(), chrono::Duration::hours(8))
        .with_device("demo-host", "Demo machine");
    store.insert_session(&session).await?;
    let pruned = store.prune_expired_sessions(chrono::Utc::now()).await?;
    tracing::debug!(pruned, interval = ?config.session_prune_interval, "Session sweep");
    let quota = QuotaStatus::new(7, 10);
    eprintln!(
        "\n   Provider: {} | quota {}/{} ({} left) | session expires {}",
        Provider::Anthropic,
        quota.calls_used,
        quota.calls_limit,
        quota.remaining,
        session.expires_at.format("%H:%M:%S")
    );
    eprintln!("   Current route: {}", navigator.current_path());
    assert_eq!(navigator.current_path(), execution_path(running.id));

    Ok(())
}
