//! Onboarding overlay — the one-shot first-run modal.
//!
//! The overlay itself keeps no completion guard: every `complete()` call
//! emits its event and fires the callback again. Exactly-once semantics are
//! the caller's responsibility (the shell unmounts the overlay after the
//! first completion).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::events::{EventSink, LogEvent};

/// Categorical accent tone for a feature panel. Fixed palette of four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelTone {
    Blue,
    Green,
    Purple,
    Amber,
}

impl std::fmt::Display for PanelTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Amber => "amber",
        };
        write!(f, "{s}")
    }
}

/// One static, non-interactive feature description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturePanel {
    pub title: &'static str,
    pub description: &'static str,
    pub tone: PanelTone,
}

/// The four panels shown on first run. Static configuration, not computed.
pub fn feature_panels() -> [FeaturePanel; 4] {
    [
        FeaturePanel {
            title: "Parallel tasks",
            description: "Kick off several tasks at once and watch them run side by side.",
            tone: PanelTone::Blue,
        },
        FeaturePanel {
            title: "Live execution view",
            description: "Follow every step of a task as it happens, tool calls included.",
            tone: PanelTone::Green,
        },
        FeaturePanel {
            title: "Bring your own keys",
            description: "Use your Anthropic or AWS Bedrock credentials; secrets stay on this machine.",
            tone: PanelTone::Purple,
        },
        FeaturePanel {
            title: "Usage at a glance",
            description: "See remaining quota and reset times without leaving the app.",
            tone: PanelTone::Amber,
        },
    ]
}

/// Render state for the overlay.
#[derive(Debug, Clone)]
pub struct OverlayRender {
    /// Full-viewport backdrop; blocks the content underneath until dismissed.
    pub backdrop: bool,
    pub panels: [FeaturePanel; 4],
    pub primary_label: &'static str,
}

/// The first-run modal. All operations are synchronous and infallible;
/// event emission is fire-and-forget and can never block completion.
pub struct OnboardingOverlay {
    events: Arc<dyn EventSink>,
    on_complete: Box<dyn Fn() + Send + Sync>,
}

impl OnboardingOverlay {
    pub fn new(events: Arc<dyn EventSink>, on_complete: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            events,
            on_complete: Box::new(on_complete),
        }
    }

    /// Called once when the overlay is shown.
    pub fn mount(&self) {
        self.events.emit(LogEvent::info("Onboarding wizard started"));
    }

    /// Current render state.
    pub fn render(&self) -> OverlayRender {
        OverlayRender {
            backdrop: true,
            panels: feature_panels(),
            primary_label: "Get started",
        }
    }

    /// The primary action. Emits the completion event, then invokes the
    /// caller's callback. No dedup: N calls mean N events and N invocations.
    pub fn complete(&self) {
        self.events.emit(LogEvent::info("Onboarding completed"));
        (self.on_complete)();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::events::{LogLevel, MemorySink};

    fn overlay_with_counter() -> (Arc<MemorySink>, Arc<AtomicUsize>, OnboardingOverlay) {
        let sink = Arc::new(MemorySink::new());
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let overlay = OnboardingOverlay::new(Arc::clone(&sink) as Arc<dyn EventSink>, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (sink, count, overlay)
    }

    #[test]
    fn mount_emits_exactly_one_started_event() {
        let (sink, _, overlay) = overlay_with_counter();
        overlay.mount();

        assert_eq!(sink.count(LogLevel::Info, "Onboarding wizard started"), 1);
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn mount_has_no_other_side_effects() {
        let (_, count, overlay) = overlay_with_counter();
        overlay.mount();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn complete_emits_event_and_invokes_callback() {
        let (sink, count, overlay) = overlay_with_counter();
        overlay.complete();

        assert_eq!(sink.count(LogLevel::Info, "Onboarding completed"), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn repeated_complete_refires_every_time() {
        let (sink, count, overlay) = overlay_with_counter();
        for _ in 0..3 {
            overlay.complete();
        }

        assert_eq!(sink.count(LogLevel::Info, "Onboarding completed"), 3);
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn renders_exactly_four_panels_with_content() {
        let (_, _, overlay) = overlay_with_counter();
        let render = overlay.render();

        assert!(render.backdrop);
        assert_eq!(render.panels.len(), 4);
        for panel in &render.panels {
            assert!(!panel.title.is_empty());
            assert!(!panel.description.is_empty());
        }
    }

    #[test]
    fn panel_tones_cover_the_fixed_palette() {
        let panels = feature_panels();
        let tones: Vec<PanelTone> = panels.iter().map(|p| p.tone).collect();
        for tone in [PanelTone::Blue, PanelTone::Green, PanelTone::Purple, PanelTone::Amber] {
            assert_eq!(tones.iter().filter(|t| **t == tone).count(), 1);
        }
    }

    #[test]
    fn tone_serde_snake_case() {
        let json = serde_json::to_string(&PanelTone::Purple).unwrap();
        assert_eq!(json, "\"purple\"");

        let parsed: PanelTone = serde_json::from_str("\"amber\"").unwrap();
        assert_eq!(parsed, PanelTone::Amber);
    }
}
