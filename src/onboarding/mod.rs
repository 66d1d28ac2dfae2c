//! First-run onboarding overlay.

pub mod overlay;

pub use overlay::{feature_panels, FeaturePanel, OnboardingOverlay, OverlayRender, PanelTone};
