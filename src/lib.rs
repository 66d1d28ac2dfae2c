//! taskdeck — headless core for the task-execution desktop shell.

pub mod auth;
pub mod config;
pub mod error;
pub mod events;
pub mod nav;
pub mod onboarding;
pub mod store;
pub mod tasks;
