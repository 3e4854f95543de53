//! Presentation layer: presenters turn engine state into view models,
//! renderers (console and TUI) turn view models into output.

pub mod console;
pub mod presenters;
pub mod tui;
pub mod view_models;

/// Title shown in the page header.
pub const APP_TITLE: &str = "Ignite Feed";
