//! Per-session UI state that the page widgets share.
//!
//! These replace page-level globals: each widget that needs the theme or the
//! install prompt is handed the state object explicitly.

mod install;
mod theme;

pub use install::{InstallState, PromptOutcome};
pub use theme::{Theme, ThemeState};
