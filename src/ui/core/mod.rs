//! Core UI functionality for the Hazy application.
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait
//! - [`context`] - Read-only state passed to components while rendering
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background request handling
//!
//! Components turn key presses into [`Action`]s. The app component applies
//! them, starting remote operations through the [`TaskManager`], whose
//! completions come back as further actions on the same loop.

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use context::ViewContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
