//! Application layer logic for projectbot.
//!
//! This crate wires the pure task list to its persistence and configuration,
//! and is what the interactive shell talks to.

pub mod config;
pub mod persistence;
pub mod service;

// Re-exports for convenience
pub use config::{ProjectConfig, ReminderConfig, StorageConfig};
pub use persistence::TaskPersistence;
pub use service::{TaskService, TaskServiceError};
