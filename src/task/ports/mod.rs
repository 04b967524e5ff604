//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by the console layer.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
