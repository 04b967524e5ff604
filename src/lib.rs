//! Taskito: a single-user, in-memory command-line task manager.
//!
//! A menu-driven loop lets a user create, list, update, and delete tasks,
//! each holding a description, priority, and status. State lives only in
//! process memory for the duration of one run.
//!
//! # Architecture
//!
//! Taskito follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the task store and console I/O
//! - **Adapters**: Concrete implementations of ports (in-memory store,
//!   terminal)
//!
//! # Modules
//!
//! - [`task`]: Task model, repository contract, and in-memory store
//! - [`console`]: Menu state machine and interactive controller

pub mod console;
pub mod task;
