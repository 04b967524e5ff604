//! Task management for Taskito.
//!
//! This module implements the task collection: creating tasks with
//! repository-assigned monotonic identifiers, listing them in insertion
//! order, looking them up by identifier or description, applying partial
//! updates, and deleting them. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
