//! Domain model for the task collection.
//!
//! The task domain models validated task construction, partial updates, and
//! the closed priority and status classifications while keeping all
//! infrastructure concerns outside of the domain boundary.

mod description;
mod error;
mod ids;
mod priority;
mod status;
mod task;

pub use description::Description;
pub use error::{ParsePriorityError, ParseStatusError, TaskDomainError};
pub use ids::TaskId;
pub use priority::Priority;
pub use status::Status;
pub use task::{Task, TaskUpdate};
