pub mod config;
pub mod error;
pub mod input;
pub mod scheduler;

pub use config::{AssigneeTieBreak, EmptyAssigneePolicy, SchedulerConfig, UndatedPolicy};
pub use error::{Result, SchedulerError};
pub use scheduler::{schedule, Assignee, Assignment, Project, Schedule, Scheduler};
