pub mod assigner;
pub mod ordering;
pub mod project;
pub mod queue;

pub use assigner::{schedule, Schedule, Scheduler, Workload};
pub use ordering::order_projects;
pub use project::{Assignee, Assignment, Project};
pub use queue::WorkloadQueue;
