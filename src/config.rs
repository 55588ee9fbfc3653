use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Where projects without a deadline sort relative to dated projects of the
/// same priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum UndatedPolicy {
    /// A missing deadline counts as the latest possible deadline.
    #[default]
    Last,
    /// A missing deadline sorts ahead of every dated project.
    First,
}

/// Key used to pick between assignees carrying the same workload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AssigneeTieBreak {
    /// Position in the assignee list passed by the caller.
    #[default]
    InputOrder,
    /// Lowest assignee id first; input position breaks any remaining tie.
    Id,
}

/// What to do when there are projects to schedule but nobody to take them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyAssigneePolicy {
    /// Fail the call with `InvalidInput`.
    #[default]
    Reject,
    /// Succeed with no assignments and report every project as unassigned.
    LeaveUnassigned,
}

/// Policies applied by [`crate::scheduler::Scheduler`].
///
/// The defaults give the documented contract: undated projects last,
/// workload ties broken by input order, and an error when no assignees are
/// supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub undated: UndatedPolicy,
    pub tie_break: AssigneeTieBreak,
    pub empty_assignees: EmptyAssigneePolicy,
}

impl SchedulerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_undated(mut self, undated: UndatedPolicy) -> Self {
        self.undated = undated;
        self
    }

    pub fn with_tie_break(mut self, tie_break: AssigneeTieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_empty_assignees(mut self, policy: EmptyAssigneePolicy) -> Self {
        self.empty_assignees = policy;
        self
    }
}
