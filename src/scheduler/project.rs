use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    /// Higher is more urgent.
    pub priority: i64,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

impl Project {
    pub fn new(id: u64, name: impl Into<String>, priority: i64) -> Self {
        Self {
            id,
            name: name.into(),
            priority,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: u64,
    pub name: String,
}

impl Assignee {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A project handed to the assignee that will work on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub project: Project,
    pub assignee: Assignee,
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (Priority: {}) Assigned To {} - Deadline: ",
            self.project.name, self.project.priority, self.assignee.name
        )?;
        match self.project.deadline {
            Some(deadline) => write!(f, "{}", deadline.format("%Y-%m-%d %H:%M:%S")),
            None => write!(f, "none"),
        }
    }
}
