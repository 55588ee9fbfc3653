//! JSON request documents.
//!
//! A request names its projects and assignees explicitly. A field that is
//! missing or `null` is rejected, while an empty array is a valid (if
//! uninteresting) input, so "nobody to assign to" and "forgot to say who"
//! stay distinguishable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::scheduler::{Assignee, Project};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
    #[serde(default)]
    pub assignees: Option<Vec<Assignee>>,
}

impl ScheduleRequest {
    pub fn new(projects: Vec<Project>, assignees: Vec<Assignee>) -> Self {
        Self {
            projects: Some(projects),
            assignees: Some(assignees),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a request from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "Loaded schedule request");
        Self::from_json_str(&data)
    }

    /// Split into project and assignee lists, rejecting absent fields.
    pub fn into_parts(self) -> Result<(Vec<Project>, Vec<Assignee>)> {
        match (self.projects, self.assignees) {
            (Some(projects), Some(assignees)) => Ok((projects, assignees)),
            _ => Err(SchedulerError::invalid_input(
                "projects and assignees cannot be absent",
            )),
        }
    }
}
