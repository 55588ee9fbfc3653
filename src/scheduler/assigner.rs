use std::collections::HashSet;

use serde::Serialize;

use crate::config::{EmptyAssigneePolicy, SchedulerConfig};
use crate::error::{Result, SchedulerError};
use crate::scheduler::ordering::order_projects;
use crate::scheduler::project::{Assignee, Assignment, Project};
use crate::scheduler::queue::WorkloadQueue;

/// Final workload of one assignee after a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workload {
    pub assignee: Assignee,
    pub projects: usize,
}

/// Full outcome of a scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// One entry per scheduled project, in scheduling order.
    pub assignments: Vec<Assignment>,
    /// Projects left without an assignee. Only populated under
    /// [`EmptyAssigneePolicy::LeaveUnassigned`].
    pub unassigned: Vec<Project>,
    /// Workload per assignee, in input order.
    pub workloads: Vec<Workload>,
}

impl Schedule {
    /// Difference between the busiest and the least busy assignee.
    pub fn imbalance(&self) -> usize {
        let max = self.workloads.iter().map(|w| w.projects).max();
        let min = self.workloads.iter().map(|w| w.projects).min();
        match (max, min) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        }
    }
}

/// Assigns projects to assignees, most urgent first, always to the assignee
/// with the fewest projects so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Assign every project to exactly one assignee.
    ///
    /// # Errors
    ///
    /// An empty project list always succeeds. Otherwise returns
    /// [`SchedulerError::InvalidInput`] if ids are duplicated, or if there are
    /// no assignees and the configured policy is [`EmptyAssigneePolicy::Reject`].
    pub fn schedule(
        &self,
        projects: &[Project],
        assignees: &[Assignee],
    ) -> Result<Vec<Assignment>> {
        self.plan(projects, assignees).map(|plan| plan.assignments)
    }

    /// Same as [`Scheduler::schedule`], also reporting unassigned projects and
    /// final workloads.
    pub fn plan(&self, projects: &[Project], assignees: &[Assignee]) -> Result<Schedule> {
        if projects.is_empty() {
            return Ok(Schedule {
                workloads: assignees
                    .iter()
                    .map(|assignee| Workload {
                        assignee: assignee.clone(),
                        projects: 0,
                    })
                    .collect(),
                ..Schedule::default()
            });
        }

        validate_unique_ids(projects, assignees)?;
        let ordered = order_projects(projects, self.config.undated);

        let Some(mut queue) = WorkloadQueue::new(assignees, self.config.tie_break) else {
            return match self.config.empty_assignees {
                EmptyAssigneePolicy::Reject => Err(SchedulerError::invalid_input(
                    "cannot assign projects without any assignees",
                )),
                EmptyAssigneePolicy::LeaveUnassigned => {
                    tracing::warn!(
                        projects = projects.len(),
                        "No assignees available, leaving projects unassigned"
                    );
                    Ok(Schedule {
                        unassigned: ordered.into_iter().cloned().collect(),
                        ..Schedule::default()
                    })
                }
            };
        };

        let mut assignments = Vec::with_capacity(ordered.len());
        for project in ordered {
            let assignee = queue.assign_next();
            tracing::debug!(
                project_id = project.id,
                priority = project.priority,
                assignee_id = assignee.id,
                "Project assigned"
            );
            assignments.push(Assignment {
                project: project.clone(),
                assignee: assignee.clone(),
            });
        }

        let workloads = queue
            .workloads()
            .into_iter()
            .map(|(assignee, projects)| Workload {
                assignee: assignee.clone(),
                projects,
            })
            .collect();

        tracing::info!(
            projects = projects.len(),
            assignees = assignees.len(),
            "Scheduling complete"
        );

        Ok(Schedule {
            assignments,
            unassigned: Vec::new(),
            workloads,
        })
    }
}

/// Schedule with the default configuration: undated projects last, ties
/// broken by input order, and an error when nobody can take the work.
pub fn schedule(projects: &[Project], assignees: &[Assignee]) -> Result<Vec<Assignment>> {
    Scheduler::default().schedule(projects, assignees)
}

fn validate_unique_ids(projects: &[Project], assignees: &[Assignee]) -> Result<()> {
    let mut seen = HashSet::with_capacity(projects.len());
    if let Some(dup) = projects.iter().find(|p| !seen.insert(p.id)) {
        return Err(SchedulerError::invalid_input(format!(
            "duplicate project id {}",
            dup.id
        )));
    }

    let mut seen = HashSet::with_capacity(assignees.len());
    if let Some(dup) = assignees.iter().find(|a| !seen.insert(a.id)) {
        return Err(SchedulerError::invalid_input(format!(
            "duplicate assignee id {}",
            dup.id
        )));
    }

    Ok(())
}
