use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::config::UndatedPolicy;
use crate::scheduler::project::Project;

/// Compare two deadlines with `None` placed according to `policy`.
pub fn compare_deadlines(
    a: Option<&DateTime<Utc>>,
    b: Option<&DateTime<Utc>>,
    policy: UndatedPolicy,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => match policy {
            UndatedPolicy::Last => Ordering::Greater,
            UndatedPolicy::First => Ordering::Less,
        },
        (Some(_), None) => match policy {
            UndatedPolicy::Last => Ordering::Less,
            UndatedPolicy::First => Ordering::Greater,
        },
    }
}

/// Scheduling order of two projects: higher priority first, then earlier
/// deadline. Returns `Equal` when neither key separates them.
pub fn compare_projects(a: &Project, b: &Project, policy: UndatedPolicy) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| compare_deadlines(a.deadline.as_ref(), b.deadline.as_ref(), policy))
}

/// Sort projects into scheduling order.
///
/// Projects that compare equal keep their input order, so the result is a
/// total order over the input positions.
pub fn order_projects(projects: &[Project], policy: UndatedPolicy) -> Vec<&Project> {
    let mut ordered: Vec<(usize, &Project)> = projects.iter().enumerate().collect();
    ordered.sort_by(|(ia, a), (ib, b)| compare_projects(a, b, policy).then(ia.cmp(ib)));
    ordered.into_iter().map(|(_, p)| p).collect()
}
