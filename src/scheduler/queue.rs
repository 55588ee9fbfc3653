use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::config::AssigneeTieBreak;
use crate::scheduler::project::Assignee;

/// Heap entry for one assignee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    workload: usize,
    rank: u64,
    index: usize,
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse every key to pop the least loaded.
        other
            .workload
            .cmp(&self.workload)
            .then_with(|| other.rank.cmp(&self.rank))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of assignees keyed by `(workload, tie-break key)`.
///
/// Lives for a single scheduling call. Assignees are referred to by their
/// position in the slice the queue was built from. The least loaded slot is
/// held outside the heap, so a queue always has someone to hand work to.
#[derive(Debug)]
pub struct WorkloadQueue<'a> {
    assignees: &'a [Assignee],
    next: Slot,
    rest: BinaryHeap<Slot>,
    workloads: Vec<usize>,
}

impl<'a> WorkloadQueue<'a> {
    /// Build a queue with every assignee at zero workload. Returns `None`
    /// when there are no assignees.
    pub fn new(assignees: &'a [Assignee], tie_break: AssigneeTieBreak) -> Option<Self> {
        let mut rest: BinaryHeap<Slot> = assignees
            .iter()
            .enumerate()
            .map(|(index, assignee)| Slot {
                workload: 0,
                rank: match tie_break {
                    AssigneeTieBreak::InputOrder => index as u64,
                    AssigneeTieBreak::Id => assignee.id,
                },
                index,
            })
            .collect();
        let next = rest.pop()?;

        Some(Self {
            assignees,
            next,
            rest,
            workloads: vec![0; assignees.len()],
        })
    }

    /// Take the least loaded assignee and charge it one project.
    pub fn assign_next(&mut self) -> &'a Assignee {
        let chosen = self.next.index;
        self.next.workload += 1;
        self.workloads[chosen] = self.next.workload;

        // Swap in whoever now ranks ahead; PeekMut restores the heap on drop.
        if let Some(mut top) = self.rest.peek_mut() {
            if *top > self.next {
                std::mem::swap(&mut *top, &mut self.next);
            }
        }

        let assignees = self.assignees;
        &assignees[chosen]
    }

    /// Workload per assignee, in input order.
    pub fn workloads(&self) -> Vec<(&'a Assignee, usize)> {
        self.assignees
            .iter()
            .zip(self.workloads.iter().copied())
            .collect()
    }
}
