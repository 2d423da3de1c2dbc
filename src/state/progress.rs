// Done/locked derivation. Recomputed from scratch every render; nothing here
// is stored between completion-set changes.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use super::layout::PositionedNode;
use crate::model::CompletionSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeStatus {
    pub done: bool,
    /// Only the immediate predecessor's completion unlocks a node.
    pub locked: bool,
}

impl NodeStatus {
    pub fn actionable(&self) -> bool {
        !self.done && !self.locked
    }
}

/// One status per node, in the (already sorted) sequence order.
pub fn derive_statuses(nodes: &[PositionedNode], completed: &CompletionSet) -> Vec<NodeStatus> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, n)| NodeStatus {
            done: completed.contains(&n.node.id),
            locked: i > 0 && !completed.contains(&nodes[i - 1].node.id),
        })
        .collect()
}

/// Current status of the node `id`, or `None` if it is not on the path.
pub fn status_of(nodes: &[PositionedNode], completed: &CompletionSet, id: &str) -> Option<NodeStatus> {
    let i = nodes.iter().position(|n| n.node.id == id)?;
    derive_statuses(nodes, completed).get(i).copied()
}

/// Caption of the toggle button for an unlocked node.
pub fn toggle_label(status: NodeStatus) -> &'static str {
    if status.done { "Mark as not done" } else { "Mark complete" }
}

/// Index of the first node that is neither done nor locked.
pub fn next_actionable(statuses: &[NodeStatus]) -> Option<usize> {
    statuses.iter().position(NodeStatus::actionable)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub done: usize,
    pub total: usize,
    pub percent: u32,
}

/// Only ids that belong to this path count towards the summary.
pub fn summarize(nodes: &[PositionedNode], completed: &CompletionSet) -> ProgressSummary {
    let total = nodes.len();
    let done = nodes
        .iter()
        .filter(|n| completed.contains(&n.node.id))
        .count();
    let percent = if total == 0 {
        0
    } else {
        ((done as f64 / total as f64) * 100.0).round() as u32
    };
    ProgressSummary {
        done,
        total,
        percent,
    }
}
