use sar_core::NodeId;
use sar_engine::Step;

/// Rebuild the node sequence from `start` to `target` using the
/// predecessor map of a single step's snapshot.
///
/// Returns an empty sequence when the target is unreachable in that
/// snapshot, or when the predecessor map fails to reach `start` within
/// as many hops as it has entries — a defensive bound against a
/// malformed map, not something a correct run produces.
pub fn build_path_at(step: &Step, start: &NodeId, target: &NodeId) -> Vec<NodeId> {
    if step.distance_to(target).is_unreachable() {
        return Vec::new();
    }

    let mut path: Vec<NodeId> = Vec::new();
    let mut current = target.clone();
    let bound = step.predecessors.len().max(1);
    let mut hops = 0usize;

    while current != *start {
        path.push(current.clone());
        match step.predecessor_of(&current) {
            Some(prev) => current = prev.clone(),
            None => return Vec::new(),
        }
        hops += 1;
        if hops > bound {
            return Vec::new();
        }
    }

    path.push(start.clone());
    path.reverse();
    path
}

/// [`build_path_at`] applied to the final step of a completed trace.
pub fn build_path(steps: &[Step], start: &NodeId, target: &NodeId) -> Vec<NodeId> {
    match steps.last() {
        Some(step) => build_path_at(step, start, target),
        None => Vec::new(),
    }
}
