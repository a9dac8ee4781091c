use sar_core::{Edge, RoutingMode, RoutingPolicy};

/// Scalar traversal cost of an edge under a policy.
///
/// Classic mode is the raw distance weight — it represents protocol
/// families with no risk awareness, so the risk value is never read
/// (not merely weighted to zero). Security-aware mode blends:
/// `alpha * distance + beta * risk` with `alpha = 1 - beta`.
///
/// Edge construction guarantees a positive distance weight and a
/// non-negative risk, so the result is non-negative for any valid
/// policy — the label-setting engine depends on that.
pub fn edge_cost(edge: &Edge, policy: &RoutingPolicy) -> f64 {
    match policy.mode {
        RoutingMode::Classic => edge.distance_weight(),
        RoutingMode::SecurityAware => {
            policy.alpha() * edge.distance_weight() + policy.beta() * edge.security_risk()
        }
    }
}

/// Short label used in trace messages.
pub(crate) fn mode_label(policy: &RoutingPolicy) -> &'static str {
    match policy.mode {
        RoutingMode::Classic => "Classic",
        RoutingMode::SecurityAware => "SAR",
    }
}
