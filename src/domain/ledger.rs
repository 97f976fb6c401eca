use super::Operation;

/// Operations belonging to `profile`, most recently added first.
/// The input slice is in storage (insertion) order and is left untouched.
pub fn operations_for_profile(operations: &[Operation], profile: &str) -> Vec<Operation> {
    operations
        .iter()
        .rev()
        .filter(|op| op.profile == profile)
        .cloned()
        .collect()
}

/// Distinct profile names in order of first appearance.
pub fn distinct_profiles(operations: &[Operation]) -> Vec<String> {
    let mut profiles: Vec<String> = Vec::new();
    for op in operations {
        if !profiles.iter().any(|p| *p == op.profile) {
            profiles.push(op.profile.clone());
        }
    }
    profiles
}

/// Net balance: income adds, every other category subtracts.
pub fn compute_net(operations: &[Operation]) -> f64 {
    operations.iter().map(Operation::signed_amount).sum()
}
