//! Balance projection and milestone engine.
//!
//! # Responsibility
//! - Compute forward-looking balance series from a single account record.
//! - Compute milestone progress toward fixed target balances.
//!
//! # Invariants
//! - Every function here is pure and deterministic; no I/O, no clock reads.
//! - No rounding is applied; currency rounding belongs to the display layer.

use crate::model::account::Account;

/// Target balances surfaced on the account detail screen.
pub const DEFAULT_MILESTONE_TARGETS: [f64; 4] = [10_000.0, 25_000.0, 50_000.0, 100_000.0];

/// One sample of a projected balance curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPoint {
    /// Months from now; `0` is the current balance.
    pub month: u32,
    /// Projected balance at that month, unrounded.
    pub balance: f64,
}

/// Progress toward one target balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    /// The target balance threshold.
    pub target: f64,
    /// `balance / target`, in `[0, 1)` since met targets are filtered out.
    pub progress: f64,
    /// Whole months until the target is reached at the current contribution
    /// rate. `0` when the contribution is zero or negative: the target is
    /// unreachable by contributions alone, so the value means
    /// "undetermined", never "this month".
    pub months_to_reach: u32,
}

/// Samples the projected balance for each month in `0..=max_months`.
///
/// The series always has `max_months + 1` points and starts at the
/// unmodified current balance. A zero contribution yields a flat series.
pub fn projection_series(account: &Account, max_months: u32) -> Vec<ProjectionPoint> {
    (0..=max_months)
        .map(|month| ProjectionPoint {
            month,
            balance: account.projected_balance(i64::from(month)),
        })
        .collect()
}

/// Computes milestone progress for each target not yet reached.
///
/// Targets with `balance >= target` are omitted; the remaining targets keep
/// their input order. See [`Milestone::months_to_reach`] for the
/// zero-contribution sentinel.
pub fn milestones(account: &Account, targets: &[f64]) -> Vec<Milestone> {
    targets
        .iter()
        .filter(|&&target| account.balance < target)
        .map(|&target| Milestone {
            target,
            progress: account.balance / target,
            months_to_reach: months_to_reach(account, target),
        })
        .collect()
}

fn months_to_reach(account: &Account, target: f64) -> u32 {
    if account.monthly_contribution <= 0.0 {
        return 0;
    }
    let remaining = target - account.balance;
    ((remaining / account.monthly_contribution).ceil()) as u32
}

#[cfg(test)]
mod tests {
    use super::{milestones, projection_series, DEFAULT_MILESTONE_TARGETS};
    use crate::model::account::Account;

    fn account(balance: f64, contribution: f64) -> Account {
        Account::new("Emergency Fund", "Chase Bank", balance, contribution, "#FF6B6B")
    }

    #[test]
    fn series_starts_at_current_balance_and_ends_at_projection() {
        let account = account(5000.0, 500.0);
        let series = projection_series(&account, 12);

        assert_eq!(series.len(), 13);
        assert_eq!(series[0].month, 0);
        assert_eq!(series[0].balance, 5000.0);
        assert_eq!(series[12].balance, account.projected_balance(12));
    }

    #[test]
    fn zero_contribution_produces_flat_series() {
        let series = projection_series(&account(2500.0, 0.0), 6);
        assert!(series.iter().all(|point| point.balance == 2500.0));
    }

    #[test]
    fn milestones_omit_met_targets_and_preserve_order() {
        let hit = milestones(&account(30_000.0, 100.0), &DEFAULT_MILESTONE_TARGETS);

        let targets: Vec<f64> = hit.iter().map(|m| m.target).collect();
        assert_eq!(targets, vec![50_000.0, 100_000.0]);
    }

    #[test]
    fn months_to_reach_rounds_partial_months_up() {
        let hit = milestones(&account(7500.0, 500.0), &[10_000.0]);

        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].progress, 0.75);
        assert_eq!(hit[0].months_to_reach, 5);
    }

    #[test]
    fn non_positive_contribution_reports_undetermined_sentinel() {
        let zero = milestones(&account(1000.0, 0.0), &[10_000.0]);
        assert_eq!(zero[0].months_to_reach, 0);

        let negative = milestones(&account(1000.0, -50.0), &[10_000.0]);
        assert_eq!(negative[0].months_to_reach, 0);
    }
}
