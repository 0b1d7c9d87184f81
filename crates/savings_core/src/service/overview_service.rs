//! Dashboard and list view derivations.
//!
//! # Responsibility
//! - Derive read-only aggregates (totals, sort orders, search filtering,
//!   chart slices) from an in-memory account snapshot.
//!
//! # Invariants
//! - Every function here is a pure derivation over its arguments; fetching
//!   the snapshot is the caller's job.
//! - Results never mutate or re-persist accounts.

use crate::model::account::Account;

/// Aggregate figures shown on the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverviewSummary {
    /// Sum of `balance` over all accounts.
    pub total_balance: f64,
    /// Sum of `monthly_contribution` over all accounts.
    pub total_monthly_contribution: f64,
    pub account_count: usize,
}

/// One pie/bar segment for the dashboard balance chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub name: String,
    pub balance: f64,
    pub color_hex: String,
}

/// Sort orders offered by the account list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Name ascending.
    #[default]
    Name,
    /// Balance descending (largest account first).
    Balance,
    /// Institution ascending.
    Institution,
    /// Creation date descending (newest first).
    CreatedAt,
}

/// Sums balances and contributions across the snapshot.
pub fn summarize(accounts: &[Account]) -> OverviewSummary {
    OverviewSummary {
        total_balance: accounts.iter().map(|account| account.balance).sum(),
        total_monthly_contribution: accounts
            .iter()
            .map(|account| account.monthly_contribution)
            .sum(),
        account_count: accounts.len(),
    }
}

/// Sum of every account's projected balance after `months`.
pub fn projected_total(accounts: &[Account], months: i64) -> f64 {
    accounts
        .iter()
        .map(|account| account.projected_balance(months))
        .sum()
}

/// Contribution growth over one year for a single account.
pub fn annual_growth(account: &Account) -> f64 {
    account.monthly_contribution * 12.0
}

/// Returns the snapshot sorted by the requested order.
pub fn sort_accounts(mut accounts: Vec<Account>, by: SortOption) -> Vec<Account> {
    match by {
        SortOption::Name => accounts.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOption::Balance => accounts.sort_by(|a, b| b.balance.total_cmp(&a.balance)),
        SortOption::Institution => accounts.sort_by(|a, b| a.institution.cmp(&b.institution)),
        SortOption::CreatedAt => accounts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    accounts
}

/// Case-insensitive substring search over `name` and `institution`.
///
/// An empty (or whitespace-only) search keeps every account.
pub fn filter_accounts(accounts: &[Account], search: &str) -> Vec<Account> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return accounts.to_vec();
    }

    accounts
        .iter()
        .filter(|account| {
            account.name.to_lowercase().contains(&needle)
                || account.institution.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Maps the snapshot to chart segments, preserving input order.
pub fn chart_slices(accounts: &[Account]) -> Vec<ChartSlice> {
    accounts
        .iter()
        .map(|account| ChartSlice {
            name: account.name.clone(),
            balance: account.balance,
            color_hex: account.color_hex.clone(),
        })
        .collect()
}
