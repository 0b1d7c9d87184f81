//! Core domain logic for the savings account tracker.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod format;
pub mod logging;
pub mod model;
pub mod projection;
pub mod repo;
pub mod service;

pub use format::{format_account_age, format_currency};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::account::{now_epoch_ms, Account, AccountId, AccountValidationError};
pub use model::color::{normalize_color_hex, ACCOUNT_COLORS, DEFAULT_ACCOUNT_COLOR};
pub use projection::{
    milestones, projection_series, Milestone, ProjectionPoint, DEFAULT_MILESTONE_TARGETS,
};
pub use repo::account_repo::{
    AccountRepository, RepoError, RepoResult, SqliteAccountRepository,
};
pub use service::account_service::{
    AccountChange, AccountService, ChangeListener, NewAccountRequest,
};
pub use service::overview_service::{
    annual_growth, chart_slices, filter_accounts, projected_total, sort_accounts, summarize,
    ChartSlice, OverviewSummary, SortOption,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
