//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Format currency/age strings at this display boundary.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Monetary values cross the boundary both raw (for charts) and formatted
//!   (for labels); rounding only ever happens in the formatted copies.

use savings_core::db::open_db;
use savings_core::{
    annual_growth, chart_slices, core_version as core_version_inner, filter_accounts,
    format_account_age, format_currency, init_logging as init_logging_inner, milestones,
    now_epoch_ms, ping as ping_inner, projected_total, projection_series, sort_accounts,
    summarize, Account, AccountService, NewAccountRequest, SortOption, SqliteAccountRepository,
    DEFAULT_MILESTONE_TARGETS,
};
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const PROJECTION_MONTHS_DEFAULT: u32 = 12;
const PROJECTION_MONTHS_MAX: u32 = 600;
const DB_FILE_NAME: &str = "savings.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One account row for list/dashboard display.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountView {
    /// Stable account ID in string form.
    pub account_id: String,
    pub name: String,
    pub institution: String,
    /// Raw balance for chart scaling.
    pub balance: f64,
    pub monthly_contribution: f64,
    /// Pre-formatted currency label, e.g. `$5,000.00`.
    pub balance_display: String,
    pub contribution_display: String,
    pub color_hex: String,
    pub created_at_epoch_ms: i64,
}

/// Response envelope for account list queries.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountListResponse {
    pub items: Vec<AccountView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for account write flows.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Whether a matching record existed (update/delete flows).
    pub found: bool,
    /// Created or targeted account ID.
    pub account_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl AccountActionResponse {
    fn success(message: impl Into<String>, account_id: String, found: bool) -> Self {
        Self {
            ok: true,
            found,
            account_id: Some(account_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("event=ffi_action module=ffi status=error message={message}");
        Self {
            ok: false,
            found: false,
            account_id: None,
            message,
        }
    }
}

/// One sample of the projection chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPointView {
    pub month: u32,
    pub balance: f64,
}

/// One milestone row on the account detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneView {
    pub target: f64,
    pub target_display: String,
    /// `[0, 1)` progress fraction.
    pub progress: f64,
    /// `0` means "undetermined" (no positive contribution), never "now".
    pub months_to_reach: u32,
}

/// Account detail payload: record + projections + milestones.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDetailResponse {
    pub ok: bool,
    pub message: String,
    pub account: Option<AccountView>,
    pub projected_balance: f64,
    pub projected_balance_display: String,
    pub annual_growth: f64,
    /// E.g. `"1 month"`, `"14 months"`.
    pub age_display: String,
    pub projection: Vec<ProjectionPointView>,
    pub milestones: Vec<MilestoneView>,
}

/// Dashboard aggregates for the home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummaryResponse {
    pub ok: bool,
    pub message: String,
    pub account_count: u32,
    pub total_balance: f64,
    pub total_balance_display: String,
    pub total_monthly_contribution: f64,
    pub total_contribution_display: String,
    pub projected_total: f64,
    pub projected_total_display: String,
    pub chart: Vec<ChartSliceView>,
}

/// One chart segment of the dashboard balance breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSliceView {
    pub name: String,
    pub balance: f64,
    pub color_hex: String,
}

/// Lists accounts with optional search filtering and a sort order.
///
/// `sort_by` accepts `name|balance|institution|created` (defaults to `name`).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; returns an empty list plus message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn list_accounts(sort_by: String, search: Option<String>) -> AccountListResponse {
    let snapshot = match with_service(|service| {
        service
            .list_accounts()
            .map_err(|err| format!("list_accounts failed: {err}"))
    }) {
        Ok(accounts) => accounts,
        Err(message) => {
            return AccountListResponse {
                items: Vec::new(),
                message,
            };
        }
    };

    let filtered = match search.as_deref() {
        Some(text) => filter_accounts(&snapshot, text),
        None => snapshot,
    };
    let sorted = sort_accounts(filtered, parse_sort_option(&sort_by));

    let items: Vec<AccountView> = sorted.iter().map(to_account_view).collect();
    let message = if items.is_empty() {
        "No accounts.".to_string()
    } else {
        format!("Found {} account(s).", items.len())
    };
    AccountListResponse { items, message }
}

/// Creates a savings account from validated form fields.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; validation problems come back as `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn create_account(
    name: String,
    institution: String,
    balance: f64,
    monthly_contribution: f64,
    color_hex: String,
) -> AccountActionResponse {
    let request = NewAccountRequest {
        name,
        institution,
        balance,
        monthly_contribution,
        color_hex,
    };
    match with_service(|service| {
        service
            .create_account(&request)
            .map_err(|err| format!("create_account failed: {err}"))
    }) {
        Ok(id) => AccountActionResponse::success("Account created.", id.to_string(), true),
        Err(message) => AccountActionResponse::failure(message),
    }
}

/// Updates an existing account's editable fields.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; a missing id yields `ok=true, found=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn update_account(
    account_id: String,
    name: String,
    institution: String,
    balance: f64,
    monthly_contribution: f64,
    color_hex: String,
) -> AccountActionResponse {
    let id = match parse_account_id(&account_id) {
        Ok(id) => id,
        Err(message) => return AccountActionResponse::failure(message),
    };

    match with_service(|service| {
        let Some(mut account) = service
            .get_account(id)
            .map_err(|err| format!("update_account failed: {err}"))?
        else {
            return Ok(false);
        };

        account.name = name.clone();
        account.institution = institution.clone();
        account.balance = balance;
        account.monthly_contribution = monthly_contribution;
        account.color_hex = color_hex.clone();

        service
            .update_account(&account)
            .map_err(|err| format!("update_account failed: {err}"))
    }) {
        Ok(true) => AccountActionResponse::success("Account updated.", account_id, true),
        Ok(false) => AccountActionResponse::success("No matching account.", account_id, false),
        Err(message) => AccountActionResponse::failure(message),
    }
}

/// Deletes an account by id.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; a missing id yields `ok=true, found=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_account(account_id: String) -> AccountActionResponse {
    let id = match parse_account_id(&account_id) {
        Ok(id) => id,
        Err(message) => return AccountActionResponse::failure(message),
    };

    match with_service(|service| {
        service
            .delete_account(id)
            .map_err(|err| format!("delete_account failed: {err}"))
    }) {
        Ok(true) => AccountActionResponse::success("Account deleted.", account_id, true),
        Ok(false) => AccountActionResponse::success("No matching account.", account_id, false),
        Err(message) => AccountActionResponse::failure(message),
    }
}

/// Returns one account plus its projection curve and milestones.
///
/// `projection_months` is clamped to a sane chart range; `None` uses the
/// 12-month default.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; unknown ids yield `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn account_detail(
    account_id: String,
    projection_months: Option<u32>,
) -> AccountDetailResponse {
    let months = normalize_projection_months(projection_months);
    let id = match parse_account_id(&account_id) {
        Ok(id) => id,
        Err(message) => return detail_failure(message),
    };

    let account = match with_service(|service| {
        service
            .get_account(id)
            .map_err(|err| format!("account_detail failed: {err}"))
    }) {
        Ok(Some(account)) => account,
        Ok(None) => return detail_failure("No matching account."),
        Err(message) => return detail_failure(message),
    };

    let projected = account.projected_balance(i64::from(months));
    let projection = projection_series(&account, months)
        .into_iter()
        .map(|point| ProjectionPointView {
            month: point.month,
            balance: point.balance,
        })
        .collect();
    let milestone_views = milestones(&account, &DEFAULT_MILESTONE_TARGETS)
        .into_iter()
        .map(|milestone| MilestoneView {
            target: milestone.target,
            target_display: format_currency(milestone.target),
            progress: milestone.progress,
            months_to_reach: milestone.months_to_reach,
        })
        .collect();

    AccountDetailResponse {
        ok: true,
        message: String::new(),
        projected_balance: projected,
        projected_balance_display: format_currency(projected),
        annual_growth: annual_growth(&account),
        age_display: format_account_age(account.age_in_months(now_epoch_ms())),
        projection,
        milestones: milestone_views,
        account: Some(to_account_view(&account)),
    }
}

/// Returns dashboard totals and the balance breakdown chart.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; failures yield `ok=false` with zeroed aggregates.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_summary(projection_months: Option<u32>) -> DashboardSummaryResponse {
    let months = normalize_projection_months(projection_months);

    let snapshot = match with_service(|service| {
        service
            .list_accounts()
            .map_err(|err| format!("dashboard_summary failed: {err}"))
    }) {
        Ok(accounts) => accounts,
        Err(message) => return summary_failure(message),
    };

    let summary = summarize(&snapshot);
    let projected = projected_total(&snapshot, i64::from(months));
    let chart = chart_slices(&snapshot)
        .into_iter()
        .map(|slice| ChartSliceView {
            name: slice.name,
            balance: slice.balance,
            color_hex: slice.color_hex,
        })
        .collect();

    DashboardSummaryResponse {
        ok: true,
        message: String::new(),
        account_count: summary.account_count as u32,
        total_balance: summary.total_balance,
        total_balance_display: format_currency(summary.total_balance),
        total_monthly_contribution: summary.total_monthly_contribution,
        total_contribution_display: format_currency(summary.total_monthly_contribution),
        projected_total: projected,
        projected_total_display: format_currency(projected),
        chart,
    }
}

fn detail_failure(message: impl Into<String>) -> AccountDetailResponse {
    AccountDetailResponse {
        ok: false,
        message: message.into(),
        account: None,
        projected_balance: 0.0,
        projected_balance_display: String::new(),
        annual_growth: 0.0,
        age_display: String::new(),
        projection: Vec::new(),
        milestones: Vec::new(),
    }
}

fn summary_failure(message: impl Into<String>) -> DashboardSummaryResponse {
    DashboardSummaryResponse {
        ok: false,
        message: message.into(),
        account_count: 0,
        total_balance: 0.0,
        total_balance_display: String::new(),
        total_monthly_contribution: 0.0,
        total_contribution_display: String::new(),
        projected_total: 0.0,
        projected_total_display: String::new(),
        chart: Vec::new(),
    }
}

fn normalize_projection_months(months: Option<u32>) -> u32 {
    match months {
        Some(value) if value > PROJECTION_MONTHS_MAX => PROJECTION_MONTHS_MAX,
        Some(value) => value,
        None => PROJECTION_MONTHS_DEFAULT,
    }
}

fn parse_sort_option(value: &str) -> SortOption {
    match value.trim().to_ascii_lowercase().as_str() {
        "balance" => SortOption::Balance,
        "institution" => SortOption::Institution,
        "created" => SortOption::CreatedAt,
        _ => SortOption::Name,
    }
}

fn parse_account_id(value: &str) -> Result<savings_core::AccountId, String> {
    Uuid::parse_str(value.trim()).map_err(|_| format!("invalid account id `{value}`"))
}

fn to_account_view(account: &Account) -> AccountView {
    AccountView {
        account_id: account.uuid.to_string(),
        name: account.name.clone(),
        institution: account.institution.clone(),
        balance: account.balance,
        monthly_contribution: account.monthly_contribution,
        balance_display: format_currency(account.balance),
        contribution_display: format_currency(account.monthly_contribution),
        color_hex: account.color_hex.clone(),
        created_at_epoch_ms: account.created_at,
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("SAVINGS_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_service<T>(
    f: impl FnOnce(&AccountService<SqliteAccountRepository<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("savings DB open failed: {err}"))?;
    let repo = SqliteAccountRepository::new(&conn);
    let service = AccountService::new(repo);
    f(&service)
}

#[cfg(test)]
mod tests {
    use super::{
        account_detail, core_version, create_account, dashboard_summary, delete_account,
        init_logging, list_accounts, ping, update_account,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        format!("{prefix}-{}-{nanos}", std::process::id())
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn created_account_appears_in_filtered_list() {
        let token = unique_token("list");
        let created = create_account(
            format!("Fund {token}"),
            "Chase Bank".to_string(),
            5000.0,
            500.0,
            "#FF6B6B".to_string(),
        );
        assert!(created.ok, "{}", created.message);
        let created_id = created.account_id.clone().expect("create returns id");

        let response = list_accounts("name".to_string(), Some(token));
        assert!(response
            .items
            .iter()
            .any(|item| item.account_id == created_id));
        let item = response
            .items
            .iter()
            .find(|item| item.account_id == created_id)
            .unwrap();
        assert_eq!(item.balance_display, "$5,000.00");
    }

    #[test]
    fn detail_reports_projection_and_milestones() {
        let token = unique_token("detail");
        let created = create_account(
            format!("Fund {token}"),
            "Chase Bank".to_string(),
            7500.0,
            500.0,
            "#FF6B6B".to_string(),
        );
        assert!(created.ok, "{}", created.message);
        let id = created.account_id.expect("create returns id");

        let detail = account_detail(id, Some(12));
        assert!(detail.ok, "{}", detail.message);
        assert_eq!(detail.projected_balance, 7500.0 + 500.0 * 12.0);
        assert_eq!(detail.projection.len(), 13);
        assert_eq!(detail.milestones[0].progress, 0.75);
        assert_eq!(detail.milestones[0].months_to_reach, 5);
    }

    #[test]
    fn update_and_delete_report_found_ness() {
        let token = unique_token("write");
        let created = create_account(
            format!("Fund {token}"),
            "Chase Bank".to_string(),
            100.0,
            10.0,
            "#FF6B6B".to_string(),
        );
        let id = created.account_id.expect("create returns id");

        let updated = update_account(
            id.clone(),
            format!("Fund {token} v2"),
            "Chase Bank".to_string(),
            200.0,
            20.0,
            "#4ECDC4".to_string(),
        );
        assert!(updated.ok && updated.found, "{}", updated.message);

        let deleted = delete_account(id.clone());
        assert!(deleted.ok && deleted.found, "{}", deleted.message);

        let missing = delete_account(id);
        assert!(missing.ok && !missing.found);
    }

    #[test]
    fn rejected_ids_fail_without_panicking() {
        let response = delete_account("not-a-uuid".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid account id"));
    }

    #[test]
    fn created_row_is_readable_through_raw_sqlite() {
        let token = unique_token("raw");
        let created = create_account(
            format!("Fund {token}"),
            "Chase Bank".to_string(),
            42.0,
            4.2,
            "#95E1D3".to_string(),
        );
        assert!(created.ok, "{}", created.message);
        let id = created.account_id.expect("create returns id");

        let conn = rusqlite::Connection::open(super::resolve_db_path()).expect("open db");
        let (name, balance): (String, f64) = conn
            .query_row(
                "SELECT name, balance FROM accounts WHERE uuid = ?1;",
                [&id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .expect("created row should exist");
        assert!(name.contains(&token));
        assert_eq!(balance, 42.0);
    }

    #[test]
    fn dashboard_summary_is_available() {
        let summary = dashboard_summary(None);
        assert!(summary.ok, "{}", summary.message);
        assert_eq!(summary.chart.len(), summary.account_count as usize);
    }
}
