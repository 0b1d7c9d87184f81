//! Savings account domain model.
//!
//! # Responsibility
//! - Define the canonical persisted record for one savings account.
//! - Provide the linear balance projection used by every forward-looking
//!   calculation in core.
//!
//! # Invariants
//! - `uuid` is stable for the account lifetime and never reused.
//! - `created_at` is immutable after creation; updates never touch it.
//! - `balance` and `monthly_contribution` are finite (no NaN/infinity).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a savings account.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AccountId = Uuid;

/// Milliseconds in a display month (30 days).
///
/// Account age is a cosmetic "N months" figure, so calendar-exact month
/// arithmetic is deliberately avoided.
const MS_PER_MONTH: i64 = 30 * 24 * 60 * 60 * 1000;

/// Validation failures for account field invariants.
///
/// Finiteness variants are enforced by the repository before every write.
/// The name/institution variants are raised by the service layer only; the
/// repository does not police display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountValidationError {
    /// The nil UUID is reserved and never a valid account identity.
    NilUuid,
    /// `name` is empty after trimming.
    EmptyName,
    /// `institution` is empty after trimming.
    EmptyInstitution,
    /// `balance` is NaN or infinite.
    NonFiniteBalance,
    /// `monthly_contribution` is NaN or infinite.
    NonFiniteContribution,
}

impl Display for AccountValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "account uuid must not be nil"),
            Self::EmptyName => write!(f, "account name must not be empty"),
            Self::EmptyInstitution => write!(f, "account institution must not be empty"),
            Self::NonFiniteBalance => write!(f, "account balance must be a finite number"),
            Self::NonFiniteContribution => {
                write!(f, "monthly contribution must be a finite number")
            }
        }
    }
}

impl Error for AccountValidationError {}

/// Canonical domain record for one savings account.
///
/// Each update fully overwrites the mutable fields; there is no versioning
/// or history retained across mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Stable global ID used for lookups and cross-layer references.
    pub uuid: AccountId,
    /// Display name, e.g. "Emergency Fund".
    pub name: String,
    /// Institution holding the account, e.g. "Chase Bank".
    pub institution: String,
    /// Current principal. Signed; overdrawn accounts are representable.
    pub balance: f64,
    /// Amount added per elapsed month. Zero is allowed; a negative value is
    /// semantically a monthly withdrawal and is not rejected.
    pub monthly_contribution: f64,
    /// `#RRGGBB` display grouping tag, stored verbatim.
    pub color_hex: String,
    /// Unix epoch milliseconds. Immutable after creation.
    pub created_at: i64,
}

impl Account {
    /// Creates a new account with a generated stable ID and `created_at = now`.
    pub fn new(
        name: impl Into<String>,
        institution: impl Into<String>,
        balance: f64,
        monthly_contribution: f64,
        color_hex: impl Into<String>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            name,
            institution,
            balance,
            monthly_contribution,
            color_hex,
            now_epoch_ms(),
        )
    }

    /// Creates an account with caller-provided identity and creation time.
    ///
    /// Used by hydration paths (row parsing) and by tests that need fixed
    /// timestamps. Does not validate; call [`Account::validate`] separately.
    #[allow(clippy::too_many_arguments)]
    pub fn with_id(
        uuid: AccountId,
        name: impl Into<String>,
        institution: impl Into<String>,
        balance: f64,
        monthly_contribution: f64,
        color_hex: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            uuid,
            name: name.into(),
            institution: institution.into(),
            balance,
            monthly_contribution,
            color_hex: color_hex.into(),
            created_at,
        }
    }

    /// Checks the field invariants the repository enforces on every write.
    ///
    /// Name/institution emptiness is intentionally NOT checked here; that is
    /// a calling-layer rule (see `AccountService`).
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.uuid.is_nil() {
            return Err(AccountValidationError::NilUuid);
        }
        if !self.balance.is_finite() {
            return Err(AccountValidationError::NonFiniteBalance);
        }
        if !self.monthly_contribution.is_finite() {
            return Err(AccountValidationError::NonFiniteContribution);
        }
        Ok(())
    }

    /// Linear balance projection: `balance + monthly_contribution * months`.
    ///
    /// No guard on `months` and no rounding. Negative months project
    /// backward, which is mathematically consistent; callers in this domain
    /// only supply non-negative values.
    pub fn projected_balance(&self, months: i64) -> f64 {
        self.balance + self.monthly_contribution * months as f64
    }

    /// Whole elapsed months since creation, for "account age" display.
    ///
    /// Uses a 30-day month; never negative even if `now_ms` predates
    /// `created_at` (clock skew on device restores).
    pub fn age_in_months(&self, now_ms: i64) -> i64 {
        let elapsed = now_ms.saturating_sub(self.created_at);
        if elapsed <= 0 {
            return 0;
        }
        elapsed / MS_PER_MONTH
    }
}

/// Current wall-clock time as Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{now_epoch_ms, Account, AccountValidationError, MS_PER_MONTH};
    use uuid::Uuid;

    #[test]
    fn new_assigns_identity_and_creation_time() {
        let before = now_epoch_ms();
        let account = Account::new("Emergency Fund", "Chase Bank", 5000.0, 500.0, "#FF6B6B");

        assert!(!account.uuid.is_nil());
        assert!(account.created_at >= before);
        assert_eq!(account.name, "Emergency Fund");
        assert_eq!(account.institution, "Chase Bank");
    }

    #[test]
    fn validate_rejects_nil_uuid() {
        let account = Account::with_id(Uuid::nil(), "a", "b", 0.0, 0.0, "#4ECDC4", 0);
        assert_eq!(account.validate(), Err(AccountValidationError::NilUuid));
    }

    #[test]
    fn validate_rejects_non_finite_amounts() {
        let mut account = Account::new("a", "b", f64::NAN, 0.0, "#4ECDC4");
        assert_eq!(
            account.validate(),
            Err(AccountValidationError::NonFiniteBalance)
        );

        account.balance = 100.0;
        account.monthly_contribution = f64::INFINITY;
        assert_eq!(
            account.validate(),
            Err(AccountValidationError::NonFiniteContribution)
        );
    }

    #[test]
    fn age_is_floored_to_whole_months_and_never_negative() {
        let account = Account::with_id(Uuid::new_v4(), "a", "b", 0.0, 0.0, "#4ECDC4", 1_000);

        assert_eq!(account.age_in_months(1_000 + 3 * MS_PER_MONTH + 5), 3);
        assert_eq!(account.age_in_months(1_000 + MS_PER_MONTH - 1), 0);
        assert_eq!(account.age_in_months(0), 0);
    }
}
