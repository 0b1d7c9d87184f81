//! Account repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `accounts` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Account::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `uuid` and `created_at` are never touched by updates.
//! - Every operation commits immediately; there is no staged transaction
//!   exposed to callers.

use crate::db::DbError;
use crate::model::account::{Account, AccountId, AccountValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ACCOUNT_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    institution,
    balance,
    monthly_contribution,
    color_hex,
    created_at
FROM accounts";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence-layer error for account storage operations.
///
/// There is deliberately no `NotFound` variant: update/delete report
/// found-ness through their `bool` return value instead.
#[derive(Debug)]
pub enum RepoError {
    Validation(AccountValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted account data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<AccountValidationError> for RepoError {
    fn from(value: AccountValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for account CRUD operations.
///
/// The concrete storage medium is an implementation detail behind this
/// trait; callers hold it by generic parameter or trait object.
pub trait AccountRepository {
    /// Persists a new account. Durable and visible to `fetch_all` on return.
    fn create(&self, account: &Account) -> RepoResult<AccountId>;

    /// Replaces the mutable fields of the record with matching `uuid`,
    /// preserving `uuid` and `created_at`. Returns `false` when no record
    /// matched.
    fn update(&self, account: &Account) -> RepoResult<bool>;

    /// Removes the record with the given id. Returns `false` when absent.
    fn delete(&self, id: AccountId) -> RepoResult<bool>;

    /// Fetches one account by id.
    fn get(&self, id: AccountId) -> RepoResult<Option<Account>>;

    /// Returns every stored account. Order is not part of the contract;
    /// callers sort and filter in memory (see `overview_service`).
    fn fetch_all(&self) -> RepoResult<Vec<Account>>;
}

/// SQLite-backed account repository.
///
/// Borrows the store handle opened once at startup; it never owns or
/// re-opens the connection.
pub struct SqliteAccountRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAccountRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AccountRepository for SqliteAccountRepository<'_> {
    fn create(&self, account: &Account) -> RepoResult<AccountId> {
        account.validate()?;

        self.conn.execute(
            "INSERT INTO accounts (
                uuid,
                name,
                institution,
                balance,
                monthly_contribution,
                color_hex,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                account.uuid.to_string(),
                account.name.as_str(),
                account.institution.as_str(),
                account.balance,
                account.monthly_contribution,
                account.color_hex.as_str(),
                account.created_at,
            ],
        )?;

        Ok(account.uuid)
    }

    fn update(&self, account: &Account) -> RepoResult<bool> {
        account.validate()?;

        let changed = self.conn.execute(
            "UPDATE accounts
             SET
                name = ?1,
                institution = ?2,
                balance = ?3,
                monthly_contribution = ?4,
                color_hex = ?5,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?6;",
            params![
                account.name.as_str(),
                account.institution.as_str(),
                account.balance,
                account.monthly_contribution,
                account.color_hex.as_str(),
                account.uuid.to_string(),
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: AccountId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM accounts WHERE uuid = ?1;", [id.to_string()])?;

        Ok(changed > 0)
    }

    fn get(&self, id: AccountId) -> RepoResult<Option<Account>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACCOUNT_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_account_row(row)?));
        }

        Ok(None)
    }

    fn fetch_all(&self) -> RepoResult<Vec<Account>> {
        // Deterministic order for stable logs/tests only; the trait contract
        // leaves ordering unspecified.
        let mut stmt = self.conn.prepare(&format!(
            "{ACCOUNT_SELECT_SQL} ORDER BY created_at DESC, uuid ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut accounts = Vec::new();
        while let Some(row) = rows.next()? {
            accounts.push(parse_account_row(row)?);
        }

        Ok(accounts)
    }
}

fn parse_account_row(row: &Row<'_>) -> RepoResult<Account> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in accounts.uuid"))
    })?;

    let account = Account {
        uuid,
        name: row.get("name")?,
        institution: row.get("institution")?,
        balance: row.get("balance")?,
        monthly_contribution: row.get("monthly_contribution")?,
        color_hex: row.get("color_hex")?,
        created_at: row.get("created_at")?,
    };
    account.validate()?;
    Ok(account)
}
