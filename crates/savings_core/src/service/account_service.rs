//! Account use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Enforce calling-layer input rules (non-empty names, usable color tags)
//!   before records reach the repository.
//! - Publish explicit state-change notifications after successful writes.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - The service layer remains storage-agnostic.
//! - Listeners observe a change only after it is durable.

use crate::model::account::{Account, AccountId, AccountValidationError};
use crate::model::color::{normalize_color_hex, DEFAULT_ACCOUNT_COLOR};
use crate::repo::account_repo::{AccountRepository, RepoResult};
use log::info;

/// State-change notification emitted after a durable write.
///
/// This is the toolkit-agnostic replacement for UI-framework reactive
/// bindings: presentation layers subscribe and reload on receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountChange {
    Created(AccountId),
    Updated(AccountId),
    Deleted(AccountId),
}

/// Callback registered by a presentation layer.
pub type ChangeListener = Box<dyn Fn(&AccountChange)>;

/// Input for creating a new account from user-entered form data.
///
/// Numeric fields arrive already parsed; parsing text is the form's job.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccountRequest {
    pub name: String,
    pub institution: String,
    pub balance: f64,
    pub monthly_contribution: f64,
    /// Raw color tag from the picker; unusable values fall back to the
    /// default palette color rather than failing the whole form.
    pub color_hex: String,
}

/// Use-case service wrapper for account CRUD operations.
pub struct AccountService<R: AccountRepository> {
    repo: R,
    listeners: Vec<ChangeListener>,
}

impl<R: AccountRepository> AccountService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for durable account changes.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// Creates a new account from validated form input.
    ///
    /// # Contract
    /// - Trims `name`/`institution` and rejects empty results.
    /// - Normalizes the color tag, falling back to the default palette color.
    /// - Assigns a fresh id and `created_at = now`.
    pub fn create_account(&self, request: &NewAccountRequest) -> RepoResult<AccountId> {
        let name = non_empty_trimmed(&request.name, AccountValidationError::EmptyName)?;
        let institution = non_empty_trimmed(
            &request.institution,
            AccountValidationError::EmptyInstitution,
        )?;

        let account = Account::new(
            name,
            institution,
            request.balance,
            request.monthly_contribution,
            usable_color(&request.color_hex),
        );

        let id = self.repo.create(&account)?;
        info!("event=account_create module=service status=ok account_id={id}");
        self.notify(AccountChange::Created(id));
        Ok(id)
    }

    /// Updates an existing account with sanitized field values.
    ///
    /// Applies the same trimming/color rules as creation, then replaces all
    /// mutable fields of the stored record. Returns `false` when no record
    /// matches the id; no notification is published in that case.
    pub fn update_account(&self, account: &Account) -> RepoResult<bool> {
        let mut sanitized = account.clone();
        sanitized.name =
            non_empty_trimmed(&account.name, AccountValidationError::EmptyName)?.to_string();
        sanitized.institution = non_empty_trimmed(
            &account.institution,
            AccountValidationError::EmptyInstitution,
        )?
        .to_string();
        sanitized.color_hex = usable_color(&account.color_hex);

        let found = self.repo.update(&sanitized)?;
        info!(
            "event=account_update module=service status=ok account_id={} found={found}",
            account.uuid
        );
        if found {
            self.notify(AccountChange::Updated(account.uuid));
        }
        Ok(found)
    }

    /// Deletes an account by id. Returns `false` when the id was absent.
    pub fn delete_account(&self, id: AccountId) -> RepoResult<bool> {
        let found = self.repo.delete(id)?;
        info!("event=account_delete module=service status=ok account_id={id} found={found}");
        if found {
            self.notify(AccountChange::Deleted(id));
        }
        Ok(found)
    }

    /// Fetches one account by id.
    pub fn get_account(&self, id: AccountId) -> RepoResult<Option<Account>> {
        self.repo.get(id)
    }

    /// Returns the current snapshot of all accounts.
    pub fn list_accounts(&self) -> RepoResult<Vec<Account>> {
        self.repo.fetch_all()
    }

    fn notify(&self, change: AccountChange) {
        for listener in &self.listeners {
            listener(&change);
        }
    }
}

fn non_empty_trimmed<'a>(
    value: &'a str,
    error: AccountValidationError,
) -> Result<&'a str, AccountValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed)
}

fn usable_color(raw: &str) -> String {
    normalize_color_hex(raw).unwrap_or_else(|| DEFAULT_ACCOUNT_COLOR.to_string())
}
