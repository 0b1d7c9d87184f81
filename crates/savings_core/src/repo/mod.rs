//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the account CRUD contract the rest of core programs against.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes enforce `Account::validate()` before persistence.
//! - A missing id on update/delete is reported as `Ok(false)`, never as an
//!   error and never silently swallowed.

pub mod account_repo;
