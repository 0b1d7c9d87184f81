//! Domain model for savings accounts.
//!
//! # Responsibility
//! - Define the canonical account record used by core business logic.
//! - Keep display-tag helpers (color palette) next to the record they serve.
//!
//! # Invariants
//! - Every account is identified by a stable `AccountId`.
//! - Monetary fields are finite `f64` values; rounding happens only at the
//!   display boundary, never in the model.

pub mod account;
pub mod color;
