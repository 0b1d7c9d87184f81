//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from storage details.
//! - Derive read-only dashboard/list aggregates without performing I/O.

pub mod account_service;
pub mod overview_service;
