//! FFI crate exposing savings core use-cases to the Flutter UI.
//!
//! # Responsibility
//! - Keep the Dart-facing surface small and use-case shaped.
//! - Hold process-level wiring (db path, logging init) outside core.

pub mod api;
