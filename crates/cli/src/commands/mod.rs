//! Command implementations.
//!
//! Each command takes an already-resolved `Config` and returns the text to
//! print on stdout.

pub mod check;
pub mod get;
pub mod show;
