//! twenty48 (workspace facade crate).
//!
//! Exposes the rules engine as `twenty48::{core, types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the
//! headless [`selfplay`] driver behind the default binary.

pub mod selfplay;

pub use twenty48_core as core;
pub use twenty48_types as types;
