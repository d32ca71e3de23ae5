//! Domain model for editable portfolio-site content.
//!
//! # Responsibility
//! - Define the canonical content structures persisted by the store.
//! - Own built-in defaults and per-list field fallback values.
//!
//! # Invariants
//! - Every list entry carries a unique, generation-time id.
//! - New entries are inserted at the front of their list.

pub mod resume;
pub mod site;
