//! Domain model for schedule events and school identity.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep wire shapes compatible with the persisted JSON record.
//!
//! # Invariants
//! - Event ranges are inclusive with `start_date <= end_date`.
//! - The event catalog is immutable; only `SchoolIdentity` is editable.

pub mod event;
pub mod identity;
