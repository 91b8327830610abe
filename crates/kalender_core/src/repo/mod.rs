//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data-access contract for the persisted school identity.
//! - Isolate SQLite and JSON-record details from service orchestration.
//!
//! # Invariants
//! - Missing or corrupt stored identity data is recovered to the default,
//!   never surfaced as an error; only transport failures propagate.

pub mod identity_repo;
