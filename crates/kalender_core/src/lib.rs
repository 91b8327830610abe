//! Core domain logic for the Ramadan 1447H school calendar.
//! This crate is the single source of truth for schedule resolution and
//! identity persistence invariants.

pub mod catalog;
pub mod db;
pub mod grid;
pub mod logging;
pub mod model;
pub mod repo;
pub mod resolve;
pub mod service;

pub use grid::{month_grid, MonthWindow, DAY_NAMES, MONTH_NAMES, WINDOW_YEAR};
pub use logging::{default_log_level, init_logging};
pub use model::event::{CalendarEvent, EventCategory, EventValidationError, StyleToken};
pub use model::identity::SchoolIdentity;
pub use repo::identity_repo::{
    IdentityRepository, RepoError, RepoResult, SqliteIdentityRepository, IDENTITY_STORE_KEY,
};
pub use resolve::{resolve, DayResolver, GOOD_HABITS_MONTH_INDEX};
pub use service::identity_service::IdentityService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
