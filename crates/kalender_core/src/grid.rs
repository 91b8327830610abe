//! Month-grid math and display tables.
//!
//! # Responsibility
//! - Compute the 7-column day layout (leading blanks + day numbers) the
//!   calendar view renders.
//! - Hold the Indonesian month/day display names.
//! - Bound month navigation to the fixed observance window.
//!
//! # Invariants
//! - Weeks start on Sunday; the leading-blank count equals the first
//!   day's Sunday-based weekday index.
//! - `MonthWindow` never leaves the observance months.

use chrono::{Datelike, NaiveDate};

/// Indonesian month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Abbreviated Indonesian day names, Sunday first.
pub const DAY_NAMES: [&str; 7] = ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"];

/// Calendar year the application is scoped to.
pub const WINDOW_YEAR: i32 = 2026;

// Navigation bounds match the source application: Februari..Maret 2026.
const FIRST_MONTH_INDEX: u32 = 1;
const LAST_MONTH_INDEX: u32 = 2;

/// Returns the 7-column cell layout for a month: `None` blanks for the
/// weekday offset of day 1, then `Some(day)` for each day of the month.
///
/// An out-of-range `month_index` yields an empty layout.
pub fn month_grid(year: i32, month_index: u32) -> Vec<Option<u32>> {
    let Some(first) = first_of_month(year, month_index) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month_of(first);

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend(std::iter::repeat(None).take(leading));
    cells.extend((1..=days).map(Some));
    cells
}

/// Returns the number of days in the month, or `None` for an invalid
/// `month_index`.
pub fn days_in_month(year: i32, month_index: u32) -> Option<u32> {
    first_of_month(year, month_index).map(days_in_month_of)
}

fn first_of_month(year: i32, month_index: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month_index + 1, 1)
}

fn days_in_month_of(first: NaiveDate) -> u32 {
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    // The successor month's first day always exists for a valid `first`.
    let next_first = next_first.unwrap_or(first);
    (next_first - first).num_days() as u32
}

/// Bounded month cursor over the fixed observance window.
///
/// Navigation clamps at the window edges; step methods report whether the
/// cursor moved so the UI can disable the matching control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    month_index: u32,
}

impl Default for MonthWindow {
    /// Starts at the first observance month (Februari 2026).
    fn default() -> Self {
        Self {
            month_index: FIRST_MONTH_INDEX,
        }
    }
}

impl MonthWindow {
    /// Year of the visible month (fixed for the whole window).
    pub fn year(&self) -> i32 {
        WINDOW_YEAR
    }

    /// Zero-based index of the visible month.
    pub fn month_index(&self) -> u32 {
        self.month_index
    }

    /// Display label, e.g. `Februari 2026`.
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month_index as usize], WINDOW_YEAR)
    }

    /// Cell layout of the visible month.
    pub fn grid(&self) -> Vec<Option<u32>> {
        month_grid(WINDOW_YEAR, self.month_index)
    }

    /// Number of days in the visible month.
    pub fn days(&self) -> u32 {
        // The window only holds valid months.
        days_in_month(WINDOW_YEAR, self.month_index).unwrap_or(0)
    }

    /// Whether a previous month exists inside the window.
    pub fn can_step_back(&self) -> bool {
        self.month_index > FIRST_MONTH_INDEX
    }

    /// Whether a next month exists inside the window.
    pub fn can_step_forward(&self) -> bool {
        self.month_index < LAST_MONTH_INDEX
    }

    /// Moves to the previous month; returns whether the cursor moved.
    pub fn step_back(&mut self) -> bool {
        if self.can_step_back() {
            self.month_index -= 1;
            true
        } else {
            false
        }
    }

    /// Moves to the next month; returns whether the cursor moved.
    pub fn step_forward(&mut self) -> bool {
        if self.can_step_forward() {
            self.month_index += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{days_in_month, month_grid, MonthWindow};

    #[test]
    fn february_2026_starts_on_sunday_with_no_blanks() {
        let cells = month_grid(2026, 1);

        assert_eq!(cells.first(), Some(&Some(1)));
        assert_eq!(cells.len(), 28);
        assert_eq!(cells.last(), Some(&Some(28)));
    }

    #[test]
    fn january_2026_has_four_leading_blanks() {
        // 2026-01-01 is a Thursday (Sunday-based index 4).
        let cells = month_grid(2026, 0);

        assert_eq!(&cells[..4], &[None, None, None, None]);
        assert_eq!(cells[4], Some(1));
        assert_eq!(cells.len(), 4 + 31);
    }

    #[test]
    fn days_in_month_handles_leap_years_and_december() {
        assert_eq!(days_in_month(2026, 1), Some(28));
        assert_eq!(days_in_month(2028, 1), Some(29));
        assert_eq!(days_in_month(2026, 11), Some(31));
        assert_eq!(days_in_month(2026, 12), None);
    }

    #[test]
    fn invalid_month_yields_empty_grid() {
        assert!(month_grid(2026, 12).is_empty());
    }

    #[test]
    fn window_clamps_at_both_bounds() {
        let mut window = MonthWindow::default();
        assert_eq!(window.month_index(), 1);
        assert!(!window.can_step_back());
        assert!(!window.step_back());

        assert!(window.step_forward());
        assert_eq!(window.month_index(), 2);
        assert_eq!(window.label(), "Maret 2026");
        assert!(!window.can_step_forward());
        assert!(!window.step_forward());

        assert!(window.step_back());
        assert_eq!(window.label(), "Februari 2026");
    }
}
