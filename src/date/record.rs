//! # Date Record
//!
//! A plain day/month/year value with paired accessors and mutators.
//!
//! The record performs **no calendar validation**: any `i32` is accepted for
//! any field, and whatever was written is returned unchanged by the matching
//! getter.
//!
//! # Example
//! ```rust
//! use date_access::date::Date;
//!
//! let mut date = Date::default();
//! date.set_day(29);
//! date.set_month(8);
//! date.set_year(1981);
//! assert_eq!(date.to_string(), "29/8/1981");
//! ```

use std::fmt;

/// A day/month/year triple with private fields.
///
/// Defaults to `1/1/0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Date {
    day: i32,
    month: i32,
    year: i32,
}

impl Default for Date {
    fn default() -> Self {
        Self {
            day: 1,
            month: 1,
            year: 0,
        }
    }
}

impl Date {
    /// Creates a `Date` from explicit values. Nothing is checked.
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn set_day(&mut self, value: i32) {
        self.day = value;
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn set_month(&mut self, value: i32) {
        self.month = value;
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_year(&mut self, value: i32) {
        self.year = value;
    }
}

/// Renders `D/M/Y` with values as stored (no zero padding).
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}
