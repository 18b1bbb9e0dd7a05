//! # date_access
//!
//! A small day/month/year record with paired accessors and mutators, plus
//! the configuration and logging plumbing the `date-access` binary
//! runs on.
//!
//! ## Example usage
//!
//! ```rust
//! use date_access::date::Date;
//!
//! let mut date = Date::default();
//! date.set_day(29);
//! date.set_month(8);
//! date.set_year(1981);
//! assert_eq!(date.to_string(), "29/8/1981");
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use dotenvy;
pub use tracing;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod date;
pub mod error;
pub mod logging;
