//! # Environment Variable Utilities
//!
//! Readers take a provider function instead of touching `std::env` directly,
//! so configuration can be tested without the process environment. Pass
//! [`process_env`] for the real thing.
//!
//! # Examples
//! ```rust,no_run
//! use date_access::config::env::{process_env, read_flag_from};
//!
//! let ansi = read_flag_from(process_env, "LOG_ANSI", false);
//! ```

/// Process-environment provider, suitable for the readers below.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Reads a boolean flag using a custom provider function.
///
/// Returns `true` for `"1"`, `"true"`, `"yes"`, `"on"` (case-insensitive,
/// surrounding quotes ignored), `default` when the variable is missing.
///
/// # Example
/// ```rust
/// use date_access::config::env::read_flag_from;
///
/// assert!(read_flag_from(|_| Some("yes".into()), "LOG_ANSI", false));
/// ```
pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => {
            let s = unquote(&v);
            matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
        }
        None => default,
    }
}

/// Reads a trimmed, unquoted string. Empty values count as missing.
pub fn read_string_from<F>(provider: F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|v| unquote(&v).to_string())
        .filter(|v| !v.is_empty())
}

fn unquote(v: &str) -> &str {
    v.trim().trim_matches(|c| c == '"' || c == '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_accepts_truthy_spellings() {
        for val in ["1", "true", "TRUE", "Yes", "on", "\"true\"", "'on'"] {
            let got = read_flag_from(|_| Some(val.into()), "LOG_ANSI", false);
            assert!(got, "{val:?} should enable the flag");
        }
    }

    #[test]
    fn flag_rejects_anything_else_when_present() {
        for val in ["0", "off", "enabled", ""] {
            let got = read_flag_from(|_| Some(val.into()), "LOG_ANSI", true);
            assert!(!got, "{val:?} should disable the flag");
        }
    }

    #[test]
    fn flag_uses_default_when_missing() {
        assert!(read_flag_from(|_| None, "LOG_ANSI", true));
        assert!(!read_flag_from(|_| None, "LOG_ANSI", false));
    }

    #[test]
    fn string_treats_blank_as_missing() {
        assert_eq!(read_string_from(|_| Some("  ".into()), "LOG_LEVEL"), None);
        assert_eq!(
            read_string_from(|_| Some("'debug'".into()), "LOG_LEVEL").as_deref(),
            Some("debug")
        );
    }

    #[test]
    fn process_env_reads_the_real_environment() {
        temp_env::with_var("DATE_ACCESS_TEST_VALUE", Some(" 29 "), || {
            assert_eq!(
                read_string_from(process_env, "DATE_ACCESS_TEST_VALUE").as_deref(),
                Some("29")
            );
        });
        temp_env::with_var_unset("DATE_ACCESS_TEST_VALUE", || {
            assert_eq!(process_env("DATE_ACCESS_TEST_VALUE"), None);
        });
    }
}
