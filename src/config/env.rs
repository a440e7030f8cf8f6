//! # Environment Variable Utilities
//!
//! Helpers for reading typed values from environment variables with fallback
//! defaults. Each reader has a `*_from` twin taking a provider closure so it
//! can be tested without touching the process environment.
//!
//! # Examples
//! ```rust
//! use photo_preview::config::env::{read_flag_from, read_nonzero_u32_from};
//!
//! assert!(read_flag_from(|_| Some("yes".into()), "CORS_CREDENTIALS", false));
//! assert_eq!(read_nonzero_u32_from(|_| Some("0".into()), "PREVIEW_MAX_WIDTH", 1024), 1024);
//! ```

use std::path::PathBuf;

/// Reads a boolean flag from an environment variable.
///
/// `"1"`, `"true"`, `"yes"` and `"on"` (any case, optionally quoted) are
/// truthy; any other present value is falsy.
pub fn read_flag(name: &str, default: bool) -> bool {
    read_flag_from(|k| std::env::var(k).ok(), name, default)
}

pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => matches!(
            unquote(&v).to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}

/// Reads a positive `u32`; missing, unparsable or zero values yield `default`.
pub fn read_nonzero_u32(name: &str, default: u32) -> u32 {
    read_nonzero_u32_from(|k| std::env::var(k).ok(), name, default)
}

pub fn read_nonzero_u32_from<F>(provider: F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| unquote(&s).parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// Reads a `u8` clamped into `min..=max`; missing or unparsable values yield
/// `default`.
pub fn read_clamped_u8_from<F>(provider: F, name: &str, default: u8, min: u8, max: u8) -> u8
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| unquote(&s).parse::<u32>().ok())
        .map(|v| v.clamp(min as u32, max as u32) as u8)
        .unwrap_or(default)
}

/// Reads a path; blank values count as unset.
pub fn read_path_from<F>(provider: F, name: &str) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|s| unquote(&s).to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

fn unquote(v: &str) -> &str {
    v.trim().trim_matches(|c| c == '"' || c == '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_flag_true_variants() {
        for val in ["1", "true", "TRUE", "yes", "On", "\"true\"", "'yes'"] {
            assert!(
                read_flag_from(|_| Some(val.into()), "X", false),
                "Expected {val:?} to be truthy"
            );
        }
    }

    #[test]
    fn read_flag_false_and_default() {
        for val in ["0", "false", "off", "xyz", ""] {
            assert!(!read_flag_from(|_| Some(val.into()), "X", true));
        }
        assert!(read_flag_from(|_| None, "X", true));
        assert!(!read_flag_from(|_| None, "X", false));
    }

    #[test]
    fn read_nonzero_u32_parses_and_falls_back() {
        assert_eq!(read_nonzero_u32_from(|_| Some(" 2048 ".into()), "W", 1024), 2048);
        assert_eq!(read_nonzero_u32_from(|_| Some("0".into()), "W", 1024), 1024);
        assert_eq!(read_nonzero_u32_from(|_| Some("-5".into()), "W", 1024), 1024);
        assert_eq!(read_nonzero_u32_from(|_| Some("big".into()), "W", 1024), 1024);
        assert_eq!(read_nonzero_u32_from(|_| None, "W", 77), 77);
    }

    #[test]
    fn read_clamped_u8_clamps_into_range() {
        let read = |v: &str| read_clamped_u8_from(|_| Some(v.into()), "Q", 85, 1, 100);
        assert_eq!(read("70"), 70);
        assert_eq!(read("0"), 1);
        assert_eq!(read("1000"), 100);
        assert_eq!(read("nope"), 85);
        assert_eq!(read_clamped_u8_from(|_| None, "Q", 85, 1, 100), 85);
    }

    #[test]
    fn read_path_ignores_blank_values() {
        assert_eq!(
            read_path_from(|_| Some("/srv/photos".into()), "ROOT"),
            Some(PathBuf::from("/srv/photos"))
        );
        assert_eq!(read_path_from(|_| Some("  ".into()), "ROOT"), None);
        assert_eq!(read_path_from(|_| None, "ROOT"), None);
    }
}
