//! Lenient field parsing for historical exports.
//!
//! Source files use `\N` for NULL and occasionally carry malformed numerics;
//! none of that may fail the load. Each helper maps a raw field to `None`
//! (or a zero, for points) instead of erroring.

use chrono::NaiveDate;

const NULL_SENTINEL: &str = "\\N";

fn cleaned(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NULL_SENTINEL {
        None
    } else {
        Some(trimmed)
    }
}

pub fn opt_u32(raw: &str) -> Option<u32> {
    cleaned(raw)?.parse().ok()
}

pub fn opt_u64(raw: &str) -> Option<u64> {
    cleaned(raw)?.parse().ok()
}

pub fn opt_i32(raw: &str) -> Option<i32> {
    cleaned(raw)?.parse().ok()
}

/// Points fields: malformed or absent values count as zero.
pub fn num_f64(raw: &str) -> f64 {
    cleaned(raw).and_then(|s| s.parse().ok()).unwrap_or(0.0)
}

pub fn opt_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(cleaned(raw)?, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sentinel_and_empty_are_absent() {
        assert_eq!(opt_u32("\\N"), None);
        assert_eq!(opt_u32(""), None);
        assert_eq!(opt_u32("  "), None);
    }

    #[test]
    fn malformed_numerics_are_absent_or_zero() {
        assert_eq!(opt_u32("abc"), None);
        assert_eq!(opt_i32("12.5"), None);
        assert_eq!(num_f64("garbage"), 0.0);
        assert_eq!(num_f64("25.5"), 25.5);
    }

    #[test]
    fn valid_fields_parse() {
        assert_eq!(opt_u32(" 7 "), Some(7));
        assert_eq!(opt_u64("92520"), Some(92520));
        assert_eq!(opt_i32("1988"), Some(1988));
        assert_eq!(
            opt_date("1950-05-13"),
            NaiveDate::from_ymd_opt(1950, 5, 13)
        );
        assert_eq!(opt_date("not-a-date"), None);
    }
}
