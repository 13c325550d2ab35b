//! Pagination cursor helpers.
//!
//! History endpoints page with `after`/`before` cursors expressed as UNIX
//! timestamps in milliseconds.

/// Promote a seconds timestamp to milliseconds.
///
/// A value with exactly 10 decimal digits is taken as seconds and multiplied
/// by 1000. Any other value is returned unchanged, so millisecond timestamps
/// pass straight through.
///
/// ```rust
/// use okx_api_client::types::secs_to_millisecs;
///
/// assert_eq!(secs_to_millisecs(1_700_000_000), 1_700_000_000_000);
/// assert_eq!(secs_to_millisecs(1_700_000_000_000), 1_700_000_000_000);
/// ```
pub fn secs_to_millisecs(value: u64) -> u64 {
    if decimal_digits(value) == 10 {
        value * 1000
    } else {
        value
    }
}

fn decimal_digits(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_digits_are_seconds() {
        assert_eq!(secs_to_millisecs(1_700_000_000), 1_700_000_000_000);
        assert_eq!(secs_to_millisecs(1_000_000_000), 1_000_000_000_000);
        assert_eq!(secs_to_millisecs(9_999_999_999), 9_999_999_999_000);
    }

    #[test]
    fn test_other_lengths_pass_through() {
        assert_eq!(secs_to_millisecs(1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(secs_to_millisecs(999_999_999), 999_999_999);
        assert_eq!(secs_to_millisecs(10_000_000_000), 10_000_000_000);
        assert_eq!(secs_to_millisecs(0), 0);
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(u64::MAX), 20);
    }
}
