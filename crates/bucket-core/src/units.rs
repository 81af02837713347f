//! Human-size string parsing ("1M", "512k", "1.5G")

/// Parse a human size string into a byte count.
///
/// A leading decimal number (fractions allowed) optionally followed by
/// a unit letter: `k`/`K` for KiB, `m`/`M` for MiB, `g`/`G` for GiB,
/// all powers of 1024. An unknown unit leaves the number unscaled.
/// Unparsable or negative input yields `0`, which the engine treats as
/// "unbounded" rather than an error.
pub fn parse_size(input: &str) -> u64 {
    let input = input.trim();
    let end = input
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+')
        .unwrap_or(input.len());
    let value: f64 = input[..end].parse().unwrap_or(0.0);

    let multiplier = match input[end..].chars().next() {
        Some('k') | Some('K') => 1024.0,
        Some('m') | Some('M') => 1024.0 * 1024.0,
        Some('g') | Some('G') => 1024.0 * 1024.0 * 1024.0,
        _ => 1.0,
    };

    let bytes = value * multiplier;
    if bytes.is_finite() && bytes > 0.0 {
        bytes as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_bytes() {
        assert_eq!(parse_size("0"), 0);
        assert_eq!(parse_size("1"), 1);
        assert_eq!(parse_size("4096"), 4096);
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(parse_size("1k"), 1024);
        assert_eq!(parse_size("1K"), 1024);
        assert_eq!(parse_size("2m"), 2 * 1024 * 1024);
        assert_eq!(parse_size("1M"), 1024 * 1024);
        assert_eq!(parse_size("1g"), 1024 * 1024 * 1024);
        assert_eq!(parse_size("3G"), 3 * 1024 * 1024 * 1024);
    }

    #[test]
    fn test_fractional() {
        assert_eq!(parse_size("1.5k"), 1536);
        assert_eq!(parse_size("0.5M"), 512 * 1024);
    }

    #[test]
    fn test_unknown_suffix_left_unscaled() {
        assert_eq!(parse_size("100x"), 100);
        assert_eq!(parse_size("7q"), 7);
    }

    #[test]
    fn test_unparsable_is_unbounded() {
        assert_eq!(parse_size(""), 0);
        assert_eq!(parse_size("garbage"), 0);
        assert_eq!(parse_size("M"), 0);
        assert_eq!(parse_size("-1k"), 0);
    }
}
