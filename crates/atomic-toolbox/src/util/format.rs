//! Human-readable values.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with 1024-based units, e.g. `"1.5 KB"`.
///
/// Rounded to `precision` decimals, trailing zeros dropped.
pub fn format_bytes(bytes: u64, precision: usize) -> String {
    let mut pow = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && pow < UNITS.len() - 1 {
        value /= 1024.0;
        pow += 1;
    }

    let rounded = format!("{value:.precision$}");
    let trimmed = if rounded.contains('.') {
        rounded.trim_end_matches('0').trim_end_matches('.')
    } else {
        rounded.as_str()
    };
    format!("{trimmed} {}", UNITS[pow])
}

/// Loose truthiness of a flag value. `None` when the value is neither.
pub fn is_true(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "da" | "si" | "oui" | "yep" => Some(true),
        "0" | "false" | "no" | "non" | "nein" | "nyet" | "nope" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0, 2), "0 B");
        assert_eq!(format_bytes(512, 2), "512 B");
        assert_eq!(format_bytes(1536, 2), "1.5 KB");
        assert_eq!(format_bytes(1024 * 1024, 2), "1 MB");
        assert_eq!(format_bytes(1_288_490_189, 1), "1.2 GB");
        assert_eq!(format_bytes(5 * 1024_u64.pow(5), 0), "5120 TB");
    }

    #[test]
    fn test_is_true() {
        assert_eq!(is_true("Yes"), Some(true));
        assert_eq!(is_true(" 1 "), Some(true));
        assert_eq!(is_true("nope"), Some(false));
        assert_eq!(is_true("maybe"), None);
        assert_eq!(is_true("on"), None);
        assert_eq!(is_true("off"), None);
    }
}
