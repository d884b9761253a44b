//! Serial-number validity rules for the lookup API.

/// Longest serial the lookup API accepts.
pub const MAX_SERIAL_LEN: usize = 40;

/// Returns true when `serial` is syntactically plausible: non-empty, at most
/// [`MAX_SERIAL_LEN`] characters, ASCII alphanumeric only.
pub fn is_valid_serial(serial: &str) -> bool {
    !serial.is_empty()
        && serial.len() <= MAX_SERIAL_LEN
        && serial.chars().all(|ch| ch.is_ascii_alphanumeric())
}

/// Filters `serials` down to the entries that could be valid serials,
/// preserving order. Entries failing the rules are dropped silently: they
/// cannot match any vendor record, and punctuation or whitespace would
/// corrupt the comma-joined request path.
pub fn filter_serials(serials: &[String]) -> Vec<String> {
    serials
        .iter()
        .filter(|serial| is_valid_serial(serial.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_alphanumerics() {
        assert!(is_valid_serial("FOC1234X0AB"));
        assert!(is_valid_serial("abc123"));
        assert!(is_valid_serial(&"A".repeat(MAX_SERIAL_LEN)));
    }

    #[test]
    fn rejects_empty_long_and_punctuated() {
        assert!(!is_valid_serial(""));
        assert!(!is_valid_serial(&"A".repeat(MAX_SERIAL_LEN + 1)));
        assert!(!is_valid_serial("FOC-1234"));
        assert!(!is_valid_serial("FOC 1234"));
        assert!(!is_valid_serial("SER1,SER2"));
        assert!(!is_valid_serial("héllo1"));
    }

    #[test]
    fn filter_preserves_order_and_drops_invalid() {
        let input = vec![
            "SER1".to_string(),
            "not a serial".to_string(),
            "SER2".to_string(),
            String::new(),
            "SER3".to_string(),
        ];
        assert_eq!(filter_serials(&input), vec!["SER1", "SER2", "SER3"]);
    }

    #[test]
    fn filter_of_all_valid_is_identity() {
        let input = vec!["AAA1".to_string(), "BBB2".to_string()];
        assert_eq!(filter_serials(&input), input);
    }
}
