use models::{Standard, ValidationFailure, ValidationResult};

use crate::symbology::{code43_check_char, code43_value};

/// Validate a HIBC code against its modulo-43 check character.
///
/// The whole string up to the last character is summed, including the
/// leading `+` LIC flag -- the standard counts it. A `/$` secondary
/// segment, if present, is summed like any other data; it is not parsed
/// or validated separately.
pub fn validate_hibcc(code: &str) -> ValidationResult {
    // The dispatcher never routes an empty string here, but keep the
    // function total for direct callers.
    let check_char = match code.chars().last() {
        Some(c) => c,
        None => return ValidationResult::fail(&ValidationFailure::UnknownFormat),
    };
    let data_len = code.chars().count() - 1;

    let mut sum = 0u32;
    for c in code.chars().take(data_len) {
        match code43_value(c) {
            Some(value) => sum += value,
            None => return ValidationResult::fail(&ValidationFailure::HibccCharacter(c)),
        }
    }

    let expected = code43_check_char(sum);
    if expected == check_char {
        ValidationResult::pass(
            Standard::Hibcc,
            "Valid HIBCC UDI",
            "Checksum matches (Mod 43).",
        )
    } else {
        ValidationResult::fail(&ValidationFailure::HibccChecksum {
            expected,
            found: check_char,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "+A12": '+' = 41, 'A' = 10, '1' = 1, '2' = 2, sum 54, 54 % 43 = 11 = 'B'.
    #[test]
    fn accepts_code_with_matching_check_character() {
        let result = validate_hibcc("+A12B");
        assert!(result.valid);
        assert_eq!(result.standard, Standard::Hibcc);
        assert_eq!(result.title, "Valid HIBCC UDI");
    }

    // "+A12/$4": 41 + 10 + 1 + 2 + 40 + 39 + 4 = 137, 137 % 43 = 8 = '8'.
    #[test]
    fn secondary_segment_is_summed_opaquely() {
        let result = validate_hibcc("+A12/$48");
        assert!(result.valid);
    }

    #[test]
    fn reports_expected_and_found_on_mismatch() {
        let result = validate_hibcc("+A12C");
        assert!(!result.valid);
        assert_eq!(result.title, "Invalid HIBCC Checksum");
        assert!(result.message.contains("'B'"));
        assert!(result.message.contains("'C'"));
    }

    #[test]
    fn character_outside_the_table_short_circuits() {
        // Lowercase 'a' is not in the 43-symbol set; the '#' after it must
        // never be reported because the scan stops at the first offender.
        let result = validate_hibcc("+a#12B");
        assert!(!result.valid);
        assert_eq!(result.title, "Invalid Character");
        assert!(result.message.contains("'a'"));
        assert!(!result.message.contains('#'));
    }

    #[test]
    fn check_character_itself_is_not_table_checked() {
        // Only the data part is scanned; a bad final character surfaces as
        // a checksum mismatch, not an invalid character.
        let result = validate_hibcc("+A12b");
        assert_eq!(result.title, "Invalid HIBCC Checksum");
    }

    #[test]
    fn lone_plus_fails_its_own_checksum() {
        // Data is empty, sum 0, expected check char '0'.
        let result = validate_hibcc("+");
        assert!(!result.valid);
        assert_eq!(result.standard, Standard::Hibcc);
        assert!(result.message.contains("'0'"));
    }
}
