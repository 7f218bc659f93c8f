use models::{Standard, ValidationFailure, ValidationResult};

use crate::symbology::mod10_check_digit;

/// Validate a GS1 GTIN-14 device identifier.
///
/// The code must be exactly 14 digits; shorter GTINs are not zero-padded
/// here, callers are expected to pad before validating. The last digit is
/// checked against the modulo-10 weighted sum of the first thirteen.
pub fn validate_gs1(code: &str) -> ValidationResult {
    let length = code.chars().count();
    if length != 14 {
        return ValidationResult::fail(&ValidationFailure::Gs1Length { found: length });
    }

    // The dispatcher only routes all-digit input here, but the function is
    // public, so non-digit input still gets a result instead of a panic.
    if let Some(c) = code.chars().find(|c| !c.is_ascii_digit()) {
        return ValidationResult::fail(&ValidationFailure::Gs1Digit(c));
    }

    // All ASCII digits from here on, so byte indexing is safe.
    let (data, check) = code.split_at(13);
    let check = check.as_bytes()[0] - b'0';

    match mod10_check_digit(data) {
        Some(expected) if expected == check => ValidationResult::pass(
            Standard::Gs1,
            "Valid GS1 GTIN",
            "Checksum matches (Mod 10).",
        ),
        Some(expected) => ValidationResult::fail(&ValidationFailure::Gs1Checksum {
            expected,
            found: check,
        }),
        // Unreachable after the digit guard; kept so the match stays total.
        None => ValidationResult::fail(&ValidationFailure::Gs1Digit('?')),
    }
}
