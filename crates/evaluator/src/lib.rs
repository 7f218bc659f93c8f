//! Classifies raw input by prefix/shape and routes it to the matching
//! issuer validator.

use once_cell::sync::Lazy;
use regex::Regex;

use models::{ValidationFailure, ValidationResult};
use validators::{validate_gs1, validate_hibcc, validate_iccbba};

// ASCII digits only; Unicode digit classes would let non-GTIN input through.
static ALL_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// How a trimmed input looks before any validation has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classification {
    Iccbba,
    Hibcc,
    Gs1Candidate,
    Unknown,
}

// First match wins; the order mirrors how the prefixes overlap (an ICCBBA
// code never starts with '+', a HIBC code is never all digits).
fn classify(input: &str) -> Classification {
    if input.starts_with("=/") || input.starts_with("&/") {
        Classification::Iccbba
    } else if input.starts_with('+') {
        Classification::Hibcc
    } else if ALL_DIGITS.is_match(input) {
        Classification::Gs1Candidate
    } else {
        Classification::Unknown
    }
}

/// Detect the issuing standard of `raw` and validate against it.
///
/// Returns `None` for empty (or all-whitespace) input so the caller can
/// suppress any display. Once a standard is matched by shape, its
/// validator's specific failure is surfaced -- a 13-digit code comes back
/// as a GS1 length failure, not as an unknown format.
pub fn evaluate_code(raw: &str) -> Option<ValidationResult> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }

    let result = match classify(input) {
        Classification::Iccbba => validate_iccbba(input),
        Classification::Hibcc => validate_hibcc(input),
        Classification::Gs1Candidate => validate_gs1(input),
        Classification::Unknown => ValidationResult::fail(&ValidationFailure::UnknownFormat),
    };

    Some(result)
}
