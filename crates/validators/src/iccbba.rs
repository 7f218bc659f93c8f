use models::{Standard, ValidationFailure, ValidationResult};
use once_cell::sync::Lazy;
use regex::Regex;

// The letter O is excluded from facility identifiers so it cannot be
// confused with the digit 0.
static FACILITY_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-NP-Z0-9]{5}$").unwrap());
static PRODUCT_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{6}$").unwrap());
static DESC_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{5}$").unwrap());

/// Validate an ICCBBA UDI-DI (ISBT 128 Data Structure 034).
///
/// The structure is `=/` followed by a 5-character facility ID, a
/// 6-character product code and a 5-character description code, 18
/// characters in all. There is no check character; matching the three
/// positional character classes is the whole check. The `&/` prefix
/// variant is normalized to `=/` before the structural checks.
pub fn validate_iccbba(code: &str) -> ValidationResult {
    let code = if let Some(rest) = code.strip_prefix("&/") {
        format!("=/{}", rest)
    } else {
        code.to_string()
    };

    if !code.starts_with("=/") {
        return ValidationResult::fail(&ValidationFailure::IccbbaPrefix);
    }
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != 18 {
        return ValidationResult::fail(&ValidationFailure::IccbbaLength { found: chars.len() });
    }

    let facility: String = chars[2..7].iter().collect();
    let product: String = chars[7..13].iter().collect();
    let desc: String = chars[13..18].iter().collect();

    if !FACILITY_ID.is_match(&facility) {
        return ValidationResult::fail(&ValidationFailure::IccbbaFacilityId);
    }
    if !PRODUCT_CODE.is_match(&product) {
        return ValidationResult::fail(&ValidationFailure::IccbbaProductCode);
    }
    if !DESC_CODE.is_match(&desc) {
        return ValidationResult::fail(&ValidationFailure::IccbbaDescCode);
    }

    ValidationResult::pass(
        Standard::Iccbba,
        "Valid UDI-DI",
        "Format matches ISBT 128 Data Structure 034.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_structure_034() {
        let result = validate_iccbba("=/AAAAA111111BBBBB");
        assert!(result.valid);
        assert_eq!(result.standard, Standard::Iccbba);
        assert_eq!(result.title, "Valid UDI-DI");
    }

    #[test]
    fn ampersand_prefix_is_normalized() {
        let result = validate_iccbba("&/AAAAA111111BBBBB");
        assert!(result.valid);
    }

    #[test]
    fn rejects_other_prefixes() {
        let result = validate_iccbba("//AAAAA111111BBBBB");
        assert!(!result.valid);
        assert_eq!(result.title, "Invalid Prefix");
        assert_eq!(result.standard, Standard::Iccbba);
    }

    #[test]
    fn rejects_wrong_length() {
        let result = validate_iccbba("=/XXXXX");
        assert!(!result.valid);
        assert_eq!(result.title, "Invalid Length");
        assert!(result.message.contains("found 7"));
    }

    #[test]
    fn letter_o_in_facility_id_is_rejected() {
        let result = validate_iccbba("=/AAAOA111111BBBBB");
        assert!(!result.valid);
        assert_eq!(result.title, "Invalid Facility ID");
    }

    #[test]
    fn lowercase_product_code_is_rejected() {
        let result = validate_iccbba("=/AAAAA1111x1BBBBB");
        assert!(!result.valid);
        assert_eq!(result.title, "Invalid Product Code");
    }

    #[test]
    fn punctuation_in_description_code_is_rejected() {
        let result = validate_iccbba("=/AAAAA111111BBBB-");
        assert!(!result.valid);
        assert_eq!(result.title, "Invalid Desc Code");
    }

    #[test]
    fn letter_o_is_fine_outside_the_facility_id() {
        let result = validate_iccbba("=/AAAAAOOOOOOBBBBO");
        assert!(result.valid);
    }
}
