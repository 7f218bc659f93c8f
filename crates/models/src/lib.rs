use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Issuing agency a UDI device identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Standard {
    #[serde(rename = "GS1")]
    Gs1,
    #[serde(rename = "HIBCC")]
    Hibcc,
    #[serde(rename = "ICCBBA")]
    Iccbba,
    Unknown,
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Standard::Gs1 => "GS1",
            Standard::Hibcc => "HIBCC",
            Standard::Iccbba => "ICCBBA",
            Standard::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Standard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gs1" => Ok(Standard::Gs1),
            "hibcc" | "hibc" => Ok(Standard::Hibcc),
            "iccbba" | "isbt128" | "isbt-128" => Ok(Standard::Iccbba),
            "unknown" => Ok(Standard::Unknown),
            other => Err(format!(
                "unknown standard '{}' (expected gs1, hibcc, iccbba or unknown)",
                other
            )),
        }
    }
}

/// Every way a device identifier can fail validation.
///
/// The `#[error]` strings are the user-facing detail messages; `title()`
/// gives the short card heading and `standard()` the issuer the failure
/// belongs to. Validators never return errors through `Result` -- a
/// failure is converted into a `ValidationResult` with `valid: false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error(
        "GS1 UDI-DI must be exactly 14 digits, found {found}. \
         Shorter GTINs (e.g. GTIN-13) must be padded with leading zeros."
    )]
    Gs1Length { found: usize },

    #[error("Expected check digit {expected}, found {found}.")]
    Gs1Checksum { expected: u8, found: u8 },

    #[error("Character '{0}' is not a digit.")]
    Gs1Digit(char),

    #[error("Character '{0}' is not in the HIBC 43-character set.")]
    HibccCharacter(char),

    #[error("Expected check character '{expected}', found '{found}'.")]
    HibccChecksum { expected: char, found: char },

    #[error("ICCBBA UDI-DI must start with =/.")]
    IccbbaPrefix,

    #[error("ICCBBA Data Structure 034 is exactly 18 characters, found {found}.")]
    IccbbaLength { found: usize },

    #[error("Facility ID contains invalid characters (e.g. the letter O).")]
    IccbbaFacilityId,

    #[error("Invalid characters in product code.")]
    IccbbaProductCode,

    #[error("Invalid characters in product description code.")]
    IccbbaDescCode,

    #[error("Could not detect standard (GS1, HIBCC, ICCBBA).")]
    UnknownFormat,
}

impl ValidationFailure {
    pub fn title(&self) -> &'static str {
        match self {
            ValidationFailure::Gs1Length { .. } | ValidationFailure::IccbbaLength { .. } => {
                "Invalid Length"
            }
            ValidationFailure::Gs1Checksum { .. } => "Invalid GS1 Checksum",
            ValidationFailure::Gs1Digit(_) | ValidationFailure::HibccCharacter(_) => {
                "Invalid Character"
            }
            ValidationFailure::HibccChecksum { .. } => "Invalid HIBCC Checksum",
            ValidationFailure::IccbbaPrefix => "Invalid Prefix",
            ValidationFailure::IccbbaFacilityId => "Invalid Facility ID",
            ValidationFailure::IccbbaProductCode => "Invalid Product Code",
            ValidationFailure::IccbbaDescCode => "Invalid Desc Code",
            ValidationFailure::UnknownFormat => "Unknown Format",
        }
    }

    pub fn standard(&self) -> Standard {
        match self {
            ValidationFailure::Gs1Length { .. }
            | ValidationFailure::Gs1Checksum { .. }
            | ValidationFailure::Gs1Digit(_) => Standard::Gs1,
            ValidationFailure::HibccCharacter(_) | ValidationFailure::HibccChecksum { .. } => {
                Standard::Hibcc
            }
            ValidationFailure::IccbbaPrefix
            | ValidationFailure::IccbbaLength { .. }
            | ValidationFailure::IccbbaFacilityId
            | ValidationFailure::IccbbaProductCode
            | ValidationFailure::IccbbaDescCode => Standard::Iccbba,
            ValidationFailure::UnknownFormat => Standard::Unknown,
        }
    }
}

/// Outcome of validating a single device identifier.
///
/// One result per call, no state carried between calls. `standard` always
/// names the issuer the dispatcher selected, even when validation failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub title: String,
    pub message: String,
    pub standard: Standard,
}

impl ValidationResult {
    pub fn pass(standard: Standard, title: &str, message: &str) -> Self {
        ValidationResult {
            valid: true,
            title: title.to_string(),
            message: message.to_string(),
            standard,
        }
    }

    pub fn fail(failure: &ValidationFailure) -> Self {
        ValidationResult {
            valid: false,
            title: failure.title().to_string(),
            message: failure.to_string(),
            standard: failure.standard(),
        }
    }
}
