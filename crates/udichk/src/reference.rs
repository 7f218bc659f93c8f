//! Static reference text per issuing standard, shown by `udichk info`.
//! This is display data keyed by the core's `standard` field, not logic.

use models::Standard;

pub fn describe(standard: Standard) -> &'static str {
    match standard {
        Standard::Gs1 => GS1,
        Standard::Hibcc => HIBCC,
        Standard::Iccbba => ICCBBA,
        Standard::Unknown => UNKNOWN,
    }
}

const GS1: &str = "\
Standard: GS1 General Specifications
Issuer:   GS1 AISBL (https://www.gs1.org)

GS1 UDI-DIs are 14-digit numeric codes (GTIN-14). Shorter GTINs
(GTIN-8, GTIN-12, GTIN-13) must be padded with leading zeros to form
14 digits.

On the barcode, the UDI-DI is identified by the Application
Identifier (01).

Example:
    (01)00614141007349(17)141231(10)A12345B(21)1234
        ^^^^^^^^^^^^^^ UDI-DI

Validation method: Modulo 10.
  1. Multiply digits by 3 and 1 alternately (from the right).
  2. Sum the results.
  3. Subtract the sum from the next multiple of 10.";

const HIBCC: &str = "\
Standard: Health Industry Bar Code (HIBC)
Issuer:   Health Industry Business Communications Council
          (https://www.hibcc.org)

HIBCC UDI-DIs begin with a '+' character (the LIC flag).

Structure: +LIC + Product ID + CheckChar

If the code combines a Primary PI (Product Identifier) with a
Secondary (DI), i.e. it contains a /$ segment, validate the full
code. The PI cannot be verified on its own without the DI.

Example:
    +EZIEZIEHMSOLOFDA11/$+56193/16D20250625W

Validation method: Modulo 43.
  1. Assign values to all characters (0-9, A-Z, -, ., Space, $, /, +, %).
  2. Sum the values of all characters including the leading '+'.
  3. Sum % 43 gives the index of the check character.";

const ICCBBA: &str = "\
Standard: ISBT 128
Issuer:   International Council for Commonality in Blood Banking
          Automation (https://www.iccbba.org)

The ICCBBA UDI-DI (Processor Product Identification Code) typically
starts with =/.

Structure (Data Structure 034):
    =/       prefix
    nnnnn    5-char Facility ID (letter O not allowed)
    pppppp   6-char Product Code
    qqqqq    5-char Product Description Code

Validation: checks the character class of each section. This
structure does not carry an embedded check character for the DI
itself.";

const UNKNOWN: &str = "\
Unknown Format

The input did not match the patterns of the supported issuers:
  - GS1    (all numeric)          https://www.gs1.org
  - HIBCC  (starts with +)        https://www.hibcc.org
  - ICCBBA (starts with =/)       https://www.iccbba.org";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_standard_has_reference_text() {
        for standard in [
            Standard::Gs1,
            Standard::Hibcc,
            Standard::Iccbba,
            Standard::Unknown,
        ] {
            assert!(!describe(standard).is_empty());
        }
    }

    #[test]
    fn reference_text_names_its_issuer() {
        assert!(describe(Standard::Gs1).contains("GS1"));
        assert!(describe(Standard::Hibcc).contains("Modulo 43"));
        assert!(describe(Standard::Iccbba).contains("Data Structure 034"));
    }
}
