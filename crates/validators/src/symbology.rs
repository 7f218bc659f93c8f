//! Checksum primitives shared by the issuer validators.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The HIBC modulo-43 symbol table. A character's position is its value.
pub const CODE43_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

static CODE43_INDEX: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    CODE43_CHARSET
        .chars()
        .enumerate()
        .map(|(i, c)| (c, i as u32))
        .collect()
});

/// Value of a character in the modulo-43 table, `None` if it is not in the
/// 43-symbol set.
pub fn code43_value(c: char) -> Option<u32> {
    CODE43_INDEX.get(&c).copied()
}

/// Character the modulo-43 scheme assigns to a running sum.
pub fn code43_check_char(sum: u32) -> char {
    let index = (sum % 43) as usize;
    // Index is always in range after the modulo.
    CODE43_CHARSET.as_bytes()[index] as char
}

/// GTIN modulo-10 check digit for a string of data digits (check digit not
/// included). Digits are weighted 3, 1, 3, 1, ... starting from the
/// rightmost data digit.
pub fn mod10_check_digit(data: &str) -> Option<u8> {
    let mut sum = 0u32;
    for (i, c) in data.chars().rev().enumerate() {
        let digit = c.to_digit(10)?;
        let weight = if i % 2 == 0 { 3 } else { 1 };
        sum += digit * weight;
    }
    Some(((10 - (sum % 10)) % 10) as u8)
}
