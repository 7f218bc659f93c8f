//! Result-card rendering. The validation core only produces
//! `ValidationResult` values; everything about how they look lives here.

use colored::Colorize;
use models::ValidationResult;

pub fn print_result(result: &ValidationResult) {
    let badge = format!("[{}]", result.standard);

    if result.valid {
        println!("✅ {} {}", result.title.green().bold(), badge.cyan());
    } else {
        println!("❌ {} {}", result.title.red().bold(), badge.cyan());
    }
    println!("   {}", result.message);

    let hint = format!(
        "About this format: udichk info {}",
        result.standard.to_string().to_lowercase()
    );
    println!("   {}", hint.dimmed());
}

pub fn print_result_json(result: &ValidationResult) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => logging::error(&format!("Failed to serialize result: {}", e)),
    }
}
