// Utility functions shared between the engine pipeline stages.

/// Brazilian number format handling: '.' as thousand separator and ',' as
/// decimal separator, e.g. "1.234.567,89".
pub mod brazilian_format {
    use anyhow::{anyhow, Result};
    use std::str::FromStr;

    /// Parses decimals like "1.234,56" or "123,45" into f64.
    pub fn parse_decimal(s: &str) -> Result<f64> {
        let normalized = s
            .trim()
            .replace('.', "") // Remove thousand separators
            .replace(',', "."); // Replace decimal separator

        f64::from_str(&normalized).map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
    }

    /// Formats a value back into the Brazilian decimal convention.
    pub fn format_decimal(value: f64, decimals: usize) -> String {
        let formatted = format!("{:.decimals$}", value, decimals = decimals);
        formatted.replace('.', ",")
    }
}

/// Normalizes an administrative scope ("Âmbito") label so that variants such
/// as "federal " and "FEDERAL" collapse into a single category.
pub fn normalize_scope(s: &str) -> String {
    s.trim().to_uppercase()
}
