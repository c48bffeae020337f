pub mod advance;
pub mod assess;
pub mod brackets;
pub mod depurate;

use renta_core::FiscalConfig;

/// Resolve a gravable-year preset or fail with the supported years.
pub fn fiscal_config(year: u16) -> Result<FiscalConfig, Box<dyn std::error::Error>> {
    FiscalConfig::for_year(year)
        .ok_or_else(|| format!("No fiscal preset for year {year} (supported: 2024, 2025)").into())
}
