use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::brackets::BracketTable;
use crate::types::{Money, Rate};

/// Every statutory constant the engine touches, passed explicitly at
/// call time. There is no process-wide UVT or rate; a calculation sees
/// exactly one immutable config from start to finish.
///
/// Caps expressed in UVT multiples are converted to pesos with
/// [`FiscalConfig::uvt_cap`] at the point of use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiscalConfig {
    pub fiscal_year: u16,
    /// Unidad de Valor Tributario, in pesos. Must be positive.
    pub uvt: Money,
    pub bracket_table: BracketTable,
    /// Statutory rounding: truncate the UVT base to a whole number
    /// before the bracket lookup.
    pub floor_base_before_lookup: bool,

    // 25% labor exemption (Art. 206 num. 10)
    pub exempt_25pct_rate: Rate,
    pub exempt_25pct_cap_uvt: Decimal,

    // Voluntary pension + AFC
    pub pension_afc_income_share: Rate,
    pub pension_afc_cap_uvt: Decimal,

    // Deduction caps
    pub dependent_uvt: Decimal,
    pub dependents_cap_uvt: Decimal,
    pub prepaid_medicine_cap_uvt: Decimal,
    pub housing_interest_cap_uvt: Decimal,

    // Art. 336 combined ceiling
    pub ceiling_rate: Rate,
    pub ceiling_cap_uvt: Decimal,

    // Post-ceiling benefits
    pub efactura_rate: Rate,
    pub efactura_cap_uvt: Decimal,
    pub gmf_rate: Rate,

    /// Whether settlement subtracts the prior-year credit balance and
    /// prior-year advance. One rule-set variant omits both.
    pub settle_prior_year_items: bool,
}

impl FiscalConfig {
    /// Gravable year 2024: UVT $47.065, revised Art. 241 table, no
    /// base flooring, 790-UVT cap on the 25% exemption.
    pub fn year_2024() -> Self {
        FiscalConfig {
            fiscal_year: 2024,
            uvt: dec!(47065),
            bracket_table: BracketTable::art241_revised(),
            floor_base_before_lookup: false,
            exempt_25pct_rate: dec!(0.25),
            exempt_25pct_cap_uvt: dec!(790),
            pension_afc_income_share: dec!(0.30),
            pension_afc_cap_uvt: dec!(3800),
            dependent_uvt: dec!(32),
            dependents_cap_uvt: dec!(384),
            prepaid_medicine_cap_uvt: dec!(192),
            housing_interest_cap_uvt: dec!(1200),
            ceiling_rate: dec!(0.40),
            ceiling_cap_uvt: dec!(1340),
            efactura_rate: dec!(0.01),
            efactura_cap_uvt: dec!(240),
            gmf_rate: dec!(0.50),
            settle_prior_year_items: true,
        }
    }

    /// Gravable year 2025: UVT $49.799, legacy Art. 241 table with the
    /// base floored to whole UVT, 2400-UVT cap on the 25% exemption.
    pub fn year_2025() -> Self {
        FiscalConfig {
            fiscal_year: 2025,
            uvt: dec!(49799),
            bracket_table: BracketTable::art241_legacy(),
            floor_base_before_lookup: true,
            exempt_25pct_cap_uvt: dec!(2400),
            ..Self::year_2024()
        }
    }

    /// Preset lookup by gravable year.
    pub fn for_year(year: u16) -> Option<Self> {
        match year {
            2024 => Some(Self::year_2024()),
            2025 => Some(Self::year_2025()),
            _ => None,
        }
    }

    /// Convert a UVT multiple into a peso cap.
    pub fn uvt_cap(&self, multiple: Decimal) -> Money {
        multiple * self.uvt
    }
}
