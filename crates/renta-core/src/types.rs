use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values, in Colombian pesos. Wraps Decimal to prevent
/// accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.25 = 25%). Never as percentages.
pub type Rate = Decimal;

/// The flat input record for one tax year. All monetary fields are
/// annual peso amounts and must be non-negative; `years_filed` counts
/// prior filings including this one (1, 2, or 3+).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxpayerInputs {
    // Labor income
    pub salaries: Money,
    /// Cesantías paid or deposited during the year.
    pub severance_pay: Money,
    pub social_benefits: Money,
    pub other_labor_payments: Money,
    /// Average monthly income over the last six months; drives the
    /// severance exemption tier.
    pub average_monthly_income: Money,

    // Non-constitutive income (INCR): obligatory health and pension
    // contributions excluded before any exemption is computed.
    pub incr_health: Money,
    pub incr_pension: Money,

    // Exempt-income contributions
    pub voluntary_pension: Money,
    pub afc_contributions: Money,

    // Deductions
    pub dependents: u32,
    pub housing_interest: Money,
    pub prepaid_medicine: Money,

    // Post-ceiling benefits
    pub efactura_purchases: Money,
    pub gmf_paid: Money,

    // Prior-year items and withholdings
    pub prior_net_tax: Money,
    pub prior_credit_balance: Money,
    pub prior_advance: Money,
    pub withholdings: Money,
    pub years_filed: u32,
}

impl TaxpayerInputs {
    /// Sum of all labor income components.
    pub fn gross_income(&self) -> Money {
        self.salaries + self.severance_pay + self.social_benefits + self.other_labor_payments
    }

    /// Total income not constitutive of taxable income.
    pub fn incr_total(&self) -> Money {
        self.incr_health + self.incr_pension
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
