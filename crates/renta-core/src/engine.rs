use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::advance::{self, AdvanceOutput};
use crate::config::FiscalConfig;
use crate::depuration::{self, DepurationResult};
use crate::error::RentaError;
use crate::settlement::{self, SettlementOutput};
use crate::types::*;
use crate::RentaResult;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Complete result of one assessment: the audited depuration, the
/// bracket outcome in both units, and the advance and settlement
/// stages. Immutable once produced; pesos are exact decimals and any
/// rounding to whole pesos happens at presentation time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutput {
    pub depuration: DepurationResult,
    pub taxable_base: Money,
    pub taxable_base_uvt: Decimal,
    pub net_tax_uvt: Decimal,
    pub net_tax: Money,
    pub advance: AdvanceOutput,
    pub settlement: SettlementOutput,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the full assessment: validate, depurate, apply the bracket
/// table, compute the next-year advance, and settle.
///
/// Pure over its arguments; no shared state, safe to call from any
/// number of threads concurrently.
pub fn assess(
    inputs: &TaxpayerInputs,
    config: &FiscalConfig,
) -> RentaResult<ComputationOutput<AssessmentOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate(inputs, config)?;

    if inputs.severance_pay > Decimal::ZERO && inputs.average_monthly_income.is_zero() {
        warnings.push(
            "Severance pay present but average monthly income is zero; no severance exemption applied."
                .into(),
        );
    }

    let depuration = depuration::depurate(inputs, config);

    // UVT is validated positive, so the conversion cannot divide by zero.
    let taxable_base_uvt = depuration.taxable_base / config.uvt;
    let net_tax_uvt = config
        .bracket_table
        .tax_in_uvt(taxable_base_uvt, config.floor_base_before_lookup);
    let net_tax = net_tax_uvt * config.uvt;

    let advance = advance::compute_advance(
        net_tax,
        inputs.prior_net_tax,
        inputs.withholdings,
        inputs.years_filed,
    );

    let settlement = settlement::settle(
        net_tax,
        inputs.withholdings,
        inputs.prior_credit_balance,
        inputs.prior_advance,
        advance.selected,
        config.settle_prior_year_items,
    );

    if settlement.is_refund && inputs.withholdings.is_zero() {
        warnings.push("Balance in the taxpayer's favor without withholdings; check prior-year credit inputs.".into());
    }

    let output = AssessmentOutput {
        taxable_base: depuration.taxable_base,
        depuration,
        taxable_base_uvt,
        net_tax_uvt,
        net_tax,
        advance,
        settlement,
    };

    let elapsed_us = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Colombian natural-person labor income tax: Art. 336 depuration, Art. 241 progressive table, Art. 807 advance",
        config,
        warnings,
        elapsed_us,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Fail-fast batch validation. The first violation is reported with
/// its field name; no partial results are ever produced.
pub fn validate(inputs: &TaxpayerInputs, config: &FiscalConfig) -> RentaResult<()> {
    if config.uvt <= Decimal::ZERO {
        return Err(RentaError::invalid("uvt", "UVT must be positive"));
    }

    let monetary_fields: [(&str, Money); 17] = [
        ("salaries", inputs.salaries),
        ("severance_pay", inputs.severance_pay),
        ("social_benefits", inputs.social_benefits),
        ("other_labor_payments", inputs.other_labor_payments),
        ("average_monthly_income", inputs.average_monthly_income),
        ("incr_health", inputs.incr_health),
        ("incr_pension", inputs.incr_pension),
        ("voluntary_pension", inputs.voluntary_pension),
        ("afc_contributions", inputs.afc_contributions),
        ("housing_interest", inputs.housing_interest),
        ("prepaid_medicine", inputs.prepaid_medicine),
        ("efactura_purchases", inputs.efactura_purchases),
        ("gmf_paid", inputs.gmf_paid),
        ("prior_net_tax", inputs.prior_net_tax),
        ("prior_credit_balance", inputs.prior_credit_balance),
        ("prior_advance", inputs.prior_advance),
        ("withholdings", inputs.withholdings),
    ];

    for (field, value) in monetary_fields {
        if value < Decimal::ZERO {
            return Err(RentaError::invalid(field, "monetary values must be zero or positive"));
        }
    }

    if inputs.years_filed < 1 {
        return Err(RentaError::invalid(
            "years_filed",
            "must be at least 1 (first declaration)",
        ));
    }

    // Obligatory health/pension contributions cannot exceed the income
    // they were withheld from.
    if inputs.incr_total() > inputs.gross_income() {
        return Err(RentaError::invalid(
            "incr_health + incr_pension",
            "obligatory contributions cannot exceed gross labor income",
        ));
    }

    Ok(())
}
