use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::FiscalConfig;
use crate::deductions::{self, DeductionBreakdown};
use crate::exemptions;
use crate::types::{Money, TaxpayerInputs};

/// Every intermediate of the Art. 336 income reduction, retained so a
/// declaration can be audited line by line. Recomputed in full on each
/// call; nothing here is mutated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepurationResult {
    pub gross_income: Money,
    pub incr_total: Money,
    /// Gross income minus INCR, floored at zero.
    pub net_income: Money,
    pub severance_exemption: Money,
    pub deductions: DeductionBreakdown,
    /// Base on which the 25% labor exemption is computed.
    pub exempt_25pct_base: Money,
    pub exempt_25pct: Money,
    pub pension_afc_capped: Money,
    /// Severance + 25% exemption + pension/AFC, before the ceiling.
    pub exempt_total: Money,
    /// Exempt total plus deductions, before the ceiling.
    pub combined_reduction: Money,
    /// The lesser of 40% of net income and the 1340-UVT cap.
    pub ceiling: Money,
    pub applied_reduction: Money,
    pub pre_benefit_base: Money,
    pub efactura_credit: Money,
    pub gmf_credit: Money,
    pub taxable_base: Money,
}

/// Run the depuration pipeline. The step order is fixed by statute:
/// the 25% exemption base depends on severance and deductions, the
/// ceiling depends on net income, and the invoice/GMF benefits apply
/// only after the ceiling. Callers must validate inputs first (the
/// engine does); over non-negative inputs the function is total.
pub fn depurate(inputs: &TaxpayerInputs, config: &FiscalConfig) -> DepurationResult {
    let gross_income = inputs.gross_income();
    let incr_total = inputs.incr_total();
    let net_income = (gross_income - incr_total).max(Decimal::ZERO);

    let severance_exemption =
        exemptions::severance_exemption(inputs.severance_pay, inputs.average_monthly_income, config.uvt);

    let deductions = deductions::aggregate(inputs, config);

    let exempt_25pct_base = (gross_income - incr_total - severance_exemption - deductions.total)
        .max(Decimal::ZERO);
    let exempt_25pct = (exempt_25pct_base * config.exempt_25pct_rate)
        .min(config.uvt_cap(config.exempt_25pct_cap_uvt));

    let pension_afc_capped = (inputs.voluntary_pension + inputs.afc_contributions)
        .min(gross_income * config.pension_afc_income_share)
        .min(config.uvt_cap(config.pension_afc_cap_uvt));

    let exempt_total = severance_exemption + exempt_25pct + pension_afc_capped;
    let combined_reduction = exempt_total + deductions.total;

    let ceiling = (net_income * config.ceiling_rate).min(config.uvt_cap(config.ceiling_cap_uvt));
    let applied_reduction = combined_reduction.min(ceiling);
    let pre_benefit_base = net_income - applied_reduction;

    let efactura_credit = (inputs.efactura_purchases * config.efactura_rate)
        .min(config.uvt_cap(config.efactura_cap_uvt));
    let gmf_credit = inputs.gmf_paid * config.gmf_rate;

    let taxable_base = (pre_benefit_base - efactura_credit - gmf_credit).max(Decimal::ZERO);

    DepurationResult {
        gross_income,
        incr_total,
        net_income,
        severance_exemption,
        deductions,
        exempt_25pct_base,
        exempt_25pct,
        pension_afc_capped,
        exempt_total,
        combined_reduction,
        ceiling,
        applied_reduction,
        pre_benefit_base,
        efactura_credit,
        gmf_credit,
        taxable_base,
    }
}
