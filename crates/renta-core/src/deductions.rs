use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::FiscalConfig;
use crate::types::{Money, TaxpayerInputs};

/// Per-category deductions after their individual caps, plus the
/// unweighted sum. The total is not final: the Art. 336 combined
/// ceiling in the depuration pipeline still applies on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    pub dependents: Money,
    pub prepaid_medicine: Money,
    pub housing_interest: Money,
    pub total: Money,
}

/// Caps are per category and never shared: dependents at a fixed UVT
/// amount per dependent up to an aggregate cap, prepaid medicine and
/// housing interest each against their own UVT cap.
pub fn aggregate(inputs: &TaxpayerInputs, config: &FiscalConfig) -> DeductionBreakdown {
    let per_dependent = config.uvt_cap(config.dependent_uvt);
    let dependents = (Decimal::from(inputs.dependents) * per_dependent)
        .min(config.uvt_cap(config.dependents_cap_uvt));

    let prepaid_medicine = inputs
        .prepaid_medicine
        .min(config.uvt_cap(config.prepaid_medicine_cap_uvt));

    let housing_interest = inputs
        .housing_interest
        .min(config.uvt_cap(config.housing_interest_cap_uvt));

    DeductionBreakdown {
        dependents,
        prepaid_medicine,
        housing_interest,
        total: dependents + prepaid_medicine + housing_interest,
    }
}
