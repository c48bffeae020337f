use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

/// Both Art. 807 estimation methods and the taxpayer-favorable pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceOutput {
    pub percentage: Rate,
    pub method1: Money,
    pub method2: Money,
    /// Always `min(method1, method2)`, never the greater.
    pub selected: Money,
}

/// Advance percentage by number of filings: 25% the first year, 50%
/// the second, 75% from the third on.
pub fn advance_percentage(years_filed: u32) -> Rate {
    match years_filed {
        0 | 1 => dec!(0.25),
        2 => dec!(0.50),
        _ => dec!(0.75),
    }
}

/// Next-year advance payment under Art. 807.
///
/// Method 1 applies the percentage to the current net tax. Method 2
/// averages the current and prior-year net tax first, but only when a
/// prior year exists (`prior_net_tax > 0`, strictly); without one it
/// degenerates to method 1 rather than averaging against nothing.
pub fn compute_advance(
    net_tax: Money,
    prior_net_tax: Money,
    withholdings: Money,
    years_filed: u32,
) -> AdvanceOutput {
    let percentage = advance_percentage(years_filed);

    let method1 = (net_tax * percentage - withholdings).max(Decimal::ZERO);

    let method2 = if prior_net_tax > Decimal::ZERO {
        let average = (net_tax + prior_net_tax) / dec!(2);
        (average * percentage - withholdings).max(Decimal::ZERO)
    } else {
        method1
    };

    AdvanceOutput {
        percentage,
        method1,
        method2,
        selected: method1.min(method2),
    }
}
