use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

/// Art. 206 num. 4 tier table: exempt fraction of severance pay by
/// average monthly income in UVT. Upper bounds are inclusive; above
/// the last tier nothing is exempt.
const SEVERANCE_TIERS: [(Decimal, Decimal); 6] = [
    (dec!(350), dec!(1.00)),
    (dec!(410), dec!(0.90)),
    (dec!(470), dec!(0.80)),
    (dec!(530), dec!(0.60)),
    (dec!(590), dec!(0.40)),
    (dec!(650), dec!(0.20)),
];

/// Exempt fraction of severance pay for a given average monthly income
/// (pesos) and UVT. A zero or missing average income yields a zero
/// fraction rather than an error; a non-positive UVT likewise
/// short-circuits (the engine rejects it during validation, this keeps
/// the function total for direct callers).
pub fn exempt_fraction(average_monthly_income: Money, uvt: Money) -> Rate {
    if average_monthly_income <= Decimal::ZERO || uvt <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let income_uvt = average_monthly_income / uvt;
    for (upper, fraction) in SEVERANCE_TIERS {
        if income_uvt <= upper {
            return fraction;
        }
    }
    Decimal::ZERO
}

/// Exempt portion of severance pay (cesantías). Zero severance pay
/// short-circuits to zero.
pub fn severance_exemption(severance_pay: Money, average_monthly_income: Money, uvt: Money) -> Money {
    if severance_pay.is_zero() {
        return Decimal::ZERO;
    }
    severance_pay * exempt_fraction(average_monthly_income, uvt)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UVT: Decimal = dec!(47065);

    #[test]
    fn tier_bounds_are_inclusive() {
        // Exactly 350 UVT of average income keeps the full exemption.
        assert_eq!(exempt_fraction(dec!(350) * UVT, UVT), dec!(1.00));
        assert_eq!(exempt_fraction(dec!(350) * UVT + dec!(1), UVT), dec!(0.90));
        assert_eq!(exempt_fraction(dec!(650) * UVT, UVT), dec!(0.20));
        assert_eq!(exempt_fraction(dec!(650) * UVT + dec!(1), UVT), dec!(0));
    }

    #[test]
    fn zero_inputs_short_circuit() {
        assert_eq!(severance_exemption(dec!(0), dec!(10_000_000), UVT), dec!(0));
        assert_eq!(severance_exemption(dec!(1_000_000), dec!(0), UVT), dec!(0));
    }
}
