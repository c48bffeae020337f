use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Colombian peso presentation: round half-up to the whole peso, then
/// group thousands with periods, e.g. `$ 1.371.722`. The engine itself
/// never rounds; this is the single presentation-time rounding rule.
pub fn format_pesos(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-$ {grouped}")
    } else {
        format!("$ {grouped}")
    }
}

/// Decimals cross the JSON boundary as strings; plain numbers are
/// accepted too.
pub fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_thousands_colombian_style() {
        assert_eq!(format_pesos(dec!(0)), "$ 0");
        assert_eq!(format_pesos(dec!(950)), "$ 950");
        assert_eq!(format_pesos(dec!(1371722.10)), "$ 1.371.722");
        assert_eq!(format_pesos(dec!(-1000000)), "-$ 1.000.000");
    }

    #[test]
    fn rounds_half_up_at_presentation() {
        assert_eq!(format_pesos(dec!(8942.35)), "$ 8.942");
        assert_eq!(format_pesos(dec!(8942.50)), "$ 8.943");
    }
}
