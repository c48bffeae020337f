use serde_json::Value;

use super::currency::{format_pesos, parse_decimal};

/// Print just the headline answer.
///
/// A full assessment gets the two numbers a taxpayer cares about: the
/// final balance (payable or in favor) and next year's advance. Other
/// outputs fall back to a priority list of well-known fields, then to
/// the first field.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(settlement) = result.get("settlement") {
        let amount = settlement.get("amount").and_then(parse_decimal);
        let is_refund = settlement
            .get("is_refund")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if let Some(amount) = amount {
            if is_refund {
                println!("Saldo a favor: {}", format_pesos(amount));
            } else {
                println!("Saldo a pagar: {}", format_pesos(amount));
            }
        }
        if let Some(advance) = result
            .get("advance")
            .and_then(|a| a.get("selected"))
            .and_then(parse_decimal)
        {
            println!("Anticipo próximo año: {}", format_pesos(advance));
        }
        return;
    }

    let priority_keys = ["taxable_base", "selected", "tax_pesos", "final_balance", "total"];

    if let Value::Object(map) = result {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    match parse_decimal(val) {
                        Some(d) => println!("{}", format_pesos(d)),
                        None => println!("{}", format_minimal(val)),
                    }
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
