use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use renta_core::advance;

/// Arguments for the Art. 807 advance comparator
#[derive(Args)]
pub struct AdvanceArgs {
    /// Net tax of the current year, in pesos
    #[arg(long)]
    pub net_tax: Decimal,

    /// Net tax of the prior year, in pesos (0 if none)
    #[arg(long, default_value = "0")]
    pub prior_net_tax: Decimal,

    /// Withholdings practiced during the year, in pesos
    #[arg(long, default_value = "0")]
    pub withholdings: Decimal,

    /// Number of declarations filed, including this one
    #[arg(long)]
    pub years_filed: u32,
}

pub fn run_advance(args: AdvanceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    for (name, value) in [
        ("--net-tax", args.net_tax),
        ("--prior-net-tax", args.prior_net_tax),
        ("--withholdings", args.withholdings),
    ] {
        if value < Decimal::ZERO {
            return Err(format!("{name} must be zero or positive").into());
        }
    }
    if args.years_filed < 1 {
        return Err("--years-filed must be at least 1".into());
    }

    let result = advance::compute_advance(
        args.net_tax,
        args.prior_net_tax,
        args.withholdings,
        args.years_filed,
    );
    Ok(serde_json::to_value(result)?)
}
