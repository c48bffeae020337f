use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

/// Arguments for a single bracket-table lookup
#[derive(Args)]
pub struct BracketTaxArgs {
    /// Taxable base in UVT
    #[arg(long)]
    pub base_uvt: Decimal,

    /// Override the year preset's flooring of the base
    #[arg(long)]
    pub no_floor: bool,
}

#[derive(Serialize)]
struct BracketTaxOutput {
    table: String,
    base_uvt: Decimal,
    floored: bool,
    tax_uvt: Decimal,
    tax_pesos: Decimal,
}

pub fn run_bracket_tax(args: BracketTaxArgs, year: u16) -> Result<Value, Box<dyn std::error::Error>> {
    let config = super::fiscal_config(year)?;
    if args.base_uvt < Decimal::ZERO {
        return Err("--base-uvt must be zero or positive".into());
    }

    let floored = config.floor_base_before_lookup && !args.no_floor;
    let tax_uvt = config.bracket_table.tax_in_uvt(args.base_uvt, floored);
    let output = BracketTaxOutput {
        table: config.bracket_table.name.clone(),
        base_uvt: args.base_uvt,
        floored,
        tax_uvt,
        tax_pesos: tax_uvt * config.uvt,
    };
    Ok(serde_json::to_value(output)?)
}
