use clap::Args;
use serde_json::Value;

use renta_core::engine;
use renta_core::types::TaxpayerInputs;

use crate::input;

/// Arguments for a full assessment
#[derive(Args)]
pub struct AssessArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_assess(args: AssessArgs, year: u16) -> Result<Value, Box<dyn std::error::Error>> {
    let config = super::fiscal_config(year)?;
    let inputs: TaxpayerInputs = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for assess".into());
    };
    let result = engine::assess(&inputs, &config)?;
    Ok(serde_json::to_value(result)?)
}
