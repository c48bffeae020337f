use clap::Args;
use serde_json::Value;

use renta_core::types::TaxpayerInputs;
use renta_core::{depuration, engine};

use crate::input;

/// Arguments for the depuration audit
#[derive(Args)]
pub struct DepurateArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_depurate(args: DepurateArgs, year: u16) -> Result<Value, Box<dyn std::error::Error>> {
    let config = super::fiscal_config(year)?;
    let inputs: TaxpayerInputs = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for depurate".into());
    };
    engine::validate(&inputs, &config)?;
    let result = depuration::depurate(&inputs, &config);
    Ok(serde_json::to_value(result)?)
}
