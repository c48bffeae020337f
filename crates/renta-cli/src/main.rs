mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::advance::AdvanceArgs;
use commands::assess::AssessArgs;
use commands::brackets::BracketTaxArgs;
use commands::depurate::DepurateArgs;

/// Colombian natural-person income-tax calculations
#[derive(Parser)]
#[command(
    name = "renta",
    version,
    about = "Colombian natural-person income-tax calculations",
    long_about = "Computes a Colombian labor-income tax declaration with decimal \
                  precision: Art. 336 depuration, the Art. 241 progressive table, \
                  the Art. 807 advance payment and the final settlement. Inputs \
                  are a JSON record via --input or piped stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Gravable year preset (statutory table, UVT and caps)
    #[arg(long, default_value_t = 2024, global = true)]
    year: u16,
}

#[derive(Subcommand)]
enum Commands {
    /// Full assessment: depuration, tax, advance and settlement
    Assess(AssessArgs),
    /// Depuration only: audit the income reduction line by line
    Depurate(DepurateArgs),
    /// Next-year advance payment from scalar inputs
    Advance(AdvanceArgs),
    /// Tax for a taxable base expressed in UVT
    BracketTax(BracketTaxArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Assess(args) => commands::assess::run_assess(args, cli.year),
        Commands::Depurate(args) => commands::depurate::run_depurate(args, cli.year),
        Commands::Advance(args) => commands::advance::run_advance(args),
        Commands::BracketTax(args) => commands::brackets::run_bracket_tax(args, cli.year),
        Commands::Version => {
            println!("renta {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
