use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use settlement_cli::{report, utils};
use settlement_core::{BASIC_RATE_TABLE, BracketSchedule, SettlementCalculator, SettlementInput};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Simplified year-end settlement (연말정산) estimator.
///
/// Applies the fixed four-tier simplified bracket schedule to an annual
/// salary and prints the taxable income, computed tax, and final tax.
#[derive(Debug, Parser)]
#[command(name = "settlement")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate the final tax for a salary (간이 시뮬레이터).
    Estimate {
        /// Annual gross salary in won (총급여). Commas allowed.
        #[arg(long, value_parser = utils::parse_amount)]
        salary: Decimal,

        /// Expected total income deductions in won (소득공제 합계).
        #[arg(long, default_value = "0", value_parser = utils::parse_amount)]
        deductions: Decimal,

        /// Expected total tax credits in won (세액공제 합계).
        #[arg(long, default_value = "0", value_parser = utils::parse_amount)]
        credits: Decimal,

        /// Print the raw result as JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },

    /// Print the basic rate reference table (기본 세율표).
    Rates {
        /// Print the table as JSON.
        #[arg(long)]
        json: bool,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Estimate {
            salary,
            deductions,
            credits,
            json,
        } => {
            let schedule = BracketSchedule::simplified();
            let calculator = SettlementCalculator::new(&schedule);
            let input = SettlementInput {
                gross_salary: salary,
                total_deductions: deductions,
                total_credits: credits,
            };

            debug!("estimating for salary {salary}");
            let result = calculator.compute(&input);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", report::estimate_report(&input, &result));
            }
        }
        Command::Rates { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&BASIC_RATE_TABLE)?);
            } else {
                print!("{}", report::rate_table_report());
            }
        }
    }

    Ok(())
}
