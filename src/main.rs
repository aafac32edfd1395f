//! DCA risk engine - command line entry point
//!
//! This binary provides three subcommands:
//! - validate: Check strategy parameters against their valid ranges
//! - run: Build the ladder, simulate the drawdown curve, print metrics and advice
//! - verify: Echo the headline formulas of a run with intermediate terms

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dca_risk::engine;
use dca_risk::{diag, ExportDocument, ParamStore, StrategyParams};

#[derive(Parser, Debug)]
#[command(name = "dca-risk")]
#[command(about = "DCA strategy risk modelling: ladders, drawdown curves, and advisories", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// The six strategy parameters, shared by all subcommands
#[derive(Args, Debug, Clone)]
struct ParamArgs {
    /// Spacing between DCA entries, in pips
    #[arg(long, default_value = "10.0")]
    pip_step: f64,

    /// Volume of the first position
    #[arg(long, default_value = "0.1")]
    first_volume: f64,

    /// Volume growth factor per level
    #[arg(long, default_value = "1.5")]
    volume_exponent: f64,

    /// Ladder depth (1-50)
    #[arg(long, default_value = "10")]
    max_positions: u32,

    /// Simulation horizon in pips (10-10000)
    #[arg(long, default_value = "500.0")]
    max_drawdown_pips: f64,

    /// Monetary value of one pip per unit volume
    #[arg(long, default_value = "10.0")]
    pip_value: f64,

    /// Load the last saved parameters instead of the flags above
    #[arg(long)]
    load_last: bool,

    /// Parameter store path
    #[arg(long, default_value = "dca_params.json")]
    store: String,
}

impl ParamArgs {
    fn resolve(&self) -> Result<StrategyParams> {
        if self.load_last {
            let store = ParamStore::new(&self.store);
            match store.load_last()? {
                Some(params) => return Ok(params),
                None => bail!("no saved parameters in {}", self.store),
            }
        }
        Ok(StrategyParams {
            pip_step: self.pip_step,
            first_volume: self.first_volume,
            volume_exponent: self.volume_exponent,
            max_positions: self.max_positions,
            max_drawdown_pips: self.max_drawdown_pips,
            pip_value: self.pip_value,
        })
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check parameters against their valid ranges
    Validate {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Run a full calculation and print ladder, metrics, and advice
    Run {
        #[command(flatten)]
        params: ParamArgs,

        /// Save these parameters as the last-used set
        #[arg(long)]
        save: bool,

        /// Export the run as JSON to the given path
        #[arg(long)]
        export: Option<String>,
    },

    /// Recompute and echo the headline formulas of a run
    Verify {
        #[command(flatten)]
        params: ParamArgs,
    },
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Validate { params } => {
            let params = params.resolve()?;
            let report = engine::validate(&params);
            if report.valid {
                println!("Parameters are valid.");
            } else {
                println!("Parameters are invalid:");
                for error in &report.errors {
                    println!("  - {error}");
                }
                std::process::exit(1);
            }
        }

        Commands::Run {
            params: args,
            save,
            export,
        } => {
            let params = args.resolve()?;
            let result = engine::run(&params)?;

            println!("DCA ladder ({} levels):", result.positions.len());
            println!(
                "{:>5} {:>10} {:>10} {:>12} {:>12}",
                "level", "entry", "volume", "cum volume", "pips down"
            );
            for pos in &result.positions {
                println!(
                    "{:>5} {:>10.5} {:>10.4} {:>12.4} {:>12.1}",
                    pos.level + 1,
                    pos.entry_price,
                    pos.volume,
                    pos.cumulative_volume,
                    pos.pip_distance
                );
            }

            let metrics = &result.risk_metrics;
            println!();
            println!("Total volume:       {:.4}", result.total_volume);
            println!("Average cost price: {:.5}", result.avg_cost_price);
            println!("Max possible loss:  {:.2}", metrics.max_possible_loss);
            println!("Break-even pips:    {:.1}", metrics.break_even_pips);
            println!("Margin required:    {:.2}", metrics.margin_required);
            println!("Risk/reward ratio:  {:.3}", metrics.risk_reward_ratio);
            println!("Position size risk: {:.1}x", metrics.position_size_risk);

            let advice = engine::advise(&result);
            println!();
            for line in &advice {
                println!("* {line}");
            }

            if save {
                ParamStore::new(&args.store).save_last(&params)?;
            }
            if let Some(path) = export {
                ExportDocument::new(result, advice).write_to(path)?;
            }
        }

        Commands::Verify { params } => {
            let params = params.resolve()?;
            let result = engine::run(&params)?;
            for line in diag::formula_report(&result) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
