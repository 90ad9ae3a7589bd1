use std::path::PathBuf;

use clap::Parser;
use venturecast_core::engine::Engine;
use venturecast_core::infra::{AiHosting, CloudProvider};
use venturecast_core::params::ParamKey;
use venturecast_core::scenario::ScenarioKind;

mod format;
mod input;
mod logging;
mod report;

#[derive(Parser, Debug)]
#[command(name = "venturecast")]
#[command(about = "Startup financial model calculator")]
struct Args {
    /// Scenario: conservative, realistic, or optimistic
    #[arg(short, long, default_value = "realistic")]
    scenario: ScenarioKind,

    /// Cloud provider: aws, gcp, azure, on-premise, home-server
    #[arg(long, default_value = "aws")]
    provider: CloudProvider,

    /// AI hosting mode: cloud-api, self-hosted, hybrid
    #[arg(long, default_value = "cloud-api")]
    hosting: AiHosting,

    /// DCF projection horizon in years
    #[arg(short, long)]
    years: Option<u32>,

    /// YAML file of parameter overrides (kebab-case keys, e.g. marketing-spend)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(&args.log_level)?;

    let mut engine = Engine::with_scenario(args.scenario)?;
    engine.select_provider(args.provider)?;
    engine.select_hosting(args.hosting)?;

    if let Some(years) = args.years {
        engine.set_parameter(ParamKey::ProjectionYears, f64::from(years))?;
    }

    if let Some(path) = &args.params {
        let overrides = input::load_overrides(path)?;
        tracing::info!(
            "Applying {} parameter overrides from {}",
            overrides.len(),
            path.display()
        );
        engine.apply_overrides(overrides)?;
    }

    tracing::debug!(scenario = %engine.scenario(), "model recomputed");

    match args.format {
        OutputFormat::Text => print!("{}", report::render(&engine)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&engine.snapshot())?),
    }

    Ok(())
}
