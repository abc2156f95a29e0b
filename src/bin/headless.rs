//! Headless runner: steps the simulation without a window and reports
//! population statistics.
//!
//! ```text
//! moth-headless --ticks 36000 --seed 7 --report-every 3600
//! RUST_LOG=moth_sim=debug moth-headless --ticks 600
//! ```

use clap::Parser;
use std::path::PathBuf;

use moth_sim::simulation::ecosystem::Ecosystem;
use moth_sim::simulation::error::Result;
use moth_sim::simulation::params::Params;
use moth_sim::simulation::stats::PopulationStats;

#[derive(Parser, Debug)]
#[command(version, about = "Run the moth simulation without graphics")]
struct Args {
    /// JSON file with simulation parameters (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 6000)]
    ticks: u64,

    /// Tick length in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Log statistics every N ticks (0 disables periodic reports)
    #[arg(long, default_value_t = 600)]
    report_every: u64,

    /// Print the final statistics as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Write the effective parameters to this file and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let params = match args.config.as_deref() {
        Some(path) => Params::from_json_file(path)?,
        None => Params::default(),
    };

    if let Some(path) = args.write_config.as_deref() {
        params.save_to_file(path)?;
        tracing::info!("wrote parameters to {}", path.display());
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut ecosystem = Ecosystem::new(&params, seed)?;
    tracing::info!(seed, ticks = args.ticks, dt = args.dt, "headless run started");

    let chunk = if args.report_every == 0 {
        args.ticks
    } else {
        args.report_every
    };

    let mut done = 0;
    while done < args.ticks {
        let batch = chunk.min(args.ticks - done);
        done += ecosystem.run(batch, args.dt, || false)?;
        if args.report_every > 0 {
            report(ecosystem.stats());
        }
    }

    let stats = ecosystem.stats();
    if args.report_every == 0 {
        report(stats);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    }

    Ok(())
}

fn report(stats: &PopulationStats) {
    tracing::info!(
        time = stats.time,
        alive = stats.alive,
        on_screen = stats.on_screen,
        eaten = stats.eaten,
        mean_gray = stats.mean_gray,
        mean_background = stats.mean_favorability,
        mismatch = stats.mean_mismatch,
        max_generation = stats.max_generation,
        "population"
    );
}
