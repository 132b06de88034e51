#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use petition_pipeline::commands::{self, RankOptions};

#[derive(Parser)]
#[command(name = "petition-evidence")]
#[command(about = "Score, rank and report petition evidence")]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score gathered evidence, keep what clears the minimum score, rank and bucket it.
    Rank {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        min_score: Option<u32>,
        #[arg(long, default_value = "output")]
        output_dir: PathBuf,
    },
    /// Render the report text from a saved validation state.
    Report {
        /// Run directory containing step4_validate_state.json.
        #[arg(long)]
        run_dir: PathBuf,
        #[arg(long)]
        applicant: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match cli.command {
        Commands::Rank {
            input,
            config,
            min_score,
            output_dir,
        } => rank(input, config, min_score, output_dir),
        Commands::Report {
            run_dir,
            applicant,
            out,
        } => report(run_dir, applicant, out),
    }
}

fn rank(
    input: PathBuf,
    config: Option<PathBuf>,
    min_score: Option<u32>,
    output_dir: PathBuf,
) -> anyhow::Result<()> {
    let options = RankOptions {
        input,
        config,
        min_score,
        output_dir,
    };
    let outcome = commands::rank(&options)
        .with_context(|| format!("ranking evidence from {}", options.input.display()))?;
    println!("{}", serde_json::to_string_pretty(&outcome.state.summary)?);
    Ok(())
}

fn report(run_dir: PathBuf, applicant: PathBuf, out: Option<PathBuf>) -> anyhow::Result<()> {
    let text = commands::report(&run_dir, &applicant)
        .with_context(|| format!("rendering report from {}", run_dir.display()))?;
    match out {
        Some(path) => {
            std::fs::write(&path, &text)?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{text}"),
    }
    Ok(())
}
