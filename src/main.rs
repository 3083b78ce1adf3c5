mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{AppError, Result};
use crate::input::{FilePredictionSource, PredictionSourceConfig};
use crate::model::labels::{DEFAULT_LABELS, LabelSchema};
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_aggregate::run_stage2;
use crate::pipeline::stage3_scale::run_stage3;
use crate::pipeline::stage4_assign::run_stage4;
use crate::pipeline::stage5_report::{Stage5Input, build_report, write_reports};
use crate::report::text::render_report_text;

const DEFAULT_TOP_K: usize = 7;

#[derive(Debug, Parser)]
#[command(name = "racerank", version, about = "Rank race competitors from finishing-position probabilities")]
struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Aggregate, scale and greedily order one batch of predictions.
    Rank(RankArgs),
}

#[derive(Debug, Clone, clap::Args)]
struct RankArgs {
    /// Saved prediction response (JSON, optionally .gz).
    #[arg(long)]
    predictions: PathBuf,

    /// Number of finishing positions to predict.
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Comma-separated class labels the scores are aligned to.
    #[arg(long, default_value_t = DEFAULT_LABELS.join(","))]
    labels: String,

    /// Directory for ranking.tsv, summary.json and report.txt.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone)]
struct RankConfig {
    predictions: PathBuf,
    top_k: usize,
    schema: LabelSchema,
    out_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Rank(args) => {
            let config = rank_config_from_args(&args)?;
            let report = run_rank(&config)?;
            print!("{}", render_report_text(&report));
            if let Some(out_dir) = &config.out_dir {
                write_reports(&report, out_dir)?;
            }
            Ok(())
        }
    }
}

fn rank_config_from_args(args: &RankArgs) -> Result<RankConfig> {
    let schema = LabelSchema::parse_list(&args.labels)
        .map_err(|e| AppError::Config(format!("--labels: {e}")))?;
    Ok(RankConfig {
        predictions: args.predictions.clone(),
        top_k: args.top_k,
        schema,
        out_dir: args.out.clone(),
    })
}

fn run_rank(config: &RankConfig) -> Result<report::RankingReport> {
    let source = FilePredictionSource::new(PredictionSourceConfig {
        path: config.predictions.clone(),
        schema: config.schema.clone(),
    });

    let stage1 = run_stage1(&source)?;
    let metrics = run_stage2(&stage1.distributions);
    let ranks = run_stage3(&metrics);
    let assignment = run_stage4(&metrics, config.top_k, &config.schema);

    Ok(build_report(&Stage5Input {
        source: &stage1.source,
        schema: &config.schema,
        top_k: config.top_k,
        metrics: &metrics,
        ranks: &ranks,
        assignment: &assignment,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
