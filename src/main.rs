use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use kira_talentmatch::input::parse_benchmark_ids;
use kira_talentmatch::logging::init_logging;
use kira_talentmatch::pipeline::stage5_report::{Stage5Input, write_reports};
use kira_talentmatch::{BreakdownTarget, MatchRateEngine, SubjectId, TableStore};

pub const DEFAULT_BENCHMARK: &str = "312,335,175";

#[derive(Debug, Parser)]
#[command(name = "kira-talentmatch", version, about = "Benchmark-relative talent match ranking")]
struct Cli {
    /// Debug-level logging unless RUST_LOG is set.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank every employee against the benchmark baseline.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Score table (employee_id, tgv, adjusted_score); .tsv/.csv, optionally .gz.
    #[arg(long)]
    scores: PathBuf,

    /// Weight table (tgv, weight); .tsv/.csv, optionally .gz.
    #[arg(long)]
    weights: PathBuf,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Comma-separated benchmark employee IDs.
    #[arg(long, default_value = DEFAULT_BENCHMARK)]
    benchmark: String,

    /// Employee for the TGV breakdown; defaults to the top-ranked employee.
    #[arg(long, conflicts_with = "no_breakdown")]
    employee: Option<SubjectId>,

    /// Skip the TGV breakdown.
    #[arg(long)]
    no_breakdown: bool,

    /// Rows of the ranked list shown in report.txt.
    #[arg(long, default_value_t = 20)]
    top: usize,
}

impl RunArgs {
    fn breakdown_target(&self) -> BreakdownTarget {
        if self.no_breakdown {
            BreakdownTarget::None
        } else if let Some(id) = self.employee {
            BreakdownTarget::Subject(id)
        } else {
            BreakdownTarget::TopRanked
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Run(args) => run_matching(&args),
    }
}

fn run_matching(args: &RunArgs) -> Result<(), String> {
    let benchmark = parse_benchmark_ids(&args.benchmark)
        .ok_or_else(|| "Please input at least one valid employee ID.".to_string())?;
    let benchmark_ids = benchmark.to_vec();
    tracing::info!(benchmark = ?benchmark_ids, "running match");

    let store = TableStore::new(&args.scores, &args.weights);
    tracing::debug!(
        scores = %store.scores_path().display(),
        weights = %store.weights_path().display(),
        "table store configured"
    );
    let engine = MatchRateEngine::new(store);
    let run = engine
        .run(&benchmark_ids, args.breakdown_target())
        .map_err(|e| e.to_string())?;

    if run.is_empty() {
        tracing::info!("No results found. Please check your input IDs.");
    }

    let input = Stage5Input {
        run: &run,
        tool_name: "kira-talentmatch".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        top_n: args.top,
    };
    write_reports(&input, &args.out).map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
