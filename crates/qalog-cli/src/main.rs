mod render;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use qalog::{Config, ReconcileMode};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qalog")]
#[command(about = "Per-match statistics for Quake 3 Arena server logs", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a games.log file and print statistics per match
    Parse {
        /// Path to the server log
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Also write the rendered output to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputKind::Json)]
        kind: OutputKind,

        /// Keep raw kill counts for players who never died to <world>
        #[arg(long)]
        pass_through: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputKind {
    Json,
    Text,
}

/// Everything one `parse` run needs, resolved from the command line.
#[derive(Debug)]
struct ParseJob {
    input: PathBuf,
    output: Option<PathBuf>,
    kind: OutputKind,
    config: Config,
}

impl ParseJob {
    fn from_args(
        input: PathBuf,
        output: Option<PathBuf>,
        kind: OutputKind,
        pass_through: bool,
    ) -> Self {
        let reconcile = if pass_through {
            ReconcileMode::PassThrough
        } else {
            ReconcileMode::Literal
        };
        Self {
            input,
            output,
            kind,
            config: Config::new().with_reconcile(reconcile),
        }
    }
}

/// Analyzes the input and returns the rendered document, writing it to the
/// output file when one was requested.
fn run(job: &ParseJob) -> anyhow::Result<String> {
    let file = File::open(&job.input)
        .with_context(|| format!("failed to open {}", job.input.display()))?;
    let stats = qalog::analyze(BufReader::new(file), &job.config)
        .with_context(|| format!("failed to parse {}", job.input.display()))?;

    let skipped: usize = stats.iter().map(|s| s.skipped_lines).sum();
    if skipped > 0 {
        log::warn!("{skipped} malformed event lines were skipped");
    }

    let rendered = match job.kind {
        OutputKind::Json => render::render_json(&stats)?,
        OutputKind::Text => render::render_text(&stats),
    };

    if let Some(output) = &job.output {
        fs::write(output, &rendered)
            .with_context(|| format!("failed to write {}", output.display()))?;
        log::info!("wrote {}", output.display());
    }
    Ok(rendered)
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Parse {
            input,
            output,
            kind,
            pass_through,
        } => {
            let job = ParseJob::from_args(input, output, kind, pass_through);
            let rendered = run(&job)?;
            println!("{rendered}");
        }
    }
    Ok(())
}
