//! diffscribe - CLI entry point.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use diffscribe::classify::{KeywordCatalog, classify, score};
use diffscribe::git::{collect_file_diffs_for_paths, open_repository};
use diffscribe::report::{
    AnalysisOutcome, ReportAssembler, ReportConfig, ReportStatus, save_outcome,
};
use diffscribe::summary::{compose_commit_message, compose_review, format_net};
use diffscribe::{ChangeType, DiffStats, FileDiff};

/// Analyze working-tree changes and assemble review reports.
#[derive(Parser, Debug)]
#[command(name = "diffscribe")]
#[command(about = "Analyze working-tree changes and assemble review reports")]
#[command(version)]
struct Cli {
    /// Path inside the git repository to analyze
    #[arg(long, global = true, default_value = ".")]
    repo: PathBuf,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble a Markdown report and write it to disk (default)
    Report(ReportArgs),

    /// Print a conventional commit message for the changes
    CommitMessage {
        /// Change type to use instead of the classified one
        #[arg(long = "type")]
        change_type: Option<ChangeType>,

        /// Commit scope, e.g. `auth`
        #[arg(long)]
        scope: Option<String>,

        #[command(flatten)]
        target: Target,
    },

    /// Print a Markdown review summary of the changes
    Review {
        #[command(flatten)]
        target: Target,
    },

    /// Print the classified change type and keyword scores
    Classify {
        #[command(flatten)]
        target: Target,
    },

    /// Print added/removed line counts per file
    Stats {
        #[command(flatten)]
        target: Target,
    },
}

/// Files to analyze.
#[derive(Args, Debug, Default)]
struct Target {
    /// Restrict the analysis to these paths (defaults to all changes)
    paths: Vec<String>,
}

#[derive(Parser, Debug)]
struct ReportArgs {
    /// Path to write the report to
    #[arg(short = 'o', long, default_value = "code-review.md")]
    output: PathBuf,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// JSON file with report options (flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Omit the file changes section
    #[arg(long)]
    no_changes: bool,

    /// Omit the commit message section
    #[arg(long)]
    no_commit_message: bool,

    /// Include the review section
    #[arg(long)]
    review: bool,

    /// Use this text as the review section (implies --review)
    #[arg(long)]
    review_comments: Option<String>,

    /// Change type to use instead of the classified one
    #[arg(long = "type")]
    change_type: Option<ChangeType>,

    /// Commit scope, e.g. `auth`
    #[arg(long)]
    scope: Option<String>,

    /// Print the report instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Print the result status as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    target: Target,
}

impl ReportArgs {
    /// Progress lines go to stdout unless stdout carries the report or JSON.
    fn shows_progress(&self) -> bool {
        !self.json && !self.dry_run
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli
        .command
        .unwrap_or_else(|| Command::Report(ReportArgs::parse_from(["report"])));

    match command {
        Command::Report(args) => run_report(&cli.repo, args).await,
        Command::CommitMessage {
            change_type,
            scope,
            target,
        } => {
            let diffs = load_diffs(&cli.repo, &target)?;
            let commit = compose_commit_message(
                &diffs,
                change_type,
                scope.as_deref(),
                KeywordCatalog::builtin(),
            );
            println!("{}", commit.format());
            Ok(())
        }
        Command::Review { target } => {
            let diffs = load_diffs(&cli.repo, &target)?;
            println!("{}", compose_review(&diffs).trim_end());
            Ok(())
        }
        Command::Classify { target } => {
            let diffs = load_diffs(&cli.repo, &target)?;
            print_classification(&diffs);
            Ok(())
        }
        Command::Stats { target } => {
            let diffs = load_diffs(&cli.repo, &target)?;
            print_stats(&diffs);
            Ok(())
        }
    }
}

/// Install the stderr log subscriber.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "diffscribe=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read the working-tree diffs for the requested paths.
fn load_diffs(repo_path: &Path, target: &Target) -> Result<Vec<FileDiff>> {
    let repo = open_repository(repo_path)
        .context("Not a git repository. Run diffscribe from within a git repository.")?;

    collect_file_diffs_for_paths(&repo, &target.paths).context("Failed to collect diffs")
}

/// Merge the config file (if any) with command-line flags.
fn build_config(args: &ReportArgs) -> Result<ReportConfig> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::from_json_file(path)?,
        None => ReportConfig::default(),
    };

    if let Some(title) = &args.title {
        config.title = title.clone();
    }
    if args.no_changes {
        config.include_changes = false;
    }
    if args.no_commit_message {
        config.include_commit_message = false;
    }
    if args.review {
        config.include_review = true;
    }
    if let Some(comments) = &args.review_comments {
        config.include_review = true;
        config.review_comments = Some(comments.clone());
    }
    if args.change_type.is_some() {
        config.commit.change_type = args.change_type;
    }
    if let Some(scope) = &args.scope {
        config.commit.scope = Some(scope.clone());
    }

    Ok(config)
}

async fn run_report(repo_path: &Path, args: ReportArgs) -> Result<()> {
    let config = build_config(&args)?;
    let diffs = load_diffs(repo_path, &args.target)?;

    if args.shows_progress() {
        println!("Analyzing {} changed file(s)...", diffs.len());
    }

    let outcome = ReportAssembler::default().assemble(&diffs, &config);

    if args.dry_run {
        match &outcome {
            AnalysisOutcome::Success { content } => print!("{content}"),
            AnalysisOutcome::Warning { reason } => eprintln!("Warning: {reason}"),
            AnalysisOutcome::Failure { reason } => bail!("{reason}"),
        }
        return Ok(());
    }

    let outcome = save_outcome(outcome, &args.output).await;
    let status = ReportStatus::from_outcome(&outcome, &args.output);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&status).context("Failed to serialize status")?
        );
    } else {
        match &status {
            ReportStatus::Success { message, .. } => println!("✓ {message}"),
            ReportStatus::Warning { message } => println!("Warning: {message}. Nothing to write."),
            ReportStatus::Error { .. } => {}
        }
    }

    if let ReportStatus::Error { message } = status {
        bail!(message);
    }

    Ok(())
}

fn print_classification(diffs: &[FileDiff]) {
    let catalog = KeywordCatalog::builtin();
    println!("{}", classify(diffs, catalog));

    for (label, count) in score(diffs, catalog).iter() {
        println!("  {:<8} {}", label.as_str(), count);
    }
}

fn print_stats(diffs: &[FileDiff]) {
    for diff in diffs {
        let stats = diff.stats();
        println!(
            "{}: +{} -{} ({})",
            diff.path,
            stats.added,
            stats.removed,
            format_net(stats.net())
        );
    }

    let total = DiffStats::total(diffs);
    println!(
        "total: {} file(s), +{} -{} ({})",
        diffs.len(),
        total.added,
        total.removed,
        format_net(total.net())
    );
}
