//! `cassette`: the portfolio in a terminal.
//!
//! `sort` animates the bubble sort widget, `show` prints one portfolio
//! section, and `export` dumps the content catalog as JSON. Frames and
//! section text go to stdout; logs go to stderr.


mod render;
mod visualizer;

use clap::{ArgAction, Args, Parser, Subcommand};
use content::{Language, SectionId, ShellState, catalog};
use sorter::{ConfigError, SortConfig};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid sort configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Shell(#[from] content::ShellError),
    #[error("terminal output failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("sort task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Parser, Debug)]
#[command(name = "cassette", about = "Bilingual terminal portfolio with a bubble sort visualizer")]
struct Cli {
    /// Display language: en or zh.
    #[arg(long, global = true, env = "CASSETTE_LANG", default_value = "zh")]
    lang: Language,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate the bubble sort widget. Ctrl-C halts the run.
    Sort(SortArgs),
    /// Print a portfolio section.
    Show {
        /// overview, research, projects, or contact.
        section: SectionId,
        /// Expand the N-th entry of the section.
        #[arg(long)]
        detail: Option<usize>,
    },
    /// Print the whole content catalog as JSON.
    Export,
}

/// Sort flags. Each one overrides the matching `CASSETTE_*` variable.
#[derive(Args, Debug)]
struct SortArgs {
    #[arg(long)]
    size: Option<usize>,

    #[arg(long, allow_negative_numbers = true)]
    min: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    max: Option<i64>,

    /// Pause after each comparison, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Skip the animation and print only the final frame.
    #[arg(long)]
    instant: bool,

    /// Emit every transition as a JSON line instead of drawing bars.
    #[arg(long)]
    json: bool,

    /// Chart height in rows.
    #[arg(long, default_value_t = 12)]
    height: usize,
}

impl SortArgs {
    /// Flags over environment over the reference configuration.
    fn config(&self) -> Result<SortConfig, ConfigError> {
        self.overlay(SortConfig::default().with_env()?)
    }

    fn overlay(&self, base: SortConfig) -> Result<SortConfig, ConfigError> {
        let config = SortConfig {
            size: self.size.unwrap_or(base.size),
            min_value: self.min.unwrap_or(base.min_value),
            max_value: self.max.unwrap_or(base.max_value),
            step_delay_ms: self.delay_ms.unwrap_or(base.step_delay_ms),
            seed: self.seed.or(base.seed),
        };
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(language = %cli.lang, "cassette starting");

    match cli.command {
        Command::Sort(args) => run_sort(&args, cli.lang).await,
        Command::Show { section, detail } => run_show(section, detail, cli.lang),
        Command::Export => run_export(),
    }
}

async fn run_sort(args: &SortArgs, language: Language) -> Result<(), CliError> {
    let config = args.config()?;
    info!(
        size = config.size,
        min = config.min_value,
        max = config.max_value,
        delay_ms = config.step_delay_ms,
        seed = ?config.seed,
        "sort config"
    );

    let options = visualizer::Options { language, height: args.height, json: args.json };
    let state = if args.instant {
        visualizer::run_instant(config, options)?
    } else {
        visualizer::run_animated(config, options).await?
    };

    if !args.json {
        println!(
            "{} comparisons, {} swaps, sorted: {}",
            state.comparisons,
            state.swaps,
            state.is_complete() && state.is_sorted()
        );
    }
    Ok(())
}

fn run_show(section: SectionId, detail: Option<usize>, language: Language) -> Result<(), CliError> {
    let mut shell = ShellState::new(language);
    shell.navigate(section);
    if let Some(index) = detail {
        shell.open(index)?;
    }
    print!("{}", render::section(catalog(), shell.section, shell.detail, shell.language));
    Ok(())
}

fn run_export() -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(catalog())?);
    Ok(())
}
