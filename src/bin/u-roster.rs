use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_roster::loader::load_roster;
use u_roster::report::{PartitionDisplay, PartitionReport};
use u_roster::sample::sample_roster;
use u_roster::{AllocationConfig, Allocator, TeamCountMode};

#[derive(Parser)]
#[command(
    name = "u-roster",
    about = "Split a roster of rated players into balanced teams",
    version
)]
struct Cli {
    /// Roster file: header line, then `name;attack;defense;intensity` rows
    #[arg(short, long, conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Generate a random roster of this many players instead of reading one
    #[arg(short, long, default_value_t = 15)]
    sample: usize,

    /// Seed for the random roster
    #[arg(long)]
    seed: Option<u64>,

    /// Number of teams (a minimum in capacity-aware mode)
    #[arg(short, long, default_value_t = 3)]
    teams: usize,

    /// Team-count policy
    #[arg(short, long, value_enum, default_value_t = Mode::Fixed)]
    mode: Mode,

    /// Member cap per team in capacity-aware mode
    #[arg(short, long, default_value_t = u_roster::allocation::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Print per-member and per-capacity averages for each team
    #[arg(long)]
    averages: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Fixed,
    CapacityAware,
}

impl From<Mode> for TeamCountMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Fixed => TeamCountMode::Fixed,
            Mode::CapacityAware => TeamCountMode::CapacityAware,
        }
    }
}

const DEFAULT_LOG_FILTER: &str = "u_roster=info";

/// Filter from `RUST_LOG` when it parses, `u_roster=info` otherwise.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let roster = match &cli.input {
        Some(path) => load_roster(path)
            .with_context(|| format!("loading roster from {}", path.display()))?,
        None => sample_roster(cli.sample, cli.seed),
    };
    info!(players = roster.len(), "roster ready");

    let config = AllocationConfig::default()
        .with_team_count(cli.teams)
        .with_mode(cli.mode.into())
        .with_capacity(cli.capacity);

    let partition = Allocator::allocate(&roster, &config).context("allocating teams")?;

    let report = PartitionReport::new(&partition);
    info!(
        teams = report.teams.len(),
        spread = report.load_spread,
        "teams formed"
    );

    let display = PartitionDisplay::new(&partition);
    let display = if cli.averages {
        display.with_averages(cli.capacity)
    } else {
        display
    };
    print!("{display}");

    Ok(())
}
