//! IPL Dashboard CLI
//!
//! Team overviews, team-vs-team comparisons and toss statistics from an IPL
//! matches CSV.

use clap::{Parser, Subcommand};
use ipl::report::OutputFormat;
use ipl::{Config, Result};

#[derive(Parser)]
#[command(name = "ipl")]
#[command(about = "Explore IPL match statistics", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Matches CSV, overrides the configured dataset path
    #[arg(short, long)]
    data: Option<String>,

    /// Output format: table, json or csv
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
    #[command(flatten)]
    Query(QueryCommands),
}

/// Commands that read the dataset
#[derive(Subcommand)]
enum QueryCommands {
    /// List teams and the season range
    Teams,
    /// Show the first rows of the dataset
    Raw {
        /// Number of rows (defaults to display.raw_rows)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Matches played and won by a team in one season
    Overview {
        /// Team name as it appears in team1
        #[arg(long)]
        team: String,
        /// Season year (defaults to the first season in the data)
        #[arg(long)]
        season: Option<i32>,
    },
    /// Compare two teams and their head-to-head record
    Compare {
        /// First team
        team_a: String,
        /// Second team
        team_b: String,
    },
    /// How often the toss winner also won the match
    Toss,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let mut config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };
    if let Some(path) = cli.data {
        config.data.dataset_path = path;
    }

    let result = match cli.command {
        Commands::Init => commands::init(&cli.config),
        Commands::Query(command) => commands::output_format(&config, cli.format)
            .and_then(|format| commands::run(&config, command, format)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use ipl::data::DatasetCache;
    use ipl::report::{
        render, RawMatches, Report, TeamComparison, TeamList, TeamOverview, TossSummary,
    };
    use ipl::stats::season_range;
    use ipl::StatsError;

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        println!("\nNext steps:");
        println!("  1. Put the IPL matches CSV at {}", config.data.dataset_path);
        println!("  2. Run 'ipl teams' to list the teams");
        println!("  3. Run 'ipl compare \"Team A\" \"Team B\"' to compare two teams");

        Ok(())
    }

    pub fn output_format(config: &Config, flag: Option<OutputFormat>) -> Result<OutputFormat> {
        match flag {
            Some(format) => Ok(format),
            None => config.display.format.parse().map_err(StatsError::Config),
        }
    }

    pub fn run(config: &Config, command: QueryCommands, format: OutputFormat) -> Result<()> {
        let mut cache = DatasetCache::new(&config.data.dataset_path);
        let matches = cache.get()?;

        match command {
            QueryCommands::Teams => print(&TeamList::build(matches), format),
            QueryCommands::Raw { limit } => {
                let limit = limit.unwrap_or(config.display.raw_rows);
                print(&RawMatches::build(matches, limit), format)
            }
            QueryCommands::Overview { team, season } => {
                let range = season_range(matches);
                let season = season.or(range.map(|r| r.first)).ok_or_else(|| {
                    StatsError::InvalidInput("no matches loaded, pass --season".to_string())
                })?;
                if let Some(range) = range {
                    if !range.contains(season) {
                        log::warn!(
                            "Season {} is outside the data ({} to {})",
                            season,
                            range.first,
                            range.last
                        );
                    }
                }
                print(&TeamOverview::build(matches, &team, season)?, format)
            }
            QueryCommands::Compare { team_a, team_b } => {
                if team_a == team_b {
                    log::warn!("Please select two different teams for comparison.");
                }
                print(&TeamComparison::build(matches, &team_a, &team_b)?, format)
            }
            QueryCommands::Toss => print(&TossSummary::build(matches), format),
        }
    }

    fn print<R: Report>(report: &R, format: OutputFormat) -> Result<()> {
        let output = render(report, format)?;
        print!("{}", output);
        if format == OutputFormat::Json {
            println!();
        }
        Ok(())
    }
}
