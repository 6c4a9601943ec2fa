mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use studyplan_core::config::PlannerConfig;
use studyplan_core::subject::Priority;
use studyplan_core::{Planner, TimeOfDay, Weekday};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "studyplan")]
#[command(about = "Plan weekly study sessions without overlaps")]
struct Cli {
    /// Directory holding schedules.json and studyPlannerSubjects.json (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule a study session
    Add {
        /// Subject name (prompts from the subject list if omitted)
        #[arg(long)]
        subject: Option<String>,

        /// Weekday, e.g. "Monday" or "mon"
        #[arg(short, long)]
        day: Weekday,

        /// Start time (HH:MM, 24-hour)
        #[arg(short, long)]
        start: TimeOfDay,

        /// End time (HH:MM, 24-hour), must be after the start
        #[arg(short, long)]
        end: TimeOfDay,
    },
    /// Delete a study session by id (or unique id prefix)
    Remove {
        id: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Delete all study sessions
    Clear {
        /// Don't ask for confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show today's sessions, or the whole week
    Show {
        /// Show all seven days
        #[arg(short, long, conflicts_with = "day")]
        weekly: bool,

        /// Show this day instead of today
        #[arg(short, long)]
        day: Option<Weekday>,
    },
    /// List all sessions with their ids
    List,
    /// Manage subjects
    Subjects {
        #[command(subcommand)]
        command: SubjectCommands,
    },
    /// Summary of subjects, deadlines and today's classes
    Dashboard,
    /// Show config and data paths
    Config {
        /// Save a new data directory to the config file
        #[arg(long, value_name = "PATH")]
        set_data_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum SubjectCommands {
    /// Add a subject
    Add {
        name: String,

        /// Study hours per week
        #[arg(long, default_value_t = 0)]
        hours: u32,

        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<NaiveDate>,

        /// low, medium or high
        #[arg(short, long, default_value = "medium")]
        priority: Priority,
    },
    /// List subjects, earliest deadline first
    List,
    /// Delete a subject by id (or unique id prefix)
    Remove {
        id: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Delete all subjects
    Clear {
        /// Don't ask for confirmation
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = PlannerConfig::load()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(data_dir = %config.data_path().display(), "opening planner");

    let planner = Planner::open(&config);

    match cli.command {
        Commands::Add {
            subject,
            day,
            start,
            end,
        } => commands::add::run(&planner, subject, day, start, end),
        Commands::Remove { id, force } => commands::remove::run(&planner, &id, force),
        Commands::Clear { force } => commands::clear::run(&planner, force),
        Commands::Show { weekly, day } => commands::show::run(&planner, weekly, day),
        Commands::List => commands::list::run(&planner),
        Commands::Subjects { command } => match command {
            SubjectCommands::Add {
                name,
                hours,
                deadline,
                priority,
            } => commands::subjects::add(&planner, name, hours, deadline, priority),
            SubjectCommands::List => commands::subjects::list(&planner),
            SubjectCommands::Remove { id, force } => {
                commands::subjects::remove(&planner, &id, force)
            }
            SubjectCommands::Clear { force } => commands::subjects::clear(&planner, force),
        },
        Commands::Dashboard => commands::dashboard::run(&planner),
        Commands::Config { set_data_dir } => commands::config::run(&config, set_data_dir),
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
