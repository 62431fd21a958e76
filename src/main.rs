/// Main entry point for the habit streak tracker CLI
///
/// This file sets up logging, parses command line arguments, and runs the
/// requested store operation. The CLI is a thin presentation layer; all
/// streak and badge logic lives in the library.

use clap::{Parser, Subcommand};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use tracing::info;

use habit_streaks::{Badge, HabitStore, JsonStorage, Streak, TrackerError};

/// Get the default data file path with robust fallback strategy
fn get_default_data_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habit_tracker");
            p
        }),
        // 3. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            let mut data_path = potential_path.clone();
            data_path.push("habits.json");
            return Ok(data_path);
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit_tracker");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.json");

    tracing::warn!("Using temporary directory for data: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the habit streak tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON data file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new habit
    Add { name: String },
    /// Mark a habit as done today
    Done { name: String },
    /// Mark a habit as done on a specific date (YYYY-MM-DD)
    Mark { name: String, date: NaiveDate },
    /// List all habits with their streaks and badges
    List,
    /// Rename a habit, keeping its completion history
    Rename { old_name: String, new_name: String },
    /// Delete a habit and its completion history
    Delete { name: String },
    /// Show the achievement badge tiers
    Badges,
}

/// One display line in the style "Streak: 3 days (Longest: 5) | 🌱 Small Streak"
fn format_streak(streak: Streak) -> String {
    let badge = Badge::for_streak(streak.current);
    format!(
        "Streak: {} day{} (Longest: {}) | {}",
        streak.current,
        if streak.current == 1 { "" } else { "s" },
        streak.longest,
        badge,
    )
}

fn run(store: &HabitStore<JsonStorage>, command: Command) -> Result<(), TrackerError> {
    let today = Local::now().date_naive();

    match command {
        Command::Add { name } => {
            store.add_habit(&name)?;
            println!("Added habit '{}'", name);
        }
        Command::Done { name } => {
            if store.mark_date(&name, today)? {
                println!("Marked '{}' as done on {}", name, today);
            } else {
                println!("'{}' was already marked (or does not exist)", name);
            }
        }
        Command::Mark { name, date } => {
            if store.mark_date(&name, date)? {
                println!("Marked '{}' as done on {}", name, date);
            } else {
                println!("'{}' was already marked (or does not exist)", name);
            }
        }
        Command::List => {
            let habits = store.habits();
            if habits.is_empty() {
                println!("No habits yet. Add one with `habit-streaks add <name>`.");
            }
            for (name, record) in habits {
                let streak = Streak::calculate(&record.dates, today);
                println!("{}: {}", name, format_streak(streak));
            }
        }
        Command::Rename { old_name, new_name } => {
            if store.rename_habit(&old_name, &new_name)? {
                println!("Renamed '{}' to '{}'", old_name, new_name);
            } else {
                println!("Rename failed. Name might already exist.");
            }
        }
        Command::Delete { name } => {
            if store.delete_habit(&name)? {
                println!("Deleted habit '{}'", name);
            } else {
                println!("No habit named '{}'", name);
            }
        }
        Command::Badges => {
            println!("🏅 Achievement Badges");
            for tier in Badge::tiers() {
                println!("{}: {}-day streak", tier, tier.threshold());
            }
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_streaks={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout clean for command output
        .init();

    // Determine data file path
    let data_path = match args.data_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_data_path()?,
    };

    info!("Using data file at: {}", data_path.display());

    let store = HabitStore::open(data_path);
    run(&store, args.command)?;

    Ok(())
}
