pub mod prompt;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "moodweave",
    about = "Local mood journal with day stories and weekly insights"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log a mood check-in; runs an interactive prompt when --mood is omitted
    Log {
        /// One of: happy, calm, tired, anxious, focused, neutral, excited, sad
        #[arg(long)]
        mood: Option<String>,
        /// morning, afternoon, or evening (defaults to the current slot)
        #[arg(long)]
        time: Option<String>,
        /// Energy level 1-5
        #[arg(long)]
        energy: Option<u8>,
        /// Comma-separated activities (work, social, exercise, creative, rest, nature, learning, family)
        #[arg(long, value_delimiter = ',')]
        activities: Vec<String>,
        /// A short free-text note (up to 200 characters)
        #[arg(long)]
        note: Option<String>,
        /// Optional free-form emotion tag
        #[arg(long)]
        tag: Option<String>,
        /// Log for a past date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show today's check-ins and quick summary
    Today,
    /// Render (and store) the narrative for a day
    Story {
        #[arg(long)]
        date: Option<String>,
    },
    /// Weekly insights: dominant mood, patterns, and streaks
    Insights {
        /// Print the raw report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List days that have check-ins, newest first
    History {
        #[arg(long)]
        limit: Option<usize>,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Show where data lives and how much of it there is
    Status,
    /// Erase all entries and stories
    Clear {
        /// Confirm the wipe; without this flag nothing is deleted
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    Set { key: String, value: String },
    Get { key: String },
}
