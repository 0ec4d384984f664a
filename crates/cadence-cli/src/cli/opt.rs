use cadence_model::entry::{Impact, Mood};
use cadence_utils::args::db::DbArgs;
use cadence_utils::date::parse_entry_date;
use chrono::{DateTime, FixedOffset};
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "cadence", about = "Log your wins, keep your streak", version)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) db: DbArgs,

    #[arg(long, global = true, env = "CADENCE_USER", help = "Id of the user to act as")]
    pub(crate) user: Option<Uuid>,

    #[arg(long, global = true, env = "SENTRY_DSN")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(long, global = true, env = "CADENCE_ENV", default_value = "dev")]
    pub(crate) env: String,

    #[arg(long, global = true, help = "Print machine readable JSON")]
    pub(crate) json: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    #[command(subcommand)]
    User(UserCommand),

    /// Log a new win
    Add(Add),

    /// List all wins, newest first
    List,

    /// Change fields of a win
    Update(Update),

    /// Delete a win
    Delete(Delete),

    /// Show the current streak
    Streak,

    /// Show every badge and its progress
    Badges,

    /// Show a year of activity
    Heatmap,
}

#[derive(Debug, Subcommand)]
pub(crate) enum UserCommand {
    /// Create a user and print its id
    Create {
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Debug, Args)]
pub(crate) struct Add {
    pub(crate) title: String,

    #[arg(short, long)]
    pub(crate) description: Option<String>,

    #[arg(long, value_parser = parse_entry_date, help = "RFC 3339 timestamp or YYYY-MM-DD, defaults to now")]
    pub(crate) date: Option<DateTime<FixedOffset>>,

    #[arg(short, long, default_value = "medium")]
    pub(crate) impact: Impact,

    #[arg(short, long, default_value = "neutral")]
    pub(crate) mood: Mood,
}

#[derive(Debug, Args)]
pub(crate) struct Update {
    pub(crate) id: Uuid,

    #[arg(long)]
    pub(crate) title: Option<String>,

    #[arg(short, long, conflicts_with = "clear_description")]
    pub(crate) description: Option<String>,

    #[arg(long)]
    pub(crate) clear_description: bool,

    #[arg(long, value_parser = parse_entry_date)]
    pub(crate) date: Option<DateTime<FixedOffset>>,

    #[arg(short, long)]
    pub(crate) impact: Option<Impact>,

    #[arg(short, long)]
    pub(crate) mood: Option<Mood>,
}

#[derive(Debug, Args)]
pub(crate) struct Delete {
    pub(crate) id: Uuid,
}
