use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "nutrilife", version, about = "Food log and diet plan generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write default config and seed the food log
    Init {
        /// Re-seed the food log even if it already has entries
        #[arg(long)]
        force: bool,
    },

    /// Manage the food log
    Food {
        #[command(subcommand)]
        action: FoodAction,
    },

    /// Calorie totals against the daily target
    Status,

    /// Show or edit the health profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Generate and inspect the diet plan
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum FoodAction {
    /// List logged food with totals
    List,

    /// Log a food with its nutrition facts
    Add {
        name: String,
        #[arg(long)]
        calories: f64,
        #[arg(long, default_value_t = 0.0)]
        protein: f64,
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,
        #[arg(long, default_value_t = 0.0)]
        fats: f64,
        /// Time eaten today (HH:MM, 24h); defaults to now
        #[arg(long, value_parser = parse_clock)]
        at: Option<NaiveTime>,
    },

    /// Log a common food by catalog index or name
    Quick {
        food: String,
        /// Time eaten today (HH:MM, 24h); defaults to now
        #[arg(long, value_parser = parse_clock)]
        at: Option<NaiveTime>,
    },

    /// List or search the common food catalog
    Catalog {
        search: Option<String>,
    },

    /// Remove an entry by id
    Remove {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Replace the log with the starter entries
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the current profile
    Show,
    /// Set a profile field
    Set {
        /// Field (e.g. goal, activityLevel, currentWeight)
        key: String,
        value: String,
    },
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// Generate a plan from the current profile
    Generate,
    /// Replace the current plan with a new one
    Regenerate {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Show the stored plan
    Show,
    /// Toggle the stored plan as a favorite
    Like,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. target_calories, generation.stage_delay_ms)
        key: String,
        /// Config value
        value: String,
    },
}

fn parse_clock(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M")
}
