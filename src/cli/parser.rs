use crate::export::{ExportFormat, ExportKind};
use clap::{Parser, Subcommand};

/// Command-line interface definition for vitalog
/// CLI application to track workouts, cardio, check-ins and meals locally
#[derive(Parser)]
#[command(
    name = "vitalog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A local-first fitness and longevity tracker: workouts, cardio, daily check-ins and weekly insights",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Capture or display the onboarding profile
    Onboard {
        #[command(subcommand)]
        section: OnboardSection,
    },

    /// Track workout sessions (start, log sets, complete)
    Workout {
        #[command(subcommand)]
        action: WorkoutAction,
    },

    /// Log cardio sessions
    Cardio {
        #[command(subcommand)]
        action: CardioAction,
    },

    /// Daily check-ins (mood, energy, stress, sleep)
    Checkin {
        #[command(subcommand)]
        action: CheckinAction,
    },

    /// Log meals
    Meal {
        #[command(subcommand)]
        action: MealAction,
    },

    /// Weekly rule-based insights
    Insight {
        #[command(subcommand)]
        action: InsightAction,
    },

    /// Dashboard aggregates: streak, weekly workouts, cardio minutes, sleep
    Stats {
        #[arg(long, help = "Lookback window in days (default: configured insight_days)")]
        days: Option<u32>,
    },

    /// Export record data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "data", value_enum, default_value = "workouts")]
        data: ExportKind,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum OnboardSection {
    /// Name, age and body measurements
    Basics {
        #[arg(long)]
        name: String,

        #[arg(long)]
        age: u32,

        #[arg(long)]
        sex: Option<String>,

        #[arg(long = "height", help = "Height in cm")]
        height_cm: Option<f64>,

        #[arg(long = "weight", help = "Weight in kg")]
        weight_kg: Option<f64>,
    },

    /// Primary goal and horizon
    Goals {
        #[arg(long = "primary", help = "Primary goal (e.g. strength, longevity, fat-loss)")]
        primary_goal: String,

        #[arg(long = "target-weight", help = "Target weight in kg")]
        target_weight_kg: Option<f64>,

        #[arg(long = "horizon", help = "Goal horizon in weeks")]
        horizon_weeks: Option<u32>,
    },

    /// Training experience and availability
    Fitness {
        #[arg(long, help = "Experience level (beginner, intermediate, advanced)")]
        experience: String,

        #[arg(long = "days", help = "Training days per week")]
        days_per_week: u32,

        #[arg(long = "style", help = "Preferred training styles (repeatable)")]
        preferred_styles: Vec<String>,
    },

    /// Sleep, stress and occupation
    Lifestyle {
        #[arg(long = "sleep", help = "Typical sleep hours per night")]
        sleep_hours: Option<f64>,

        #[arg(long = "stress", help = "Typical stress level (0-10)")]
        stress_level: Option<u8>,

        #[arg(long = "activity", help = "Occupation activity (sedentary, active, ...)")]
        occupation_activity: Option<String>,
    },

    /// Eating habits
    Nutrition {
        #[arg(long = "meals", help = "Meals per day")]
        meals_per_day: Option<u32>,

        #[arg(long = "pattern", help = "Dietary pattern (omnivore, vegetarian, ...)")]
        dietary_pattern: Option<String>,

        #[arg(long = "caffeine", help = "Caffeinated drinks per day")]
        caffeine_per_day: Option<u32>,

        #[arg(long = "alcohol", help = "Alcoholic drinks per week")]
        alcohol_per_week: Option<u32>,
    },

    /// Print the stored onboarding profile
    Show,
}

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Start a session for a workout
    Start {
        /// Workout identifier (e.g. full-body-a)
        workout_id: String,
    },

    /// Log a set in the active session
    Set {
        workout_id: String,

        /// Exercise name
        exercise: String,

        #[arg(long)]
        reps: u32,

        #[arg(long = "weight", help = "Weight in kg")]
        weight_kg: Option<f64>,
    },

    /// Complete the active session and store the workout log
    Done {
        workout_id: String,

        #[arg(long, help = "Session duration in minutes (default: elapsed time)")]
        duration: Option<u32>,

        #[arg(long, help = "One-line session highlight")]
        highlight: Option<String>,
    },

    /// Discard the active session
    Cancel { workout_id: String },

    /// List completed workouts
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CardioAction {
    /// Log a cardio session
    Add {
        #[arg(long, help = "Cardio kind: zone2, intervals, easy, other")]
        kind: Option<String>,

        #[arg(long, help = "Duration in minutes")]
        duration: u32,

        #[arg(long = "distance", help = "Distance in km")]
        distance_km: Option<f64>,

        #[arg(long = "avg-hr", help = "Average heart rate")]
        avg_hr: Option<u32>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long, help = "Date (YYYY-MM-DD) or timestamp; default now")]
        date: Option<String>,
    },

    /// List cardio sessions
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Delete a cardio session by id (prefix allowed)
    Del { id: String },
}

#[derive(Subcommand)]
pub enum CheckinAction {
    /// Save the daily check-in (replaces any record for the same day)
    Add {
        #[arg(long, help = "Mood: awful, low, ok, good, great (or 1-5)")]
        mood: Option<String>,

        #[arg(long, help = "Energy 0-10")]
        energy: Option<u8>,

        #[arg(long, help = "Stress 0-10")]
        stress: Option<u8>,

        #[arg(long, help = "Sleep quality 0-10")]
        sleep: Option<u8>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long, help = "Date (YYYY-MM-DD); default today")]
        date: Option<String>,

        #[arg(long = "from-draft", help = "Promote the stored draft instead of flags")]
        from_draft: bool,
    },

    /// Save a partial draft of today's check-in
    Draft {
        #[arg(long)]
        mood: Option<String>,

        #[arg(long)]
        energy: Option<u8>,

        #[arg(long)]
        stress: Option<u8>,

        #[arg(long)]
        sleep: Option<u8>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List check-ins
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum MealAction {
    /// Log a meal
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        calories: u32,

        #[arg(long = "protein", help = "Protein in grams")]
        protein_g: Option<u32>,

        #[arg(long = "carbs", help = "Carbohydrates in grams")]
        carbs_g: Option<u32>,

        #[arg(long = "fat", help = "Fat in grams")]
        fat_g: Option<u32>,

        #[arg(long, help = "Date (YYYY-MM-DD) or timestamp; default now")]
        date: Option<String>,
    },

    /// List meals
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum InsightAction {
    /// Generate this week's insight (replaces an existing one)
    Generate {
        #[arg(long, help = "Lookback window in days (default: configured insight_days)")]
        days: Option<u32>,
    },

    /// List stored insights
    List,
}
