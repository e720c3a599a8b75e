//! CLI argument parsing using clap v4
//!
//! Defines the command-line interface for the IronCore admin tool.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::types::{LeadStatus, MemberStatus, Role};

/// IronCore Admin - gym administration from the terminal
///
/// Manage members, leads, trainers and subscription plans stored in a local
/// key-value store. Log in first; what you can see depends on your role.
#[derive(Parser, Debug)]
#[command(name = "ironcore-admin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, env = "IRONCORE_CONFIG", global = true)]
    pub config: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and save the session
    Login {
        /// Staff email; the prefix decides the role (owner*, manager*, else staff)
        #[arg(short, long)]
        email: String,

        /// Password (not checked)
        #[arg(short, long, env = "IRONCORE_PASSWORD", default_value = "")]
        password: String,
    },

    /// Forget the saved session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// List the areas a role can see
    Access {
        /// Role to inspect instead of the current session's
        #[arg(long)]
        role: Option<Role>,
    },

    /// Show member and lead totals
    Dashboard,

    /// Member management
    Members {
        #[command(subcommand)]
        subcommand: MembersSubcommand,
    },

    /// Trainer management
    Trainers {
        #[command(subcommand)]
        subcommand: TrainersSubcommand,
    },

    /// Subscription plans (the payments area)
    Plans {
        #[command(subcommand)]
        subcommand: PlansSubcommand,
    },

    /// Sales lead pipeline
    Leads {
        #[command(subcommand)]
        subcommand: LeadsSubcommand,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Display version and build information
    Version,
}

/// Member subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum MembersSubcommand {
    /// List members
    List {
        /// Only members whose name or email contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a member
    Add(NewMemberArgs),

    /// Change fields of a member
    Update {
        /// Member id
        id: String,

        #[command(flatten)]
        fields: MemberUpdateArgs,
    },

    /// Remove a member
    Remove {
        /// Member id
        id: String,
    },
}

/// Fields for a new member
#[derive(Args, Debug, Clone)]
pub struct NewMemberArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long, default_value = "active")]
    pub status: MemberStatus,

    /// Renewal date (YYYY-MM-DD), one month from today if omitted
    #[arg(long)]
    pub renewal_date: Option<NaiveDate>,

    /// Plan id
    #[arg(long = "plan", default_value = "p1")]
    pub plan_id: String,

    /// Trainer id
    #[arg(long = "trainer")]
    pub trainer_id: Option<String>,

    /// Last visit (YYYY-MM-DD)
    #[arg(long)]
    pub last_attendance: Option<NaiveDate>,
}

/// Member fields to change; omitted flags leave the field as is
#[derive(Args, Debug, Clone, Default)]
pub struct MemberUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub status: Option<MemberStatus>,

    #[arg(long)]
    pub renewal_date: Option<NaiveDate>,

    #[arg(long = "plan")]
    pub plan_id: Option<String>,

    #[arg(long = "trainer", conflicts_with = "clear_trainer")]
    pub trainer_id: Option<String>,

    /// Unassign the trainer
    #[arg(long)]
    pub clear_trainer: bool,

    #[arg(long, conflicts_with = "clear_last_attendance")]
    pub last_attendance: Option<NaiveDate>,

    /// Forget the last visit date
    #[arg(long)]
    pub clear_last_attendance: bool,
}

/// Trainer subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TrainersSubcommand {
    /// List trainers
    List,

    /// Add a trainer
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "Bodybuilding")]
        specialty: String,
    },

    /// Remove a trainer
    Remove {
        /// Trainer id
        id: String,
    },
}

/// Plan subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum PlansSubcommand {
    /// List plans
    List,

    /// Add a plan
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        /// Length in months
        #[arg(long, default_value = "1")]
        duration: u32,
    },

    /// Remove a plan
    Remove {
        /// Plan id
        id: String,
    },
}

/// Lead subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum LeadsSubcommand {
    /// List leads
    List {
        /// Only leads in this stage (new, follow-up, joined, lost)
        #[arg(short, long)]
        status: Option<LeadStatus>,
    },

    /// Show leads grouped by stage
    Board,

    /// Move a lead to another stage
    SetStatus {
        /// Lead id
        id: String,

        /// New stage (new, follow-up, joined, lost)
        status: LeadStatus,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the current configuration
    Show,

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the configuration
    Validate,
}
