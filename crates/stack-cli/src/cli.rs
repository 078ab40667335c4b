//! CLI argument parsing using clap derive

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use stack_core::Direction;
use stack_opsworks::{DEFAULT_REGION, OpsWorksConfig};

/// Manage the custom JSON stack settings of AWS OpsWorks stacks.
///
/// A stack-file is a JSON file of the form
/// {"stack-id": "<uuid>", "custom-json": <json>}.
#[derive(Parser, Debug)]
#[command(name = "sync_tool")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Automatically opt-in to questions
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AWS region of the OpsWorks endpoint
    #[arg(long, env = "SYNC_TOOL_REGION", default_value = DEFAULT_REGION, global = true)]
    pub region: String,

    /// Named AWS profile to take credentials from
    #[arg(long, env = "AWS_PROFILE", global = true)]
    pub profile: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Overwrite the local custom JSON with the stack's settings
    Pull {
        /// Path to the stack-file
        filename: PathBuf,
    },

    /// Overwrite the stack's settings with the local custom JSON
    Push {
        /// Path to the stack-file
        filename: PathBuf,
    },
}

impl Commands {
    pub fn direction(&self) -> Direction {
        match self {
            Commands::Pull { .. } => Direction::Pull,
            Commands::Push { .. } => Direction::Push,
        }
    }

    pub fn filename(&self) -> &Path {
        match self {
            Commands::Pull { filename } | Commands::Push { filename } => filename,
        }
    }
}

impl Cli {
    pub fn opsworks_config(&self) -> OpsWorksConfig {
        OpsWorksConfig {
            region: self.region.clone(),
            profile: self.profile.clone(),
        }
    }
}
