//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Packlist - ML environment setup helpers.
#[derive(Debug, Parser)]
#[command(name = "packlist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a conda environment file to pip requirements
    Convert(ConvertArgs),

    /// Verify that the installed Python environment works
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `convert` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ConvertArgs {
    /// Conda environment file to read
    #[arg(short, long, default_value = "environment.yml")]
    pub input: PathBuf,

    /// Requirements file to write
    #[arg(short, long, default_value = "configs/requirements.txt")]
    pub output: PathBuf,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("environment.yml"),
            output: PathBuf::from("configs/requirements.txt"),
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Python interpreter to probe (defaults to the active environment)
    #[arg(long, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
