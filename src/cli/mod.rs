//! CLI 模块

pub mod task;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sill")]
#[command(version)]
#[command(about = "A morning dashboard for your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the dashboard TUI (default)
    Tui,
    /// Manage the to-do list without entering the TUI
    Task {
        #[command(subcommand)]
        action: task::TaskAction,
    },
}
