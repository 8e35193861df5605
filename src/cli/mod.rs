//! Command line interface

pub mod serve;

use clap::{Parser, Subcommand};

/// Job Board API - accounts, job postings and description generation
#[derive(Parser)]
#[command(name = "job-board-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}
