//! CLI surface: clap definitions, command execution, output formatting.

pub mod commands;
pub mod context;
pub mod display;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Hearth - property listings browser", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Path to a config file (default: hearth.yaml in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search listings with filters
    Search(commands::search::SearchArgs),
    /// Show featured listings
    Featured(commands::featured::FeaturedArgs),
    /// Show one listing by id
    Show(commands::show::ShowArgs),
    /// Plot search results as map markers
    Map(commands::map::MapArgs),
    /// Create a listing from a JSON draft (authenticated)
    Create(commands::listing::CreateArgs),
    /// Update a listing from a JSON patch (authenticated)
    Update(commands::listing::UpdateArgs),
    /// Log in and persist the session
    Login(commands::auth::LoginArgs),
    /// Show the logged-in user
    Whoami(commands::auth::WhoamiArgs),
    /// End the session
    Logout(commands::auth::LogoutArgs),
}

/// Print an error and exit non-zero, honoring `--json`.
pub fn handle_error(err: anyhow::Error, json_mode: bool) {
    if json_mode {
        let payload = serde_json::json!({ "error": err.to_string() });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_else(|_| err.to_string())
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
