//! Hearth CLI entry point.

use clap::Parser;

use hearth::cli::context::AppContext;
use hearth::cli::{commands, Cli, Commands};
use hearth::infrastructure::{config::ConfigLoader, logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logging level/format come from config, so load it before the
    // subscriber goes up; config errors fall back to eprintln.
    let config = match cli.config.as_deref() {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = logging::init(&config.logging) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    let ctx = match AppContext::init(config) {
        Ok(ctx) => ctx,
        Err(err) => {
            hearth::cli::handle_error(err, cli.json);
            return;
        }
    };

    let result = match cli.command {
        Commands::Search(args) => commands::search::execute(args, &ctx, cli.json).await,
        Commands::Featured(args) => commands::featured::execute(args, &ctx, cli.json).await,
        Commands::Show(args) => commands::show::execute(args, &ctx, cli.json).await,
        Commands::Map(args) => commands::map::execute(args, &ctx, cli.json).await,
        Commands::Create(args) => commands::listing::execute_create(args, &ctx, cli.json).await,
        Commands::Update(args) => commands::listing::execute_update(args, &ctx, cli.json).await,
        Commands::Login(args) => commands::auth::execute_login(args, &ctx, cli.json).await,
        Commands::Whoami(args) => commands::auth::execute_whoami(args, &ctx, cli.json).await,
        Commands::Logout(args) => commands::auth::execute_logout(args, &ctx, cli.json).await,
    };

    if let Err(err) = result {
        hearth::cli::handle_error(err, cli.json);
    }
}
