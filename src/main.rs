//! OpenTrainer - terminal client for the OpenTrainer fitness API
//!
//! Main entry point: wires logging, configuration, the application
//! context, and command dispatch.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use opentrainer::cli::{Cli, ClientCommand, Commands, TrainerCommand};
use opentrainer::commands;
use opentrainer::config::Config;
use opentrainer::context::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments first so --verbose can shape the filter
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    // Load and validate configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;
    config.validate()?;

    // All resources are built once here and passed down by reference
    let ctx = AppContext::from_config(&config)?;

    match cli.command {
        Commands::Trainer { command } => match command {
            TrainerCommand::List { json } => commands::trainers::list(&ctx, json).await,
            TrainerCommand::Show { id, json } => commands::trainers::show(&ctx, id, json).await,
            TrainerCommand::Add {
                name,
                email,
                password_hash,
            } => {
                let form = opentrainer::forms::TrainerForm {
                    name,
                    email,
                    password_hash,
                };
                commands::trainers::add(&ctx, form).await
            }
            TrainerCommand::Update {
                id,
                name,
                email,
                password_hash,
            } => commands::trainers::update(&ctx, id, name, email, password_hash).await,
            TrainerCommand::Delete { id } => commands::trainers::delete(&ctx, id).await,
        },
        Commands::Client { command } => match command {
            ClientCommand::List { json } => commands::clients::list(&ctx, json).await,
            ClientCommand::Show { id, email, json } => {
                commands::clients::show(&ctx, id, email, json).await
            }
            ClientCommand::Add {
                name,
                email,
                password_hash,
                trainer,
            } => commands::clients::add(&ctx, name, email, password_hash, trainer).await,
            ClientCommand::Update {
                id,
                name,
                email,
                password_hash,
                trainer,
            } => commands::clients::update(&ctx, id, name, email, password_hash, trainer).await,
            ClientCommand::Delete { id } => commands::clients::delete(&ctx, id).await,
        },
        Commands::Session { command } => commands::sessions::run(&ctx, command).await,
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "opentrainer=debug"
    } else {
        "opentrainer=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
