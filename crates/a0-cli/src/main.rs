//! a0 - Auth0 user lifecycle CLI
//!
//! Drives the `auth0_user` resource from desired-state files and prints the
//! resulting state as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Create a user and print its state
//! a0 create --state alice.toml --pretty
//!
//! # Apply edits made to a copy of the state file
//! a0 update auth0|5f1a --old alice.toml --new alice.next.toml
//!
//! # Adopt an existing user
//! a0 import auth0|5f1a
//! ```

mod cli;
mod commands;
mod error;
mod logger;
mod state_file;

#[cfg(test)]
mod tests;

use crate::{
    cli::Cli,
    commands::{Commands, LifecycleCommand},
    error::Result as CliResult,
    state_file::{load_state, schema_output, state_output},
};

use std::process::ExitCode;

use a0_config::Config;
use a0_provider::{DesiredState, Provider};
use clap::Parser;
use log::{error, info};
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let result = match cli.command {
        // Schema needs neither config nor a tenant
        Commands::Schema { resource_type } => schema_output(&resource_type),
        Commands::Lifecycle(command) => run(command).await,
    };

    match result {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: LifecycleCommand) -> CliResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting a0 v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let provider = Provider::from_config(&config.management).await?;
    info!("Registered resource types: {:?}", provider.resource_types());
    let users = provider.users();

    match command {
        LifecycleCommand::Create { state } => {
            let desired = load_state(&state)?;
            let id = users.create(&desired).await?;
            let refreshed = users.read(&id, &desired).await?;
            state_output(&refreshed)
        }
        LifecycleCommand::Read { id, state } => {
            let prior = match state {
                Some(path) => load_state(&path)?,
                None => DesiredState::default(),
            };
            let refreshed = users.read(&id, &prior).await?;
            state_output(&refreshed)
        }
        LifecycleCommand::Update { id, old, new } => {
            let old = load_state(&old)?;
            let new = load_state(&new)?;
            let refreshed = users.update(&id, &old, &new).await?;
            state_output(&refreshed)
        }
        LifecycleCommand::Delete { id } => {
            users.delete(&id).await?;
            Ok(json!({ "deleted": id }))
        }
        LifecycleCommand::Import { id } => {
            let id = users.import(&id);
            let refreshed = users.read(&id, &DesiredState::default()).await?;
            state_output(&refreshed)
        }
    }
}
