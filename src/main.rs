use clap::Parser;
use std::path::Path;

mod cli;
mod generators;
mod models;
mod random;

use crate::cli::{handlers, Args, CliCommand};
use crate::generators::PasswordEngine;
use crate::random::SecureSource;

fn main() {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let args = Args::parse();
    log::debug!("Command line args: {:?}", args);

    let engine = PasswordEngine::new(SecureSource::init());

    let result = match args.command {
        CliCommand::Generate { length, complexity } => {
            handlers::handle_generate(&engine, length, &complexity, args.json)
        }
        CliCommand::GenerateList {
            count,
            length,
            complexity,
        } => handlers::handle_generate_list(&engine, count, length, &complexity, args.json),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
