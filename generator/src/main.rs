//! Main generator executable, to be run inside the directory served by the pack
//! http server. For help run this command with `-h`.

#![warn(missing_docs)]

use anyhow::{Context, Error};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::env;
use trackpack_fixtures_generator::{
    common::DEFAULT_SERVER_URL,
    generate::{GenerateOptions, generate},
};

/// Generates `packs/0` .. `packs/23` placeholder resource packs and
/// `packs.json` manifest in current directory.
///
/// `packs` directory must exist. Copy `packs.json` to the plugin data
/// directory afterwards.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Arguments {
    /// Base url of the http server serving `packs` directory, used to build
    /// download urls. Should not end with `/`.
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,
}

fn main() -> Result<(), Error> {
    let arguments = Arguments::parse();

    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let working_directory = env::current_dir().context("resolve working directory")?;

    let options = GenerateOptions {
        server_url: arguments.server_url,
        ..GenerateOptions::default()
    };

    log::info!("generating packs for {}", options.server_url);
    generate(&working_directory, &options)?;

    Ok(())
}
