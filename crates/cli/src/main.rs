mod args;
mod commands;
mod error;

use crate::args::{Args, Command};
use clap::Parser;
use std::time::Instant;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let args = Args::parse();
    let now = Instant::now();
    let result = match args.command {
        Command::Fetch(args) => commands::fetch(args).await,
        Command::Shapes(args) => commands::shapes(args),
        Command::Lengths(args) => commands::lengths(args),
        Command::Report(args) => commands::report(args),
    };

    if let Err(err) = result {
        error!("{err}");
        std::process::exit(1);
    }
    info!("Done in {:?}", now.elapsed());
}
