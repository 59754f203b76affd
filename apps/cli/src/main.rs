#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Commands};
use crate::handlers::{check, deploy, vhost, watch};

use anyhow::Result;
use clap::Parser;
use fweb_compose::DockerCompose;
use fweb_domain::config::{ProjectLayout, WatchConfig};
use fweb_logger::{LevelFilter, Logger};
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log = init_logging(&cli)?;
    let layout = ProjectLayout::new(&cli.root);
    let compose = compose(&layout, &cli);

    match cli.command {
        Commands::Deploy { no_up } => deploy::deploy(&layout, compose, !no_up)?,
        Commands::Check {} => check::check(&layout)?,
        Commands::Vhost {} => vhost::render(&layout)?,
        Commands::Watch { interval, reload } => {
            let config = WatchConfig { interval: Duration::from_secs(interval) };
            watch::watch(&layout, config, reload.then_some(compose))?;
        },
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<Logger> {
    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let mut builder =
        Logger::builder().name(env!("CARGO_BIN_NAME")).level(level).console(!cli.quiet);
    if let Some(directives) = &cli.log_filter {
        builder = builder.env_filter(directives);
    }

    let logger = match &cli.log_dir {
        Some(dir) => {
            builder.directory(dir).retain(cli.log_retain).format(cli.log_format.into()).init()?
        },
        None => builder.init()?,
    };
    Ok(logger)
}

fn compose(layout: &ProjectLayout, cli: &Cli) -> DockerCompose {
    let compose = DockerCompose::new(layout.root());
    match &cli.compose_file {
        Some(file) => compose.with_file(layout.root().join(file)),
        None => compose,
    }
}
