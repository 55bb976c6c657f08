use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::{CommonConfig, PathSet};
use crate::gate::config::RoutesConfig;

mod check;
mod routes;

/// Route access control engine for the trading-challenge platform.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct App {
    /// Log level, one of error, warn, info, debug.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub commands: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Check(check::CheckArgs),
    Routes(routes::RoutesArgs),
}

impl App {
    pub fn run(&self) -> Result<()> {
        match &self.commands {
            Commands::Check(args) => args.run(),
            Commands::Routes(args) => args.run(),
        }
    }
}

pub trait RunCommand {
    fn run(&self) -> Result<()>;
}

/// Flags shared by commands that read the config directory.
#[derive(Args)]
pub struct ConfigArgs {
    /// Override the config directory.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn build_path_set(&self) -> Result<PathSet> {
        PathSet::new(self.config.clone())
    }

    pub fn load_routes(&self) -> Result<RoutesConfig> {
        let ps = self.build_path_set()?;
        ps.load_config("routes", RoutesConfig::default)
    }
}
