mod cmd;
mod config;
mod display;
mod gate;
mod logs;
mod nav;
mod paths;
mod table;
mod types;

use std::process;

use anyhow::Result;
use clap::Parser;
use console::style;

use crate::cmd::App;

fn main() {
    let app = App::parse();
    match run(&app) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{}: {err:#}", style("error").red().bold());
            process::exit(12);
        }
    }
}

fn run(app: &App) -> Result<()> {
    logs::init(&app.log_level)?;
    app.run()
}
