use anyhow::Result;
use clap::Args;

use crate::display::{display_list, DisplayStyle};

use super::{ConfigArgs, RunCommand};

/// Print the registered route table.
#[derive(Args)]
pub struct RoutesArgs {
    /// The display style.
    #[arg(short, long, default_value = "table")]
    pub output: DisplayStyle,

    /// Do not print the header row.
    #[arg(long)]
    pub headless: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl RunCommand for RoutesArgs {
    fn run(&self) -> Result<()> {
        let cfg = self.config.load_routes()?;
        display_list(cfg.routes, self.output, self.headless)
    }
}
