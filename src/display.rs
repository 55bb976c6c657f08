use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::table::Table;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DisplayStyle {
    Table,
    Json,
    Csv,
}

/// Types that can be listed on the terminal as table or CSV rows.
pub trait TerminalDisplay {
    fn titles() -> Vec<&'static str>;
    fn row(self) -> Vec<String>;
}

pub fn display_json<T: Serialize>(o: T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&o)?);
    Ok(())
}

pub fn display_list<T: Serialize + TerminalDisplay>(
    list: Vec<T>,
    style: DisplayStyle,
    headless: bool,
) -> Result<()> {
    match style {
        DisplayStyle::Table => {
            if list.is_empty() {
                println!("<empty list>");
                return Ok(());
            }
            let mut table = Table::new(T::titles(), headless);
            for item in list {
                table.add(item.row());
            }
            table.show();
        }
        DisplayStyle::Csv => {
            if !headless {
                println!("{}", T::titles().join(","));
            }
            for item in list {
                println!("{}", item.row().join(","));
            }
        }
        DisplayStyle::Json => display_json(list)?,
    }
    Ok(())
}
