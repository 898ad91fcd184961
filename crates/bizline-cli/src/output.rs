use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table<T: Tabled>(items: Vec<T>) {
    let table = Table::new(items).with(Style::rounded()).to_string();
    println!("{}", table);
}

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_created<T: Serialize + Tabled>(item: T, format: Format) -> Result<()> {
    match format {
        Format::Json => print_json(&item)?,
        Format::Table => {
            print_success("Created");
            print_table(vec![item]);
        }
    }
    Ok(())
}

pub fn print_items<T: Serialize + Tabled>(items: Vec<T>, format: Format) -> Result<()> {
    match format {
        Format::Json => print_json(&items)?,
        Format::Table => {
            if items.is_empty() {
                println!("No results");
            } else {
                print_table(items);
            }
        }
    }
    Ok(())
}
