use std::io::Write;

use anyhow::Result;
use catalog_lib::render::{render_table, ProductRow, TableStyle};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

/// Prints rows in `format`. JSON output prints `records` instead of the
/// formatted rows so prices stay numeric.
pub fn print_products<T: Serialize>(
    rows: &[ProductRow],
    records: &T,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_table(rows, TableStyle::Plain)),
        OutputFormat::Markdown => println!("{}", render_table(rows, TableStyle::Markdown)),
        OutputFormat::Csv => write_csv(rows, std::io::stdout())?,
        OutputFormat::Json => print_json(records),
    }
    Ok(())
}

pub fn write_csv<W: Write>(rows: &[ProductRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
