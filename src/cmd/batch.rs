//! Batch command - price every property in a CSV or JSON file

use crate::pricing::{self, PriceResult, PricingError};
use crate::properties::{self, PropertyRecord};
use crate::report::format_currency;
use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct BatchCommand {
    /// CSV or JSON file of properties ("-" reads CSV from stdin)
    #[arg(short, long)]
    properties: PathBuf,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

/// Row for the batch table output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
pub struct BatchRow {
    #[tabled(rename = "#")]
    pub row_num: usize,

    #[tabled(rename = "Property")]
    pub id: String,

    #[tabled(rename = "State")]
    pub state: String,

    #[tabled(rename = "Building Area")]
    pub building_area: String,

    #[tabled(rename = "Fair Price")]
    pub fair_price: String,

    #[tabled(rename = "Stamp Duty")]
    pub stamp_duty: String,
}

impl BatchCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let records = read_properties(&self.properties)?;
        let results = price_all(&records)?;
        log::info!("Priced {} properties", results.len());

        let rows: Vec<BatchRow> = records
            .iter()
            .zip(&results)
            .enumerate()
            .map(|(i, (record, result))| batch_row(i + 1, record, result))
            .collect();

        if self.csv {
            crate::utils::write_csv(&rows, io::stdout())
        } else {
            self.print_table(&rows, &results)
        }
    }

    fn print_table(&self, rows: &[BatchRow], results: &[PriceResult]) -> anyhow::Result<()> {
        if rows.is_empty() {
            println!("No properties found");
            return Ok(());
        }

        let (total_price, total_duty) = batch_totals(results)?;
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!(
            "TOTAL: {} | Stamp Duty: {}",
            format_currency(total_price),
            format_currency(total_duty)
        );
        Ok(())
    }
}

/// Summed fair price and stamp duty across a batch
pub fn batch_totals(results: &[PriceResult]) -> Result<(Decimal, Decimal), PricingError> {
    let mut total_price = Decimal::ZERO;
    let mut total_duty = Decimal::ZERO;
    for result in results {
        total_price = pricing::checked_add("total fair_price", total_price, result.fair_price)?;
        total_duty = pricing::checked_add("total stamp_duty", total_duty, result.stamp_duty)?;
    }
    Ok((total_price, total_duty))
}

/// Price every record, stopping at the first invalid one
pub fn price_all(records: &[PropertyRecord]) -> anyhow::Result<Vec<PriceResult>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| -> anyhow::Result<PriceResult> {
            let (input, jurisdiction) = record
                .to_input()
                .with_context(|| format!("property #{} is invalid", i + 1))?;
            Ok(pricing::quote(&input, jurisdiction)?)
        })
        .collect()
}

fn batch_row(row_num: usize, record: &PropertyRecord, result: &PriceResult) -> BatchRow {
    BatchRow {
        row_num,
        id: record.id.clone().unwrap_or_default(),
        state: result.jurisdiction.code().to_string(),
        building_area: format!("{} sqm", result.total_building_area),
        fair_price: format_currency(result.fair_price),
        stamp_duty: format_currency(result.stamp_duty),
    }
}

/// Read property records from a CSV or JSON file (or CSV on stdin with "-")
pub fn read_properties(path: &Path) -> anyhow::Result<Vec<PropertyRecord>> {
    if path.as_os_str() == "-" {
        return read_from_stdin();
    }

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let records = if is_json {
        properties::read_json(reader)
    } else {
        properties::read_csv(reader)
    }
    .with_context(|| format!("failed to read {}", path.display()))?;

    log::info!("Read {} properties from {}", records.len(), path.display());
    Ok(records)
}

fn read_from_stdin() -> anyhow::Result<Vec<PropertyRecord>> {
    let mut buffer = Vec::new();
    io::stdin().lock().read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    properties::read_csv(buffer.as_slice())
}
