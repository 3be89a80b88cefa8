//! Quote command - fair price and stamp duty for one property

use super::{PropertyArgs, DISCLAIMER};
use crate::pricing::{PriceResult, PropertyInput};
use crate::report::format_currency;
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct QuoteCommand {
    #[command(flatten)]
    property: PropertyArgs,

    /// Output as JSON instead of a formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct QuoteOutput<'a> {
    input: &'a PropertyInput,
    result: &'a PriceResult,
}

#[derive(Debug, Clone, Tabled)]
struct QuoteRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl QuoteRow {
    fn new(item: impl Into<String>, value: impl Into<String>) -> Self {
        QuoteRow {
            item: item.into(),
            value: value.into(),
        }
    }
}

impl QuoteCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let (input, result) = self.property.quote()?;
        log::info!(
            "Quoted {} property: {}",
            result.jurisdiction,
            format_currency(result.fair_price)
        );

        if self.json {
            let output = QuoteOutput {
                input: &input,
                result: &result,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print_quote(&input, &result);
        }
        Ok(())
    }
}

fn print_quote(input: &PropertyInput, result: &PriceResult) {
    let table = Table::new(quote_rows(input, result))
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();

    println!("FAIR PRICE ESTIMATE ({})", result.jurisdiction.label());
    println!("{}", table);
    println!();
    println!("Disclaimer: {}", DISCLAIMER);
}

fn quote_rows(input: &PropertyInput, result: &PriceResult) -> Vec<QuoteRow> {
    vec![
        QuoteRow::new("Land Area", format!("{} sqm", input.land_area())),
        QuoteRow::new("Floors", input.floor_plan().floors().to_string()),
        QuoteRow::new(
            "Total Building Area",
            format!("{} sqm", result.total_building_area),
        ),
        QuoteRow::new(
            format!("Land @ {}/sqm", format_currency(input.land_value())),
            format_currency(result.land_component),
        ),
        QuoteRow::new(
            format!("Building @ {}/sqm", format_currency(input.building_cost())),
            format_currency(result.building_component),
        ),
        QuoteRow::new("Total Fair Property Price", format_currency(result.fair_price)),
        QuoteRow::new(
            format!("Stamp Duty @ {}", format_rate(result.stamp_duty_rate)),
            format_currency(result.stamp_duty),
        ),
    ]
}

pub fn format_rate(rate: Decimal) -> String {
    format!("{:.1}%", rate * dec!(100))
}
