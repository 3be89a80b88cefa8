//! Rates command - stamp duty rates, land value sources and exemptions

use super::quote::format_rate;
use crate::pricing::Jurisdiction;
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

/// Common categories of stamp duty relief. Rules vary by state.
pub const EXEMPTIONS: &[&str] = &[
    "First home buyers (some states offer full or partial exemptions)",
    "Pensioners and seniors (varies by state)",
    "Off-the-plan purchases (in some cases)",
    "Vacant land and new builds (exemptions may apply)",
    "Family transfers (for certain immediate family members)",
    "Charity and non-profit purchases (where applicable)",
];

#[derive(Args, Debug)]
pub struct RatesCommand {
    /// Output as JSON instead of a formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Tabled, serde::Serialize)]
struct RateRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "State")]
    name: &'static str,
    #[tabled(rename = "Stamp Duty")]
    rate: String,
    #[tabled(rename = "Land Values")]
    source: &'static str,
    #[tabled(rename = "URL")]
    url: &'static str,
}

impl From<Jurisdiction> for RateRow {
    fn from(j: Jurisdiction) -> Self {
        let (source, url) = j.valuation_source();
        RateRow {
            code: j.code(),
            name: j.name(),
            rate: format_rate(j.stamp_duty_rate()),
            source,
            url,
        }
    }
}

impl RatesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rows: Vec<RateRow> = Jurisdiction::ALL.into_iter().map(RateRow::from).collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        println!("STAMP DUTY RATES (2024 estimates)");
        println!("{}", Table::new(&rows).with(Style::rounded()));
        println!();
        println!("Possible stamp duty exemptions:");
        for exemption in EXEMPTIONS {
            println!("  - {}", exemption);
        }
        println!("Check your official state website for full exemption rules.");
        Ok(())
    }
}
