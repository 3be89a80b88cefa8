//! Fair price summary report, exported as a two-column CSV table

use crate::pricing::PriceResult;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const REPORT_FILE_NAME: &str = "FairPrice_Report.csv";

pub const FAIR_PRICE: &str = "Total Fair Property Price";
pub const STAMP_DUTY: &str = "Estimated Stamp Duty";
pub const STATE: &str = "State";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Amount")]
    pub amount: String,
}

impl ReportRow {
    fn new(category: &str, amount: String) -> Self {
        ReportRow {
            category: category.to_string(),
            amount,
        }
    }
}

/// The three report rows, in export order
pub fn rows(result: &PriceResult) -> Vec<ReportRow> {
    vec![
        ReportRow::new(FAIR_PRICE, format_currency(result.fair_price)),
        ReportRow::new(STAMP_DUTY, format_currency(result.stamp_duty)),
        ReportRow::new(STATE, result.jurisdiction.label()),
    ]
}

pub fn write_csv<W: Write>(rows: &[ReportRow], writer: W) -> anyhow::Result<()> {
    crate::utils::write_csv(rows, writer)
}

#[cfg(test)]
pub fn read_csv<R: std::io::Read>(reader: R) -> anyhow::Result<Vec<ReportRow>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let rows: Result<Vec<ReportRow>, _> = rdr.deserialize().collect();
    Ok(rows?)
}

/// Format as dollars with thousands separators, e.g. "$1,105,500.00"
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}

/// Inverse of [`format_currency`]
#[cfg(test)]
pub fn parse_currency(s: &str) -> Result<Decimal, rust_decimal::Error> {
    let s = s.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let digits: String = s
        .strip_prefix('$')
        .unwrap_or(s)
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let value = digits.parse::<Decimal>()?;
    Ok(if negative { -value } else { value })
}
