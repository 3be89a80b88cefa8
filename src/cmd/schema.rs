//! Schema command - print expected input formats

use crate::properties::{PropertyBatch, PropertyRecord};
use crate::report;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the batch input format
    JsonSchema,
    /// CSV header row with column names
    CsvHeader,
    /// CSV column descriptions
    CsvFields,
    /// Header and rows of the exported report
    Report,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => self.print_csv_header(),
            SchemaFormat::CsvFields => self.print_csv_fields(),
            SchemaFormat::Report => self.print_report_format(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(PropertyBatch);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_header(&self) -> anyhow::Result<()> {
        println!("{}", PropertyRecord::csv_header().join(","));
        Ok(())
    }

    fn print_csv_fields(&self) -> anyhow::Result<()> {
        println!("CSV Input Format");
        println!("================");
        println!();
        for field in PropertyRecord::csv_schema() {
            let req = if field.required { "required" } else { "optional" };
            println!("{:15} ({:8})  {}", field.name, req, field.description);
        }
        println!();
        println!("Give either floors + floor_area, or floor_areas (floors is then optional).");
        Ok(())
    }

    fn print_report_format(&self) -> anyhow::Result<()> {
        println!("{} (UTF-8, comma separated)", report::REPORT_FILE_NAME);
        println!();
        println!("Category,Amount");
        println!("{},<amount, e.g. \"$1,105,500.00\">", report::FAIR_PRICE);
        println!("{},<amount>", report::STAMP_DUTY);
        println!("{},<state, e.g. Victoria (VIC)>", report::STATE);
        Ok(())
    }
}
