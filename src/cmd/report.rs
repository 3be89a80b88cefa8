//! Report command - write the fair price summary as CSV

use super::PropertyArgs;
use crate::report::{self, REPORT_FILE_NAME};
use anyhow::Context;
use clap::Args;
use std::{fs::File, io, path::PathBuf};

#[derive(Args, Debug)]
pub struct ReportCommand {
    #[command(flatten)]
    property: PropertyArgs,

    /// Output file path, or "-" for stdout
    #[arg(short, long, default_value = REPORT_FILE_NAME)]
    output: PathBuf,

    /// Open the written report with the system's default application
    #[arg(long)]
    open: bool,
}

impl ReportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let (_, result) = self.property.quote()?;
        let rows = report::rows(&result);

        if self.output.as_os_str() == "-" {
            return report::write_csv(&rows, io::stdout());
        }

        let file = File::create(&self.output)
            .with_context(|| format!("failed to create {}", self.output.display()))?;
        report::write_csv(&rows, file)?;
        log::info!("Wrote {} report rows to {}", rows.len(), self.output.display());
        println!("Report written to: {}", self.output.display());

        if self.open {
            opener::open(&self.output)?;
        }
        Ok(())
    }
}
