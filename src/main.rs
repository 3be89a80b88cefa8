use clap::{Parser, Subcommand};

mod cmd;
mod pricing;
mod properties;
mod report;
mod utils;

#[derive(Parser, Debug)]
#[command(
    name = "fairprice",
    version,
    about = "Calculate a fair, speculation-free property price and estimate stamp duty"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a single property and estimate its stamp duty
    Quote(cmd::quote::QuoteCommand),
    /// Write the fair price summary report as CSV
    Report(cmd::report::ReportCommand),
    /// Price every property in a CSV or JSON file
    Batch(cmd::batch::BatchCommand),
    /// Show stamp duty rates, land value sources and exemptions
    Rates(cmd::rates::RatesCommand),
    /// Print the expected input and report formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    match cli.command {
        Command::Quote(quote) => quote.exec(),
        Command::Report(report) => report.exec(),
        Command::Batch(batch) => batch.exec(),
        Command::Rates(rates) => rates.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
