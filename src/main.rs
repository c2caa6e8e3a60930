use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

use mortgage_offers::config::AppConfig;
use mortgage_offers::error::AppError;
use mortgage_offers::pipeline::{MortgagePipeline, OfferBatch};
use mortgage_offers::tables;
use mortgage_offers::tables::offers::OfferFormat;
use mortgage_offers::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "mortgage-offers",
    about = "Derive mortgage eligibility and personalized loan offers for a batch of bank clients",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the offer derivation batch (default command)
    Run(RunArgs),
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Override the configured client table path
    #[arg(long)]
    clients: Option<PathBuf>,
    /// Override the configured debtor table path
    #[arg(long)]
    debtors: Option<PathBuf>,
    /// Override the configured rate table path
    #[arg(long)]
    rates: Option<PathBuf>,
    /// Override the configured offer output path
    #[arg(long)]
    output: Option<PathBuf>,
    /// Reference date for age computation (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    as_of: Option<NaiveDate>,
    /// Output encoding for the offer table
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,
    /// Print each derived offer after the summary
    #[arg(long)]
    list_offers: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl From<OutputFormat> for OfferFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Csv => OfferFormat::Csv,
            OutputFormat::Json => OfferFormat::Json,
        }
    }
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Command::Run(RunArgs::default()));

    match command {
        Command::Run(args) => run_batch(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn run_batch(mut args: RunArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(path) = args.clients.take() {
        config.data.clients_file = path;
    }
    if let Some(path) = args.debtors.take() {
        config.data.debtors_file = path;
    }
    if let Some(path) = args.rates.take() {
        config.data.rates_file = path;
    }
    if let Some(path) = args.output.take() {
        config.data.offers_file = path;
    }

    telemetry::init(&config.telemetry)?;

    let reference_date = args
        .as_of
        .or(config.data.reference_date)
        .unwrap_or_else(|| Local::now().date_naive());

    let clients = tables::clients::from_path(&config.data.clients_file)?;
    let debtors = tables::debtors::from_path(&config.data.debtors_file)?;
    let tiers = tables::rates::from_path(&config.data.rates_file)?;
    info!(
        clients = clients.len(),
        debtors = debtors.len(),
        tiers = tiers.len(),
        "input tables loaded"
    );

    let pipeline = MortgagePipeline::new(tiers, reference_date);
    let batch = pipeline.run(clients, &debtors)?;

    tables::offers::write_to_path(&config.data.offers_file, &batch.offers, args.format.into())?;
    info!(
        offers = batch.offers.len(),
        output = %config.data.offers_file.display(),
        "offer table written"
    );

    render_summary(&batch, reference_date, &config.data.offers_file, args.list_offers);
    Ok(())
}

fn render_summary(batch: &OfferBatch, reference_date: NaiveDate, output: &Path, list_offers: bool) {
    println!("Mortgage offer batch");
    println!("Reference date: {reference_date}");

    println!("\nPopulation");
    println!("- {} client(s) loaded", batch.stats.input_clients);
    println!(
        "- {} within the eligible age band",
        batch.stats.after_age_screen
    );
    println!(
        "- {} clear of disqualifying debt",
        batch.stats.after_debt_screen
    );

    println!(
        "\n{} offer(s) written to {}",
        batch.offers.len(),
        output.display()
    );

    if list_offers {
        println!("\nOffers");
        for offer in &batch.offers {
            println!(
                "- {} {} | {} | {} | rate {:.2} | up to {:.0}",
                offer.name,
                offer.surname,
                offer.phone,
                offer.email,
                offer.interest_rate,
                offer.max_mortgage
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date(" 2026-03-01 ").expect("valid date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid"));
    }

    #[test]
    fn parse_date_rejects_other_layouts() {
        assert!(parse_date("01.03.2026").is_err());
    }

    #[test]
    fn output_format_maps_onto_offer_format() {
        assert_eq!(OfferFormat::from(OutputFormat::Csv), OfferFormat::Csv);
        assert_eq!(OfferFormat::from(OutputFormat::Json), OfferFormat::Json);
    }
}
