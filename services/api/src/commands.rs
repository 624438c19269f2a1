use clap::Args;
use name_match::config::AppConfig;
use name_match::customers::{
    check_threshold, BatchImporter, BatchMatch, CustomerValidationService,
};
use name_match::error::AppError;
use name_match::matching::{is_match, match_emails, match_names};
use name_match::telemetry;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PairArgs {
    /// First value to compare
    pub(crate) first: String,
    /// Second value to compare
    pub(crate) second: String,
    /// Match threshold (defaults to MATCH_THRESHOLD or 0.8)
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with name1,name2 and optional email1,email2 columns
    pub(crate) csv: PathBuf,
    /// Match threshold (defaults to MATCH_THRESHOLD or 0.8)
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
    /// Only print rows that cleared the threshold
    #[arg(long)]
    pub(crate) matched_only: bool,
}

pub(crate) fn run_names(args: PairArgs) -> Result<(), AppError> {
    let service = prepare()?;
    let threshold = resolve_threshold(&service, args.threshold)?;
    let score = match_names(&args.first, &args.second);
    render_pair("names", &args, score, threshold);
    Ok(())
}

pub(crate) fn run_emails(args: PairArgs) -> Result<(), AppError> {
    let service = prepare()?;
    let threshold = resolve_threshold(&service, args.threshold)?;
    let score = match_emails(&args.first, &args.second);
    render_pair("emails", &args, score, threshold);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let service = prepare()?;
    let threshold = args.threshold.unwrap_or(service.default_threshold());
    let matches = BatchImporter::from_path(&args.csv, &service, threshold)?;
    render_batch(&matches, threshold, args.matched_only);
    Ok(())
}

fn prepare() -> Result<CustomerValidationService, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(CustomerValidationService::new(config.matching.threshold)?)
}

fn resolve_threshold(
    service: &CustomerValidationService,
    requested: Option<f64>,
) -> Result<f64, AppError> {
    match requested {
        Some(threshold) => Ok(check_threshold(threshold)?),
        None => Ok(service.default_threshold()),
    }
}

fn render_pair(kind: &str, args: &PairArgs, score: f64, threshold: f64) {
    let verdict = if is_match(score, threshold) {
        "match"
    } else {
        "no match"
    };
    println!("Comparing {kind}: '{}' vs '{}'", args.first, args.second);
    println!("- score {score:.4} (raw, not a probability)");
    println!("- threshold {threshold:.2}: {verdict}");
}

fn render_batch(matches: &[BatchMatch], threshold: f64, matched_only: bool) {
    let matched = matches.iter().filter(|entry| entry.outcome.matched).count();
    println!(
        "Customer batch: {} rows, {} matched at threshold {:.2}",
        matches.len(),
        matched,
        threshold
    );

    for entry in matches {
        if matched_only && !entry.outcome.matched {
            continue;
        }
        println!(
            "- row {} | {} | {} | name {:.4} | email {:.4} | score {:.4} | {}",
            entry.row,
            entry.name1,
            entry.name2,
            entry.outcome.name_score,
            entry.outcome.email_score,
            entry.outcome.score,
            if entry.outcome.matched {
                "match"
            } else {
                "no match"
            }
        );
    }
}
