use crate::applications::{
    produce_fake_data, write_csv, ApplicationDataError, DateRange, FakeApplicationGenerator,
};
use crate::config::AppConfig;
use crate::error::AppError;
use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use std::io;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_PREVIEW_COUNT: usize = 5;

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct RangeArgs {
    /// First possible application date (YYYY-MM-DD). Defaults to 2025-01-01.
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: Option<NaiveDate>,
    /// Exclusive upper bound for application dates (YYYY-MM-DD). Defaults to 2025-06-01.
    #[arg(long, value_parser = parse_date)]
    pub(crate) end: Option<NaiveDate>,
}

impl RangeArgs {
    fn resolve(&self) -> Result<DateRange, ApplicationDataError> {
        let default = DateRange::default();
        let start = self
            .start
            .map(|date| date.and_time(NaiveTime::MIN))
            .unwrap_or_else(|| default.start());
        let end = self
            .end
            .map(|date| date.and_time(NaiveTime::MIN))
            .unwrap_or_else(|| default.end());

        DateRange::new(start, end)
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct GenerateArgs {
    /// Number of applications to generate (defaults to FAKE_DATA_COUNT or 100)
    #[arg(long)]
    pub(crate) count: Option<usize>,
    /// Destination CSV file (defaults to FAKE_DATA_OUTPUT or applications.csv)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Seed for reproducible output (defaults to FAKE_DATA_SEED, else random)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    #[command(flatten)]
    pub(crate) range: RangeArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct PreviewArgs {
    /// Number of applications to print
    #[arg(long)]
    pub(crate) count: Option<usize>,
    /// Seed for reproducible output (defaults to FAKE_DATA_SEED, else random)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    #[command(flatten)]
    pub(crate) range: RangeArgs,
}

pub(crate) fn run_generate(config: AppConfig, args: GenerateArgs) -> Result<(), AppError> {
    let GenerateArgs {
        count,
        output,
        seed,
        range,
    } = args;

    let count = count.unwrap_or(config.generation.count);
    let output = output.unwrap_or(config.generation.output);
    let seed = seed.or(config.generation.seed);

    let mut generator = FakeApplicationGenerator::new(seed).with_range(range.resolve()?);
    info!(
        ?config.environment,
        count,
        seeded = seed.is_some(),
        path = %output.display(),
        "producing fake application data"
    );

    let outcome = produce_fake_data(&output, count, &mut generator)?;
    println!("{}", outcome.message());

    Ok(())
}

pub(crate) fn run_preview(config: AppConfig, args: PreviewArgs) -> Result<(), AppError> {
    let PreviewArgs { count, seed, range } = args;

    let count = count.unwrap_or(DEFAULT_PREVIEW_COUNT);
    let seed = seed.or(config.generation.seed);

    let table = FakeApplicationGenerator::new(seed)
        .with_range(range.resolve()?)
        .generate(count);

    let stdout = io::stdout();
    write_csv(stdout.lock(), &table)?;

    Ok(())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
