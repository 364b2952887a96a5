use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use pickem_ranker::config::{AppConfig, DEFAULT_CONFIG_PATH};
use pickem_ranker::data::odds_api::OddsApiSource;
use pickem_ranker::data::sample::SampleSource;
use pickem_ranker::data::OddsSource;
use pickem_ranker::monitoring::logger;
use pickem_ranker::pipeline::{build_weekly_report, ReferenceDate, RunSettings};
use pickem_ranker::ranking::names::TeamNames;

#[derive(Parser, Debug)]
#[command(name = "pickem-ranker")]
#[command(about = "Rank this week's NFL games by consensus point spread", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Rank the week containing this date (YYYY-MM-DD or RFC 3339)
    #[arg(short, long)]
    date: Option<String>,

    /// Use the bundled sample week even if ODDS_API_KEY is set
    #[arg(long)]
    sample: bool,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, secrets) = AppConfig::load(&cli.config)?;

    logger::init_logging(&config.monitoring)?;

    let (source, default_reference): (Box<dyn OddsSource>, ReferenceDate) =
        match secrets.odds_api_key {
            Some(key) if !cli.sample => (
                Box::new(OddsApiSource::new(&config.odds_api, key)?),
                ReferenceDate::Live,
            ),
            _ => (
                Box::new(SampleSource::new()),
                ReferenceDate::Anchor(config.sample.anchor_date),
            ),
        };

    let settings = RunSettings {
        reference: cli.date.map_or(default_reference, ReferenceDate::Explicit),
        utc_offset: config.week.offset(),
    };

    tracing::info!(
        source = source.name(),
        live = source.is_live(),
        reference = ?settings.reference,
        "pickem-ranker starting"
    );

    let names = TeamNames::cbs();
    let report = build_weekly_report(source.as_ref(), &names, &settings, Utc::now()).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n{report}");
    }

    Ok(())
}
