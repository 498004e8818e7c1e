use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use taxsale_search::config::{self, SaleType, SearchConfig};
use taxsale_search::{deadline, logger, pipeline, report, CountyRegistry, ListingQuery};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Find Texas property-tax auction listings")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Search every registered county and print the listings (default)
    Search(SearchArgs),
    /// Print the notice-posting deadline for the next monthly sale
    Deadline {
        /// Compute as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[derive(Args, Clone)]
struct SearchArgs {
    /// County registry CSV: name,id[,url_prefix]
    #[arg(long, env = "TAXSALE_COUNTIES", default_value = config::DEFAULT_REGISTRY_PATH)]
    counties: PathBuf,

    #[arg(long, env = "TAXSALE_SALE_TYPE", value_enum, default_value_t = SaleType::Sale)]
    sale_type: SaleType,

    /// Lowest adjudged value to ask the service for
    #[arg(long, env = "TAXSALE_MIN_VALUE", default_value_t = config::DEFAULT_MIN_ADJUDGED_VALUE)]
    min_value: u64,

    /// Pause between county requests, in milliseconds
    #[arg(long, env = "TAXSALE_PAUSE_MS", default_value_t = 1000)]
    pause_ms: u64,

    #[arg(long, env = "TAXSALE_ENDPOINT", default_value = config::DEFAULT_ENDPOINT)]
    endpoint: String,

    #[arg(long, env = "TAXSALE_TIMEOUT_SECS", default_value_t = 60)]
    timeout_secs: u64,
}

impl From<SearchArgs> for SearchConfig {
    fn from(args: SearchArgs) -> Self {
        SearchConfig {
            registry_path: args.counties,
            endpoint: args.endpoint,
            sale_type: args.sale_type,
            min_adjudged_value: args.min_value,
            pause: Duration::from_millis(args.pause_ms),
            timeout: Duration::from_secs(args.timeout_secs),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init();

    match cli.command {
        Some(Command::Deadline { today }) => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let deadline = deadline::notice_deadline(today)
                .with_context(|| format!("no auction deadline computable from {today}"))?;
            println!("{}", deadline::describe(deadline));
            Ok(())
        }
        Some(Command::Search(args)) => search(args.into()),
        None => search(cli.search.into()),
    }
}

fn search(config: SearchConfig) -> Result<()> {
    let registry = CountyRegistry::load(&config.registry_path)
        .context("county registry is required before searching")?;
    info!(
        counties = registry.len(),
        sale_type = config.sale_type.code(),
        min_value = config.min_adjudged_value,
        "starting search"
    );

    let query = ListingQuery::new(&config).context("building HTTP client")?;
    let summary = pipeline::run(&registry, &query, config.pause);

    report::write_report(&summary.records, std::io::stdout().lock())
        .context("writing report to stdout")?;
    Ok(())
}
