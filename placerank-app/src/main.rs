use anyhow::Result;
use clap::{Parser, ValueEnum};
use placerank_common::observability::{init_logging, LogConfig};
use placerank_common::{PlaceConfig, DEFAULT_WEBDRIVER_URL};
use placerank_core::types::{RankResult, SearchCategory, SearchRequest};
use placerank_core::{RankFinder, WaitPolicy};
use placerank_drivers::place_browser::driver::PlaceDriver;
use tracing::info;

/// Find where a store ranks in Naver Place search results for a keyword.
#[derive(Debug, Parser)]
#[command(name = "placerank", version, about)]
struct Cli {
    /// Search keyword, e.g. "강남역 맛집".
    keyword: String,

    /// Store name to locate in the results, e.g. "맛있는파스타".
    store_name: String,

    /// Which result page the lookup runs against.
    #[arg(long, value_enum, default_value_t = CategoryArg::Restaurant)]
    category: CategoryArg,

    /// WebDriver service endpoint.
    #[arg(long, env = "PLACERANK_WEBDRIVER_URL", default_value = DEFAULT_WEBDRIVER_URL)]
    webdriver_url: String,

    /// Run with a visible browser window (debugging aid).
    #[arg(long)]
    show_browser: bool,

    /// Output format for the result.
    #[arg(long, value_enum, default_value_t = OutputArg::Text)]
    output: OutputArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Restaurant,
    General,
}

impl From<CategoryArg> for SearchCategory {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Restaurant => SearchCategory::Restaurant,
            CategoryArg::General => SearchCategory::General,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputArg {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_path = init_logging(LogConfig::default())?;

    // Empty inputs are a caller error; they never reach the finder.
    let request = SearchRequest::new(cli.keyword, cli.store_name, cli.category.into())?;

    let config = PlaceConfig {
        webdriver_url: cli.webdriver_url,
        headless: !cli.show_browser,
    };
    let driver = PlaceDriver::new(&config).await?;

    info!(target: "placerank.app", log = %log_path.display(), "lookup starting");
    let finder = RankFinder::new(WaitPolicy::standard());
    let result = finder.find_rank(driver.into_session(), &request).await;

    print_result(&result, &request, cli.output)
}

fn print_result(result: &RankResult, request: &SearchRequest, output: OutputArg) -> Result<()> {
    match output {
        OutputArg::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputArg::Text => match result.rank {
            Some(rank) => println!(
                "\"{}\" ranks #{} for \"{}\" ({} reviews)",
                request.store_name(),
                rank,
                request.keyword(),
                result.review_count
            ),
            None => println!(
                "\"{}\" was not found within roughly the first 100 results for \"{}\" \
                 (it may be running as an ad, or rank below the cutoff)",
                request.store_name(),
                request.keyword()
            ),
        },
    }
    Ok(())
}
