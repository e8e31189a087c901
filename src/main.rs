use std::sync::Arc;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use futures::StreamExt;
use log::{debug, info};

use news_fetcher::{
    DEFAULT_COUNTRY, DefaultNewsRepository, NEWS_API_BASE_URL, NewsApiClient, NewsRepository,
    NewsStateStream, RemoteNewsDataSource, ResultState, StdResult,
};

/// Command line arguments for the news fetcher
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// News API key
    #[arg(short, long, env = "NEWS_API_KEY", hide_env_values = true)]
    api_key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the top headlines of a country
    Headlines {
        /// Two-letter ISO 3166-1 code of the country
        #[arg(short, long, default_value = DEFAULT_COUNTRY)]
        country: String,
    },

    /// Search articles whose title matches a query
    Search {
        /// The text searched in article titles
        query: String,
    },
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Command: {:?}", args.command);

    let repository = build_repository(&args.api_key)?;
    let states = match &args.command {
        Command::Headlines { country } => repository.get_headlines(country),
        Command::Search { query } => repository.search_articles(query),
    };
    render_states(states).await
}

fn build_repository(api_key: &str) -> StdResult<Arc<dyn NewsRepository>> {
    let client = Arc::new(NewsApiClient::try_new(NEWS_API_BASE_URL, api_key)?);
    let data_source = Arc::new(RemoteNewsDataSource::new(client));

    Ok(Arc::new(DefaultNewsRepository::new(data_source)))
}

async fn render_states(mut states: NewsStateStream) -> StdResult<()> {
    while let Some(state) = states.next().await {
        match state {
            ResultState::None => {}
            ResultState::Loading => info!("Loading news"),
            ResultState::Success(response) => {
                for article in &response.articles {
                    println!("{article}");
                }
                println!(
                    "{} articles shown, {} available",
                    response.articles.len(),
                    response.total_results
                );
            }
            ResultState::Error {
                exception: Some(exception),
                ..
            } => return Err(anyhow!(exception).context("News request raised a fault")),
            ResultState::Error {
                error,
                exception: None,
            } => {
                let details = error
                    .and_then(|error| error.message)
                    .unwrap_or_else(|| "no details".to_string());
                return Err(anyhow!("News request failed: {details}"));
            }
        }
    }

    Ok(())
}
