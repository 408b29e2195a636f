use std::sync::Arc;

use chrono::Local;
use clap::Parser;
use futures::{stream, StreamExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nd_client::NewsApiClient;
use nd_core::{
    country_name, AppConfig, Article, Category, Error, HeadlineProvider, HeadlineQuery,
    Result, COUNTRIES,
};
use nd_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse top news headlines by country and category", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the web server
    Serve {
        /// Listen address, e.g. 0.0.0.0:8080
        #[arg(long)]
        bind: Option<std::net::SocketAddr>,
        /// Public origin the page uses to reach its own API (defaults to the listen address)
        #[arg(long)]
        site_url: Option<String>,
    },
    /// Print top headlines to the terminal
    Fetch {
        /// Two-letter country code (see `newsdesk list`)
        #[arg(long, default_value = "us")]
        country: String,
        #[arg(long, value_enum, default_value_t = Category::General)]
        category: Category,
        /// Fetch every category for the country
        #[arg(long)]
        all: bool,
    },
    /// List supported categories and countries
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;

    match cli.command {
        Commands::Serve { bind, site_url } => {
            if let Some(addr) = bind {
                config.set_bind_addr(addr);
            }
            if let Some(url) = site_url {
                config.set_site_url(&url);
            }
            serve(config).await
        }
        Commands::Fetch {
            country,
            category,
            all,
        } => fetch(config, country, category, all).await,
        Commands::List => {
            list();
            Ok(())
        }
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    let provider = Arc::new(NewsApiClient::from_config(&config)?);
    let addr = config.bind_addr;
    let site_url = config.site_url.clone();
    let app = create_app(AppState::new(provider, config)).await;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🗞️ newsdesk listening on http://{addr} (site origin {site_url})");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn fetch(config: AppConfig, country: String, category: Category, all: bool) -> Result<()> {
    let client = Arc::new(NewsApiClient::from_config(&config)?);

    println!(
        "Top headlines for {} on {}",
        country_name(&country).unwrap_or(&country),
        Local::now().format("%Y-%m-%d %H:%M")
    );

    if !all {
        let articles = fetch_section(&client, &country, category).await?;
        print_section(category, &articles);
        return Ok(());
    }

    let sections: Vec<(Category, Result<Vec<Article>>)> = stream::iter(Category::ALL)
        .map(|category| {
            let client = Arc::clone(&client);
            let country = country.clone();
            async move { (category, fetch_section(&client, &country, category).await) }
        })
        .buffered(4)
        .collect()
        .await;

    let mut failed = false;
    for (category, outcome) in sections {
        match outcome {
            Ok(articles) => print_section(category, &articles),
            Err(err) => {
                failed = true;
                eprintln!("{}: fetch failed: {err}", category.label());
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

async fn fetch_section(
    client: &NewsApiClient,
    country: &str,
    category: Category,
) -> Result<Vec<Article>> {
    let query = HeadlineQuery::from_params(
        Some(country.to_string()),
        Some(category.as_str().to_string()),
    );
    let raw = client.top_headlines(&query).await?;
    if !raw.is_success() {
        return Err(Error::Provider(format!(
            "upstream returned status {} for {}",
            raw.status, query
        )));
    }
    Ok(raw.parse()?.articles)
}

fn print_section(category: Category, articles: &[Article]) {
    println!("\n## {} ({} stories)", category.label(), articles.len());
    for article in articles {
        println!("- {} [{}]", article.title, article.source.name);
        println!("  {}", article.url);
    }
}

fn list() {
    println!("Categories:");
    for category in &Category::ALL {
        println!("  {}", category.as_str());
    }
    println!("\nCountries:");
    for country in &COUNTRIES {
        println!("  {}  {}", country.code, country.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
