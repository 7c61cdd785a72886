use clap::Parser;
use nn_client::ApiClient;
use nn_core::{FailureCopy, NewsApi, Result, ViewState};
use nn_web::logging::{init_logging, DEFAULT_DIRECTIVE};
use nn_web::mount::mount;
use nn_web::render;
use nn_web::AppConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod text;

#[derive(Parser, Debug)]
#[command(author, version, about = "New News: pages over the news API", long_about = None)]
pub struct Cli {
    /// Base URL of the news API (e.g. http://localhost:5000)
    #[arg(long, env = "NN_API_URL", global = true)]
    api_url: Option<String>,
    /// tracing filter directive
    #[arg(long, env = "NN_LOG", default_value = DEFAULT_DIRECTIVE, global = true)]
    log: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTML pages
    Serve {
        #[arg(long, env = "NN_BIND", default_value = nn_web::config::DEFAULT_BIND)]
        bind: SocketAddr,
    },
    /// Run one fetch cycle for a page and print it
    Show {
        #[command(subcommand)]
        page: Page,
    },
}

#[derive(clap::Subcommand, Debug)]
enum Page {
    /// Recent articles
    Dashboard,
    /// All feed titles
    Feeds,
    /// Articles of one feed
    Feed { title: String },
    /// A single article
    Article { id: String },
}

async fn show(api: Arc<dyn NewsApi>, page: Page) -> String {
    match page {
        Page::Dashboard => {
            let state = mount(
                async move { api.recent_articles().await.map(|list| list.articles) },
                FailureCopy::ARTICLES,
            )
            .settled()
            .await;
            text::listing(&render::dashboard::view(&state))
        }
        Page::Feeds => {
            let state = mount(
                async move { api.feed_titles().await.map(|list| list.feed_titles) },
                FailureCopy::FEEDS,
            )
            .settled()
            .await;
            text::feeds(&render::feeds::view(&state))
        }
        Page::Feed { title } => {
            let result = api.feed_articles(&title).await.map(|list| list.articles);
            let state = ViewState::settle(result, &FailureCopy::ARTICLES);
            text::listing(&render::feed_articles::view(&title, &state))
        }
        Page::Article { id } => {
            let state = ViewState::settle(api.article(&id).await, &FailureCopy::ARTICLE);
            text::article(&render::article::view(&state))
        }
    }
}

/// A missing `.env` is fine; an unreadable or malformed one is not.
fn load_env(loaded: std::result::Result<PathBuf, dotenvy::Error>) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(anyhow::Error::new(e).context("loading .env").into()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    load_env(dotenvy::dotenv())?;
    let cli = Cli::parse();
    init_logging(&cli.log)?;

    match cli.command {
        Commands::Serve { bind } => {
            let config = AppConfig {
                api_base_url: cli.api_url,
                bind,
            };
            info!("✨ Starting with {:?}", config);
            nn_web::serve(&config).await?;
        }
        Commands::Show { page } => {
            let client = ApiClient::new(cli.api_url)?;
            print!("{}", show(Arc::new(client), page).await);
        }
    }

    Ok(())
}
