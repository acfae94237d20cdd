use std::time::Duration;

use clap::{Parser, Subcommand};
use reqwest::Url;
use tracing_subscriber::EnvFilter;

use chess_gm_wiki::page::{ListingPage, ProfilePage};
use chess_gm_wiki::render::{render_listing, render_profile};
use chess_gm_wiki::{ChessClient, ClientConfig, Title, DEFAULT_BASE_URL};

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse chess.com titled players from the terminal")]
struct Cli {
    /// API root to read from
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: Url,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List titled players, twenty per page
    List {
        /// Title to list (GM, IM, WGM, ...)
        #[arg(short, long, default_value_t = Title::GM)]
        title: Title,

        /// How many pages to reveal
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },
    /// Show a player's profile and statistics
    Player {
        username: String,

        /// Keep the offline clock ticking until Ctrl-C
        #[arg(short, long)]
        watch: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::default()
        .with_base_url(cli.base_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = ChessClient::with_config(config);

    match cli.command {
        Command::List { title, pages } => {
            let mut page = ListingPage::new(title);
            page.load(&client).await;
            for _ in 1..pages {
                page.load_more();
            }
            println!("{}", render_listing(&page));
        }
        Command::Player { username, watch } => {
            let mut page = ProfilePage::new(username);
            page.load(&client).await;
            println!("{}", render_profile(&page));

            let Some(mut ticks) = page.clock().filter(|_| watch).map(|clock| clock.subscribe())
            else {
                return;
            };
            loop {
                tokio::select! {
                    changed = ticks.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        println!("offline for {}", *ticks.borrow_and_update());
                    }
                    _ = tokio::signal::ctrl_c() => break,
                }
            }
        }
    }
}
