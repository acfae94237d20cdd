use tracing::instrument;

use crate::chess_api;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::*;

/// The main entry point for reading chess.com player data.
///
/// `ChessClient` wraps a [`reqwest::Client`] and exposes methods to fetch
/// titled-player lists, player profiles, and player statistics. Every request
/// is retried on rate limiting and transport failure according to the
/// configured [`RetryPolicy`](crate::RetryPolicy).
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> chess_gm_wiki::Result<()> {
/// use chess_gm_wiki::ChessClient;
///
/// let client = ChessClient::new();
/// let grandmasters = client.get_grandmasters().await?;
/// println!("Found {} grandmasters", grandmasters.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChessClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ChessClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with the given settings.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, TLS, connection pooling, etc.
    /// The identifying user agent is still sent on every request.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            config: ClientConfig::default(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the usernames of every grandmaster.
    #[instrument(skip(self))]
    pub async fn get_grandmasters(&self) -> Result<GrandmasterList> {
        self.get_titled_players(Title::GM).await
    }

    /// Fetch the usernames of every player holding `title`.
    #[instrument(skip(self))]
    pub async fn get_titled_players(&self, title: Title) -> Result<GrandmasterList> {
        chess_api::titled::get_titled_players(&self.http, &self.config, title).await
    }

    /// Fetch a player's public profile.
    #[instrument(skip(self))]
    pub async fn get_player(&self, username: &str) -> Result<PlayerProfile> {
        chess_api::player::get_player(&self.http, &self.config, username).await
    }

    /// Fetch a player's per-time-control statistics.
    #[instrument(skip(self))]
    pub async fn get_player_stats(&self, username: &str) -> Result<PlayerStats> {
        chess_api::player::get_player_stats(&self.http, &self.config, username).await
    }

    /// Fetch profile and statistics together, tolerating missing statistics.
    #[instrument(skip(self))]
    pub async fn get_player_page(&self, username: &str) -> Result<PlayerPageData> {
        chess_api::player::get_player_page(&self.http, &self.config, username).await
    }
}

impl Default for ChessClient {
    fn default() -> Self {
        Self::new()
    }
}
