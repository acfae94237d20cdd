use tracing::{debug, instrument};

use crate::chess_api;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::{PlayerPageData, PlayerProfile, PlayerStats};

#[instrument(skip(client, config))]
pub(crate) async fn get_player(
    client: &reqwest::Client,
    config: &ClientConfig,
    username: &str,
) -> Result<PlayerProfile> {
    let url = chess_api::endpoint(&config.base_url, &["player", username]);
    let profile: PlayerProfile = chess_api::get_json(client, config, url)
        .await
        .map_err(|e| e.within(format!("Failed to fetch player {username}")))?;
    debug!(player_id = profile.player_id, "fetched player profile");
    Ok(profile)
}

#[instrument(skip(client, config))]
pub(crate) async fn get_player_stats(
    client: &reqwest::Client,
    config: &ClientConfig,
    username: &str,
) -> Result<PlayerStats> {
    let url = chess_api::endpoint(&config.base_url, &["player", username, "stats"]);
    chess_api::get_json(client, config, url)
        .await
        .map_err(|e| e.within(format!("Failed to fetch stats for {username}")))
}

/// Fetch profile and statistics concurrently and wait for both to settle.
///
/// Only a profile failure is an error; failed statistics become `None`.
#[instrument(skip(client, config))]
pub(crate) async fn get_player_page(
    client: &reqwest::Client,
    config: &ClientConfig,
    username: &str,
) -> Result<PlayerPageData> {
    let (profile, stats) = tokio::join!(
        get_player(client, config, username),
        get_player_stats(client, config, username)
    );

    let stats = match stats {
        Ok(stats) => Some(stats),
        Err(err) => {
            debug!(error = %err, "statistics unavailable");
            None
        }
    };

    Ok(PlayerPageData {
        profile: profile?,
        stats,
    })
}
