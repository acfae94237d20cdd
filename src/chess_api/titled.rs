use tracing::{debug, instrument};

use crate::chess_api;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::{GrandmasterList, Title, TitledPlayers};

#[instrument(skip(client, config))]
pub(crate) async fn get_titled_players(
    client: &reqwest::Client,
    config: &ClientConfig,
    title: Title,
) -> Result<GrandmasterList> {
    let url = chess_api::endpoint(&config.base_url, &["titled", &title.to_string()]);
    let titled: TitledPlayers = chess_api::get_json(client, config, url)
        .await
        .map_err(|e| e.within(format!("Failed to fetch {}", title.plural())))?;
    debug!(count = titled.players.len(), %title, "fetched titled players");
    Ok(titled.players)
}
