use serde::{Deserialize, Serialize};

use super::lenient::lenient;
use super::PlayerStats;

/// Public profile of a single player as served by `player/{username}`.
///
/// Timestamps are epoch seconds. They are always sent upstream, but a missing
/// or malformed value decodes to `None` so that display code can fall back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_id: u64,
    #[serde(rename = "@id", default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub username: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// API URL of the player's country, e.g. `https://api.chess.com/pub/country/NO`.
    #[serde(default)]
    pub country: String,
    #[serde(default, deserialize_with = "lenient")]
    pub last_online: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub joined: Option<i64>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub is_streamer: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub league: Option<String>,
}

impl PlayerProfile {
    /// ISO country code, taken from the last segment of the country URL.
    pub fn country_code(&self) -> Option<&str> {
        self.country
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|code| !code.is_empty())
    }

    pub fn is_online(&self) -> bool {
        self.status == "online"
    }
}

/// Everything the profile page needs: the profile itself plus statistics,
/// which are absent whenever the statistics request failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPageData {
    pub profile: PlayerProfile,
    pub stats: Option<PlayerStats>,
}
