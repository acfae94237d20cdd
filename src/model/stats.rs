use serde::{Deserialize, Serialize};

use super::lenient::lenient;

/// Ratings and results per time control, as served by `player/{username}/stats`.
///
/// Any level may be missing: a present block does not imply present children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default, deserialize_with = "lenient")]
    pub chess_blitz: Option<GameStats>,
    #[serde(default, deserialize_with = "lenient")]
    pub chess_rapid: Option<GameStats>,
    #[serde(default, deserialize_with = "lenient")]
    pub chess_bullet: Option<GameStats>,
}

impl PlayerStats {
    pub fn game(&self, time_control: TimeControl) -> Option<&GameStats> {
        match time_control {
            TimeControl::Blitz => self.chess_blitz.as_ref(),
            TimeControl::Rapid => self.chess_rapid.as_ref(),
            TimeControl::Bullet => self.chess_bullet.as_ref(),
        }
    }
}

/// Statistics for one time control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    #[serde(default, deserialize_with = "lenient")]
    pub last: Option<RatingSnapshot>,
    #[serde(default, deserialize_with = "lenient")]
    pub best: Option<RatingSnapshot>,
    #[serde(default, deserialize_with = "lenient")]
    pub record: Option<GameRecord>,
}

/// A rating together with the epoch second it was reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSnapshot {
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub win: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub loss: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub draw: Option<u32>,
}

/// The time controls shown on a profile, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TimeControl {
    Blitz,
    Rapid,
    Bullet,
}

/// Which rating of a time control to read.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize)]
pub enum RatingKind {
    Last,
    Best,
}
