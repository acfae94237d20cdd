use std::fmt::{Display, Formatter};

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::model::{GameStats, PlayerStats, RatingKind, TimeControl};

/// Shown in place of a rating the upstream did not send.
pub const MISSING_RATING: &str = "N/A";

/// A rating that may be missing. Displays as the number or [`MISSING_RATING`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatingValue {
    Known(u32),
    Missing,
}

impl RatingValue {
    pub fn value(self) -> Option<u32> {
        match self {
            RatingValue::Known(rating) => Some(rating),
            RatingValue::Missing => None,
        }
    }

    /// The rating as text, or `fallback` when missing.
    pub fn text_or(self, fallback: &str) -> String {
        self.value()
            .map(|rating| rating.to_string())
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl Display for RatingValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingValue::Known(rating) => write!(f, "{rating}"),
            RatingValue::Missing => f.write_str(MISSING_RATING),
        }
    }
}

/// Win/loss/draw counts with every missing count read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WinLossDraw {
    pub win: u32,
    pub loss: u32,
    pub draw: u32,
}

impl Display for WinLossDraw {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "W: {} | L: {} | D: {}", self.win, self.loss, self.draw)
    }
}

pub fn safe_rating(game: Option<&GameStats>, kind: RatingKind) -> RatingValue {
    let snapshot = game.and_then(|game| match kind {
        RatingKind::Last => game.last.as_ref(),
        RatingKind::Best => game.best.as_ref(),
    });
    snapshot
        .and_then(|snapshot| snapshot.rating)
        .map_or(RatingValue::Missing, RatingValue::Known)
}

pub fn safe_record(game: Option<&GameStats>) -> WinLossDraw {
    let record = game.and_then(|game| game.record.as_ref());
    WinLossDraw {
        win: record.and_then(|r| r.win).unwrap_or(0),
        loss: record.and_then(|r| r.loss).unwrap_or(0),
        draw: record.and_then(|r| r.draw).unwrap_or(0),
    }
}

/// A time control is worth showing only with a current rating, a best
/// rating, and a win count. Partial blocks are hidden, never zero-filled.
pub fn is_valid_game_stats(game: Option<&GameStats>) -> bool {
    let Some(game) = game else {
        return false;
    };
    let has_last = game.last.as_ref().is_some_and(|s| s.rating.is_some());
    let has_best = game.best.as_ref().is_some_and(|s| s.rating.is_some());
    let has_wins = game.record.as_ref().is_some_and(|r| r.win.is_some());
    has_last && has_best && has_wins
}

/// One statistics card on the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsCard {
    pub time_control: TimeControl,
    pub current: RatingValue,
    pub best: RatingValue,
    pub record: WinLossDraw,
}

/// What the statistics section of a profile shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StatsSection {
    /// The statistics request failed or returned nothing.
    NotAvailable,
    /// Statistics arrived but no time control passed [`is_valid_game_stats`].
    Incomplete,
    Cards(Vec<StatsCard>),
}

impl StatsSection {
    pub fn derive(stats: Option<&PlayerStats>) -> Self {
        let Some(stats) = stats else {
            return StatsSection::NotAvailable;
        };

        let cards: Vec<StatsCard> = TimeControl::iter()
            .filter_map(|time_control| {
                let game = stats.game(time_control);
                is_valid_game_stats(game).then(|| StatsCard {
                    time_control,
                    current: safe_rating(game, RatingKind::Last),
                    best: safe_rating(game, RatingKind::Best),
                    record: safe_record(game),
                })
            })
            .collect();

        if cards.is_empty() {
            StatsSection::Incomplete
        } else {
            StatsSection::Cards(cards)
        }
    }
}
