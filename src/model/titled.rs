use serde::{Deserialize, Serialize};

/// Usernames of every player holding a title, in upstream order.
pub type GrandmasterList = Vec<String>;

/// Payload of the `titled/{title}` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledPlayers {
    pub players: Vec<String>,
}

/// Titles the upstream keeps a player list for.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Title {
    #[default]
    GM,
    WGM,
    IM,
    WIM,
    FM,
    WFM,
    NM,
    WNM,
    CM,
    WCM,
}

impl Title {
    /// Human-readable plural used in listing headers.
    pub fn plural(&self) -> &'static str {
        match self {
            Title::GM => "grandmasters",
            Title::WGM => "woman grandmasters",
            Title::IM => "international masters",
            Title::WIM => "woman international masters",
            Title::FM => "FIDE masters",
            Title::WFM => "woman FIDE masters",
            Title::NM => "national masters",
            Title::WNM => "woman national masters",
            Title::CM => "candidate masters",
            Title::WCM => "woman candidate masters",
        }
    }
}
