use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::stats::StatsSection;
use super::time::{format_date, format_elapsed, format_last_online_at};
use crate::model::PlayerPageData;

/// Badge shown when the upstream profile carries no title.
pub const DEFAULT_TITLE: &str = "GM";

/// The presence line of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Presence {
    Online,
    LastSeen(String),
    Unknown,
}

impl Display for Presence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Presence::Online => f.write_str("Online now"),
            Presence::LastSeen(when) => write!(f, "Last seen {when}"),
            Presence::Unknown => f.write_str("Status unknown"),
        }
    }
}

/// Everything the profile page renders, with every optional field resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileDisplay {
    /// Display name, or the username when there is none.
    pub heading: String,
    pub title: String,
    pub verified: bool,
    pub streamer: bool,
    pub username: String,
    /// Display name, only when it differs from the username.
    pub secondary_name: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub country_code: Option<String>,
    pub league: Option<String>,
    /// `Joined <date>`, only when the upstream sent a join timestamp.
    pub joined: Option<String>,
    pub presence: Presence,
    /// Elapsed time since last online at derivation time; `None` while online.
    pub offline_for: Option<String>,
    pub stats: StatsSection,
}

impl ProfileDisplay {
    pub fn derive(data: &PlayerPageData, now: DateTime<Utc>) -> Self {
        let profile = &data.profile;

        let name = profile.name.as_deref().filter(|name| !name.is_empty());
        let joined = profile
            .joined
            .filter(|ts| *ts != 0)
            .map(|ts| format!("Joined {}", format_date(Some(ts))));
        let last_online = profile.last_online.filter(|ts| *ts != 0);

        let presence = if profile.is_online() {
            Presence::Online
        } else if last_online.is_some() {
            Presence::LastSeen(format_last_online_at(last_online, now))
        } else {
            Presence::Unknown
        };
        let offline_for =
            (!profile.is_online()).then(|| format_elapsed(profile.last_online, now));

        Self {
            heading: name.unwrap_or(profile.username.as_str()).to_string(),
            title: profile
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            verified: profile.verified,
            streamer: profile.is_streamer,
            username: profile.username.clone(),
            secondary_name: name
                .filter(|name| *name != profile.username)
                .map(str::to_string),
            avatar: profile.avatar.clone(),
            location: profile.location.clone(),
            country_code: profile.country_code().map(str::to_string),
            league: profile.league.clone(),
            joined,
            presence,
            offline_for,
            stats: StatsSection::derive(data.stats.as_ref()),
        }
    }
}
