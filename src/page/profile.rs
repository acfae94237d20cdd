use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use super::{Generation, LoadState, LoadTicket, PageError};
use crate::client::ChessClient;
use crate::error::Result;
use crate::model::PlayerPageData;
use crate::view::{LastOnlineClock, ProfileDisplay};

/// A single player's page: profile, statistics, and the offline clock.
///
/// The clock lives exactly as long as the loaded profile it belongs to; it is
/// dropped (and its ticker cancelled) on reload, navigation, and drop.
#[derive(Debug)]
pub struct ProfilePage {
    username: String,
    state: LoadState<PlayerPageData>,
    clock: Option<LastOnlineClock>,
    generation: Generation,
}

impl ProfilePage {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            state: LoadState::Idle,
            clock: None,
            generation: Generation::default(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn state(&self) -> &LoadState<PlayerPageData> {
        &self.state
    }

    pub fn clock(&self) -> Option<&LastOnlineClock> {
        self.clock.as_ref()
    }

    /// Show another player. Anything in flight for the previous one is
    /// invalidated.
    pub fn navigate(&mut self, username: impl Into<String>) {
        self.username = username.into();
        self.state = LoadState::Idle;
        self.clock = None;
        self.generation.next();
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.state = LoadState::Loading;
        self.clock = None;
        self.generation.next()
    }

    /// Apply a fetch outcome. Returns `false` if `ticket` is stale.
    ///
    /// Must be called inside a Tokio runtime, since a successful load of an
    /// offline player starts the elapsed-time clock.
    pub fn finish_load(&mut self, ticket: LoadTicket, outcome: Result<PlayerPageData>) -> bool {
        if !self.generation.is_current(ticket) {
            debug!(?ticket, username = %self.username, "discarding stale profile load");
            return false;
        }
        match outcome {
            Ok(data) => {
                if !data.profile.is_online() {
                    self.clock = Some(LastOnlineClock::start(data.profile.last_online));
                }
                self.state = LoadState::Success(data);
            }
            Err(err) => {
                self.state = LoadState::Error(PageError::from(&err));
            }
        }
        true
    }

    #[instrument(skip(self, client), fields(username = %self.username))]
    pub async fn load(&mut self, client: &ChessClient) {
        let ticket = self.begin_load();
        let outcome = client.get_player_page(&self.username).await;
        self.finish_load(ticket, outcome);
    }

    /// Reload from scratch.
    pub async fn retry(&mut self, client: &ChessClient) {
        self.load(client).await;
    }

    /// Derive the display model, if the page has loaded.
    pub fn display_at(&self, now: DateTime<Utc>) -> Option<ProfileDisplay> {
        self.state
            .success()
            .map(|data| ProfileDisplay::derive(data, now))
    }

    pub fn display(&self) -> Option<ProfileDisplay> {
        self.display_at(Utc::now())
    }
}
