use tracing::{debug, instrument};

use super::{Generation, LoadState, LoadTicket, PageError};
use crate::client::ChessClient;
use crate::error::Result;
use crate::model::{GrandmasterList, Title};

/// Entries revealed initially and per "load more".
pub const PAGE_SIZE: usize = 20;

/// The paginated list of titled players. Pagination is a client-side slice
/// of the full list fetched once per load.
#[derive(Debug)]
pub struct ListingPage {
    title: Title,
    state: LoadState<GrandmasterList>,
    display_count: usize,
    generation: Generation,
}

impl ListingPage {
    pub fn new(title: Title) -> Self {
        Self {
            title,
            state: LoadState::Idle,
            display_count: PAGE_SIZE,
            generation: Generation::default(),
        }
    }

    pub fn title(&self) -> Title {
        self.title
    }

    pub fn state(&self) -> &LoadState<GrandmasterList> {
        &self.state
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.state = LoadState::Loading;
        self.display_count = PAGE_SIZE;
        self.generation.next()
    }

    /// Apply a fetch outcome. Returns `false` if `ticket` is stale.
    pub fn finish_load(&mut self, ticket: LoadTicket, outcome: Result<GrandmasterList>) -> bool {
        if !self.generation.is_current(ticket) {
            debug!(?ticket, "discarding stale listing load");
            return false;
        }
        self.state = match outcome {
            Ok(players) => LoadState::Success(players),
            Err(err) => LoadState::Error(PageError::from(&err)),
        };
        true
    }

    #[instrument(skip(self, client), fields(title = %self.title))]
    pub async fn load(&mut self, client: &ChessClient) {
        let ticket = self.begin_load();
        let outcome = client.get_titled_players(self.title).await;
        self.finish_load(ticket, outcome);
    }

    /// Reload from scratch.
    pub async fn retry(&mut self, client: &ChessClient) {
        self.load(client).await;
    }

    /// Reveal the next [`PAGE_SIZE`] entries, if there are any.
    pub fn load_more(&mut self) {
        if self.has_more() {
            self.display_count += PAGE_SIZE;
        }
    }

    pub fn total(&self) -> usize {
        self.state.success().map_or(0, Vec::len)
    }

    /// The entries currently revealed.
    pub fn visible(&self) -> &[String] {
        match self.state.success() {
            Some(players) => &players[..self.display_count.min(players.len())],
            None => &[],
        }
    }

    pub fn remaining(&self) -> usize {
        self.total().saturating_sub(self.display_count)
    }

    pub fn has_more(&self) -> bool {
        self.remaining() > 0
    }
}

impl Default for ListingPage {
    fn default() -> Self {
        Self::new(Title::GM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockApi, Reply};

    fn players(count: usize) -> GrandmasterList {
        (0..count).map(|i| format!("gm{i}")).collect()
    }

    fn loaded(count: usize) -> ListingPage {
        let mut page = ListingPage::default();
        let ticket = page.begin_load();
        assert!(page.finish_load(ticket, Ok(players(count))));
        page
    }

    #[test]
    fn test_starts_idle() {
        let page = ListingPage::default();
        assert_eq!(page.state(), &LoadState::Idle);
        assert!(page.visible().is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn test_small_list_has_no_pagination() {
        let page = loaded(2);
        assert_eq!(page.visible().len(), 2);
        assert_eq!(page.remaining(), 0);
        assert!(!page.has_more());
    }

    #[test]
    fn test_load_more_reveals_twenty_at_a_time() {
        let mut page = loaded(45);
        assert_eq!(page.visible().len(), 20);
        assert_eq!(page.remaining(), 25);

        page.load_more();
        assert_eq!(page.visible().len(), 40);
        assert_eq!(page.visible()[39], "gm39");
        assert_eq!(page.remaining(), 5);

        page.load_more();
        assert_eq!(page.visible().len(), 45);
        assert!(!page.has_more());

        page.load_more();
        assert_eq!(page.visible().len(), 45);
    }

    #[test]
    fn test_exactly_one_page() {
        let page = loaded(20);
        assert_eq!(page.visible().len(), 20);
        assert!(!page.has_more());
    }

    #[test]
    fn test_reload_resets_pagination() {
        let mut page = loaded(45);
        page.load_more();
        let ticket = page.begin_load();
        assert!(page.state().is_loading());
        page.finish_load(ticket, Ok(players(45)));
        assert_eq!(page.visible().len(), 20);
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut page = ListingPage::default();
        let first = page.begin_load();
        let second = page.begin_load();

        assert!(!page.finish_load(first, Ok(players(3))));
        assert!(page.state().is_loading());

        assert!(page.finish_load(second, Ok(players(5))));
        assert_eq!(page.total(), 5);
    }

    #[tokio::test]
    async fn test_load_from_api() {
        let api = MockApi::start().await;
        api.script(
            "/pub/titled/GM",
            vec![Reply::json(r#"{"players":["hikaru","magnuscarlsen"]}"#)],
        );
        let client = ChessClient::with_config(api.config());

        let mut page = ListingPage::default();
        page.load(&client).await;

        assert_eq!(page.visible(), ["hikaru", "magnuscarlsen"]);
        assert!(!page.has_more());
        assert_eq!(api.hits("/pub/titled/GM"), 1);
    }

    #[tokio::test]
    async fn test_error_then_retry() {
        let api = MockApi::start().await;
        api.script(
            "/pub/titled/GM",
            vec![
                Reply::status(502),
                Reply::json(r#"{"players":["hikaru"]}"#),
            ],
        );
        let client = ChessClient::with_config(api.config());

        let mut page = ListingPage::default();
        page.load(&client).await;
        let err = page.state().error().unwrap();
        assert_eq!(err.message, "HTTP 502: Bad Gateway");
        assert_eq!(err.status, Some(502));

        page.retry(&client).await;
        assert_eq!(page.visible(), ["hikaru"]);
        assert_eq!(api.hits("/pub/titled/GM"), 2);
    }
}
