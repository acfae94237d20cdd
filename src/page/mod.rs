//! Page-level load state for the listing and profile views.
//!
//! Every page moves `Idle -> Loading -> Success | Error`. A retry is a full
//! reload. Loads are split into [`begin_load`](ListingPage::begin_load) and
//! `finish_load` so a driver may run the fetch elsewhere; an outcome whose
//! ticket has been superseded is discarded.

mod listing;
mod profile;

pub use listing::*;
pub use profile::*;

use serde::Serialize;

use crate::error::ChessApiError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Success(T),
    Error(PageError),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            LoadState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PageError> {
        match self {
            LoadState::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// A failed load as the user sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageError {
    pub message: String,
    pub status: Option<u16>,
}

impl PageError {
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl From<&ChessApiError> for PageError {
    fn from(err: &ChessApiError) -> Self {
        Self {
            message: err.to_string(),
            status: err.status(),
        }
    }
}

/// Identifies one load of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

#[derive(Debug, Default)]
struct Generation(u64);

impl Generation {
    fn next(&mut self) -> LoadTicket {
        self.0 += 1;
        LoadTicket(self.0)
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.0
    }
}
