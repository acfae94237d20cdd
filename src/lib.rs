//! Browse chess titled players and their profiles from the chess.com public API.
//!
//! [`ChessClient`] fetches with retry on rate limiting and transport failure,
//! [`view`] turns possibly partial payloads into display-safe values, [`page`]
//! holds the listing and profile state machines, and [`render`] draws them as
//! plain text.

pub use client::ChessClient;
pub use config::{ClientConfig, RetryPolicy, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{ChessApiError, Result};
pub use model::*;

mod chess_api;
mod client;
mod config;
mod error;
pub mod model;
pub mod page;
pub mod render;
pub mod view;

#[cfg(test)]
mod test_support;
