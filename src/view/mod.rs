//! Display-safe values derived from possibly partial upstream data.
//!
//! Nothing here fails: missing or malformed fields degrade to fixed fallbacks.

mod clock;
mod profile;
mod stats;
mod time;

pub use clock::*;
pub use profile::*;
pub use stats::*;
pub use time::*;
