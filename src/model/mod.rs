mod lenient;
mod player;
mod stats;
mod titled;

pub use player::*;
pub use stats::*;
pub use titled::*;
