//! Replays a Catan game log and tracks, per dice sum, how often it has come
//! up and whether the robber was sitting on it at the time.

pub mod dice_tracker;
pub mod error;
pub mod event_parser;
pub mod log_source;
pub mod logging;
pub mod util;
