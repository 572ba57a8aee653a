pub mod consensus;
pub mod engine;

pub use consensus::consensus_signal;
pub use engine::{SignalEngine, MIN_CANDLES};
