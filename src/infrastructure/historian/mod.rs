//! Historian client implementations

mod disconnected;
mod replay;

pub use disconnected::DisconnectedHistorian;
pub use replay::ReplayHistorian;
