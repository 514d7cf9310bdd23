//! Chart composition.
//!
//! Builds the ordered trace list for the renderer:
//! - One base trace (line or candlestick)
//! - Prediction, SMA and EMA overlays, in that order

mod composer;
pub mod layout;
pub mod trace;

pub use composer::*;
