//! Pure presentation logic for the simulation dashboard.
//!
//! This crate turns an immutable simulation result into things a
//! renderer can display:
//! - Ordered chart traces with their visual encoding
//! - The fixed layout and display-config descriptors
//! - Display strings for the scalar metrics
//!
//! Nothing here performs I/O or holds state between calls.

/// Prelude module for convenient imports.
pub mod prelude;

/// Chart composition.
pub mod chart;
/// Metrics formatting.
pub mod metrics;

pub use chart::{ChartComposer, ComposedChart, ComposerOptions, MissingCandlePolicy};
pub use metrics::{FormattedMetrics, MetricsPresenter};
