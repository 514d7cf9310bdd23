//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use simdash_presentation::prelude::*;
//! ```

// Composer
pub use crate::chart::{
    ChartComposer, ChartNotice, ComposedChart, ComposerOptions, MissingCandlePolicy,
};

// Descriptors
pub use crate::chart::layout::{DisplayConfig, Layout, chart_layout, display_config};
pub use crate::chart::trace::{CandlestickTrace, LineStyle, ScatterTrace, Trace, TraceRole};

// Metrics
pub use crate::metrics::{
    FormattedMetrics, MetricsPresenter, format_fixed, format_inr, format_percent,
};
