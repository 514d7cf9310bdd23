use serde::{Deserialize, Serialize};

/// Base chart representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Actual price drawn as a line.
    #[default]
    Line,
    /// OHLC candlesticks.
    Candle,
}

impl ChartMode {
    /// Returns the mode name used by the controls.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Candle => "candle",
        }
    }
}

/// Optional series drawn on top of the base trace.
///
/// Declaration order is the stacking and legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overlay {
    /// Model prediction.
    Prediction,
    /// Simple moving average.
    Sma,
    /// Exponential moving average.
    Ema,
}

impl Overlay {
    /// All overlays in composition order.
    pub const ALL: [Overlay; 3] = [Overlay::Prediction, Overlay::Sma, Overlay::Ema];

    /// Returns the overlay name used by the controls.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prediction => "prediction",
            Self::Sma => "sma",
            Self::Ema => "ema",
        }
    }
}

/// Indicator series the remote service may attach to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    /// Simple moving average.
    Sma,
    /// Exponential moving average.
    Ema,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_mode_names() {
        assert_eq!(ChartMode::Line.as_str(), "line");
        assert_eq!(ChartMode::Candle.as_str(), "candle");
        assert_eq!(ChartMode::default(), ChartMode::Line);
    }

    #[test]
    fn test_overlay_order() {
        let mut shuffled = vec![Overlay::Ema, Overlay::Prediction, Overlay::Sma];
        shuffled.sort();
        assert_eq!(shuffled, Overlay::ALL.to_vec());
    }
}
