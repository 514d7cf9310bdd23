//! Result of a remote simulation run.

use crate::enums::Indicator;
use crate::error::DomainError;
use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Open/high/low/close arrays aligned with the date axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcSeries {
    /// Open prices.
    pub open: Vec<f64>,
    /// High prices.
    pub high: Vec<f64>,
    /// Low prices.
    pub low: Vec<f64>,
    /// Close prices.
    pub close: Vec<f64>,
}

/// Indicator arrays; each entry may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    /// Simple moving average.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma: Option<Vec<f64>>,
    /// Exponential moving average.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ema: Option<Vec<f64>>,
}

/// Scalar performance metrics of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Final value minus initial balance.
    pub net_profit: Decimal,
    /// Final portfolio value.
    pub final_value: Decimal,
    /// Return on investment, in percent.
    pub roi: Decimal,
    /// Number of executed trades.
    pub total_trades: u64,
    /// Sharpe ratio of the portfolio returns.
    pub sharpe_ratio: Decimal,
    /// Maximum drawdown, in percent.
    pub max_drawdown: Decimal,
}

/// Complete output of one simulation.
///
/// Created wholesale from a service response and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// ISO-8601 dates of the time axis.
    pub dates: Vec<String>,
    /// Actual prices.
    pub actual_prices: Vec<f64>,
    /// Model predictions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_prices: Option<Vec<f64>>,
    /// Candle data, only in candle-capable responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ohlc: Option<OhlcSeries>,
    /// Indicator series.
    #[serde(default)]
    pub indicators: IndicatorSeries,
    /// Scalar metrics.
    #[serde(flatten)]
    pub metrics: SimulationMetrics,
}

impl SimulationResult {
    /// Number of points on the time axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Whether candle data is present.
    #[must_use]
    pub fn has_ohlc(&self) -> bool {
        self.ohlc.is_some()
    }

    /// Returns an indicator series if the service sent it.
    #[must_use]
    pub fn indicator(&self, indicator: Indicator) -> Option<&[f64]> {
        match indicator {
            Indicator::Sma => self.indicators.sma.as_deref(),
            Indicator::Ema => self.indicators.ema.as_deref(),
        }
    }

    /// Checks that every present series shares the length of `dates`.
    ///
    /// # Errors
    /// Returns the first series whose length differs.
    pub fn validate(&self) -> Result<(), DomainError> {
        let expected = self.dates.len();
        let mut series: Vec<(&'static str, usize)> =
            vec![("actual_prices", self.actual_prices.len())];

        if let Some(predicted) = &self.predicted_prices {
            series.push(("predicted_prices", predicted.len()));
        }
        if let Some(ohlc) = &self.ohlc {
            series.push(("ohlc.open", ohlc.open.len()));
            series.push(("ohlc.high", ohlc.high.len()));
            series.push(("ohlc.low", ohlc.low.len()));
            series.push(("ohlc.close", ohlc.close.len()));
        }
        if let Some(sma) = &self.indicators.sma {
            series.push(("indicators.sma", sma.len()));
        }
        if let Some(ema) = &self.indicators.ema {
            series.push(("indicators.ema", ema.len()));
        }

        match series.into_iter().find(|(_, len)| *len != expected) {
            Some((name, actual)) => Err(DomainError::SeriesLengthMismatch {
                series: name,
                expected,
                actual,
            }),
            None => Ok(()),
        }
    }

    /// First and last day covered, when both ends parse as dates.
    #[must_use]
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = parse_day(self.dates.first()?)?;
        let last = parse_day(self.dates.last()?)?;
        Some((first, last))
    }
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const FULL_RESPONSE: &str = r#"{
        "final_value": 112345.68,
        "net_profit": 12345.68,
        "roi": 5.1,
        "total_trades": 7,
        "sharpe_ratio": 1.2346,
        "max_drawdown": 3.2,
        "actual_prices": [100.0, 101.5, 99.25],
        "predicted_prices": [100.2, 101.0, 99.9],
        "dates": ["2024-01-02", "2024-01-03", "2024-01-04"],
        "ohlc": {
            "open": [99.0, 100.0, 101.0],
            "high": [101.0, 102.0, 101.5],
            "low": [98.5, 99.5, 98.0],
            "close": [100.0, 101.5, 99.25],
            "dates": ["2024-01-02", "2024-01-03", "2024-01-04"]
        },
        "indicators": {"sma": [100.0, 100.5, 100.25], "ema": [100.0, 100.7, 100.1]}
    }"#;

    #[test]
    fn test_deserialize_full_response() {
        let result: SimulationResult = serde_json::from_str(FULL_RESPONSE).unwrap();

        assert_eq!(result.len(), 3);
        assert!(result.has_ohlc());
        assert_eq!(result.metrics.total_trades, 7);
        assert_eq!(result.metrics.roi, dec!(5.1));
        assert_eq!(result.indicator(Indicator::Sma).map(<[f64]>::len), Some(3));
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_optional_series_may_be_absent() {
        let body = r#"{
            "final_value": 10000, "net_profit": 0, "roi": 0, "total_trades": 0,
            "sharpe_ratio": 0, "max_drawdown": 0,
            "actual_prices": [1.0], "dates": ["2024-01-02"]
        }"#;
        let result: SimulationResult = serde_json::from_str(body).unwrap();

        assert!(!result.has_ohlc());
        assert!(result.predicted_prices.is_none());
        assert!(result.indicator(Indicator::Ema).is_none());
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_mismatched_series() {
        let mut result: SimulationResult = serde_json::from_str(FULL_RESPONSE).unwrap();
        result.indicators.ema = Some(vec![1.0]);

        assert_eq!(
            result.validate(),
            Err(DomainError::SeriesLengthMismatch {
                series: "indicators.ema",
                expected: 3,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_period_accepts_plain_and_rfc3339_dates() {
        let mut result: SimulationResult = serde_json::from_str(FULL_RESPONSE).unwrap();
        let (first, last) = result.period().unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());

        result.dates = vec!["2024-03-01T00:00:00Z".to_string()];
        assert_eq!(
            result.period().map(|(first, _)| first),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );

        result.dates = vec!["not a date".to_string()];
        assert!(result.period().is_none());
    }
}
