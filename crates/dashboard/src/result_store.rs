//! Single-slot holder for the latest simulation result.

use simdash_domain::DomainError;
use simdash_domain::entities::SimulationResult;
use tracing::info;

/// Holds the most recent result. Replaced wholesale, never patched.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    current: Option<SimulationResult>,
    revision: u64,
}

impl ResultStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<&SimulationResult> {
        self.current.as_ref()
    }

    /// Number of replacements so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the stored result.
    ///
    /// # Errors
    /// Rejects a result whose series do not line up; the previous
    /// result stays in place.
    pub fn replace(&mut self, result: SimulationResult) -> Result<u64, DomainError> {
        result.validate()?;
        self.revision += 1;
        info!(revision = self.revision, points = result.len(), "Result stored");
        self.current = Some(result);
        Ok(self.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use simdash_domain::entities::{IndicatorSeries, SimulationMetrics};

    fn result(points: usize) -> SimulationResult {
        SimulationResult {
            dates: (0..points).map(|i| format!("2024-01-{:02}", i + 1)).collect(),
            actual_prices: vec![1.0; points],
            predicted_prices: None,
            ohlc: None,
            indicators: IndicatorSeries::default(),
            metrics: SimulationMetrics {
                net_profit: Decimal::ONE,
                final_value: Decimal::ONE,
                roi: Decimal::ONE,
                total_trades: points as u64,
                sharpe_ratio: Decimal::ONE,
                max_drawdown: Decimal::ONE,
            },
        }
    }

    #[test]
    fn test_replace_swaps_whole_result() {
        let mut store = ResultStore::new();
        assert!(store.current().is_none());

        store.replace(result(2)).unwrap();
        store.replace(result(3)).unwrap();

        assert_eq!(store.revision(), 2);
        assert_eq!(store.current().unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_result_leaves_store_unchanged() {
        let mut store = ResultStore::new();
        store.replace(result(2)).unwrap();

        let mut ragged = result(3);
        ragged.actual_prices.pop();

        assert!(store.replace(ragged).is_err());
        assert_eq!(store.revision(), 1);
        assert_eq!(store.current().unwrap().len(), 2);
    }
}
