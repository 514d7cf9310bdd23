//! Display formatting for the scalar metrics.
//!
//! Currency uses Indian Rupee notation with lakh/crore digit grouping
//! (`₹1,12,345.68`). Stored values are never modified; only the
//! rendered strings are rounded.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use simdash_domain::entities::SimulationMetrics;

const CURRENCY_SYMBOL: &str = "₹";

/// Display strings for one set of metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedMetrics {
    pub net_profit: String,
    pub final_value: String,
    pub roi: String,
    pub total_trades: String,
    pub sharpe_ratio: String,
    pub max_drawdown: String,
}

impl FormattedMetrics {
    /// Label/value pairs in display order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("Net Profit", &self.net_profit),
            ("Final Portfolio Value", &self.final_value),
            ("Return on Investment", &self.roi),
            ("Total Trades", &self.total_trades),
            ("Sharpe Ratio", &self.sharpe_ratio),
            ("Max Drawdown", &self.max_drawdown),
        ]
    }
}

/// Maps metrics to display strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsPresenter;

impl MetricsPresenter {
    #[must_use]
    pub fn present(metrics: &SimulationMetrics) -> FormattedMetrics {
        FormattedMetrics {
            net_profit: format_inr(metrics.net_profit),
            final_value: format_inr(metrics.final_value),
            roi: format_percent(metrics.roi),
            total_trades: metrics.total_trades.to_string(),
            sharpe_ratio: format_fixed(metrics.sharpe_ratio, 4),
            max_drawdown: format_percent(metrics.max_drawdown),
        }
    }
}

/// Formats with exactly `decimals` fractional digits, rounding half
/// away from zero.
#[must_use]
pub fn format_fixed(value: Decimal, decimals: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);
    rounded.to_string()
}

/// Two decimals followed by `%`.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_fixed(value, 2))
}

/// Rupee amount with two decimals and Indian digit grouping.
#[must_use]
pub fn format_inr(value: Decimal) -> String {
    let fixed = format_fixed(value.abs(), 2);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value.is_sign_negative() && fixed != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{sign}{CURRENCY_SYMBOL}{}.{fraction}", group_indian(whole))
}

/// Groups the last three digits, then every two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}
