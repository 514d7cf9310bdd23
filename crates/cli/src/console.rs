//! Terminal rendition of the status surface.

use prettytable::{Table, row};
use simdash_dashboard::{StatusSurface, TriggerState};
use simdash_domain::enums::ChartMode;
use simdash_presentation::FormattedMetrics;

/// Prints status changes to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    last_status: String,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Metric cards as a two-column table.
pub fn metrics_table(metrics: &FormattedMetrics) -> Table {
    let mut table = Table::new();
    table.add_row(row![b->"Metric", b->"Value"]);
    for (label, value) in metrics.rows() {
        table.add_row(row![label, r->value]);
    }
    table
}

impl StatusSurface for ConsoleSurface {
    fn set_upload_status(&mut self, text: &str) {
        if text.is_empty() || text == self.last_status {
            return;
        }
        println!("📁 {text}");
        self.last_status = text.to_string();
    }

    fn set_drop_highlight(&mut self, _active: bool) {}

    fn set_trigger(&mut self, trigger: &TriggerState) {
        if !trigger.enabled {
            println!("🚀 {}", trigger.label);
        }
    }

    fn set_active_mode(&mut self, _mode: ChartMode) {}

    fn show_metrics(&mut self, metrics: &FormattedMetrics) {
        println!("\n📊 Simulation Results");
        metrics_table(metrics).printstd();
    }

    fn set_chart_notice(&mut self, notice: Option<&str>) {
        if let Some(notice) = notice {
            println!("⚠️  {notice}");
        }
    }

    fn alert(&mut self, message: &str) {
        eprintln!("❌ {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_table_has_header_and_six_rows() {
        let metrics = FormattedMetrics {
            net_profit: "₹1,234.50".to_string(),
            final_value: "₹11,234.50".to_string(),
            roi: "12.35%".to_string(),
            total_trades: "7".to_string(),
            sharpe_ratio: "1.2000".to_string(),
            max_drawdown: "3.10%".to_string(),
        };
        let table = metrics_table(&metrics);
        assert_eq!(table.len(), 7);
        assert!(table.to_string().contains("₹11,234.50"));
    }

    #[test]
    fn test_repeated_status_is_printed_once() {
        let mut surface = ConsoleSurface::new();
        surface.set_upload_status("Uploading...");
        surface.set_upload_status("");
        assert_eq!(surface.last_status, "Uploading...");
        surface.set_upload_status("abc.csv");
        assert_eq!(surface.last_status, "abc.csv");
    }
}
