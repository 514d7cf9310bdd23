//! Status surface: the non-chart parts of the page the controller
//! writes to.

use simdash_domain::enums::ChartMode;
use simdash_presentation::FormattedMetrics;

const IDLE_LABEL: &str = "Start Simulation";
const BUSY_LABEL: &str = "Running Simulation...";

/// Enabled state and label of the simulation trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerState {
    pub enabled: bool,
    pub label: &'static str,
}

impl TriggerState {
    #[must_use]
    pub fn idle() -> Self {
        Self {
            enabled: true,
            label: IDLE_LABEL,
        }
    }

    #[must_use]
    pub fn busy() -> Self {
        Self {
            enabled: false,
            label: BUSY_LABEL,
        }
    }
}

impl Default for TriggerState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Capability handles on the page's controls and display regions.
pub trait StatusSurface {
    /// Text next to the drop zone.
    fn set_upload_status(&mut self, text: &str);
    /// Drag-over highlight of the drop zone.
    fn set_drop_highlight(&mut self, active: bool);
    /// Simulation trigger state.
    fn set_trigger(&mut self, trigger: &TriggerState);
    /// Marks one mode button active and the other inactive.
    fn set_active_mode(&mut self, mode: ChartMode);
    /// Metric cards.
    fn show_metrics(&mut self, metrics: &FormattedMetrics);
    /// Warning shown with the chart; `None` clears it.
    fn set_chart_notice(&mut self, notice: Option<&str>);
    /// Blocking user-visible message.
    fn alert(&mut self, message: &str);
}

/// Surface that keeps everything in memory.
///
/// Used headless and in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySurface {
    pub upload_status: String,
    pub drop_highlight: bool,
    pub trigger: TriggerState,
    pub active_mode: ChartMode,
    pub metrics: Option<FormattedMetrics>,
    pub chart_notice: Option<String>,
    pub alerts: Vec<String>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent alert, if any.
    #[must_use]
    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl StatusSurface for MemorySurface {
    fn set_upload_status(&mut self, text: &str) {
        self.upload_status = text.to_string();
    }

    fn set_drop_highlight(&mut self, active: bool) {
        self.drop_highlight = active;
    }

    fn set_trigger(&mut self, trigger: &TriggerState) {
        self.trigger = trigger.clone();
    }

    fn set_active_mode(&mut self, mode: ChartMode) {
        self.active_mode = mode;
    }

    fn show_metrics(&mut self, metrics: &FormattedMetrics) {
        self.metrics = Some(metrics.clone());
    }

    fn set_chart_notice(&mut self, notice: Option<&str>) {
        self.chart_notice = notice.map(str::to_string);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
