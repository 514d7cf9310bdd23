//! Renderers for composed charts.

use serde_json::Value;
use simdash_presentation::ComposedChart;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render failures.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Output could not be written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Chart could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Draws a composed chart onto a target surface.
pub trait Renderer {
    /// Replaces whatever was drawn on `target` with `chart`.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be drawn.
    fn render(&mut self, target: &str, chart: &ComposedChart<'_>) -> Result<(), RenderError>;
}

/// One recorded render call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub target: String,
    /// Figure as `{data, layout, config}`.
    pub figure: Value,
}

/// Records every render call.
#[derive(Debug, Clone, Default)]
pub struct MemoryRenderer {
    frames: Vec<RenderedFrame>,
}

impl MemoryRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames(&self) -> &[RenderedFrame] {
        &self.frames
    }

    #[must_use]
    pub fn last(&self) -> Option<&RenderedFrame> {
        self.frames.last()
    }

    /// Trace names of the last frame, in draw order.
    #[must_use]
    pub fn last_trace_names(&self) -> Vec<String> {
        self.last()
            .and_then(|frame| frame.figure["data"].as_array())
            .map(|traces| {
                traces
                    .iter()
                    .filter_map(|t| t["name"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Renderer for MemoryRenderer {
    fn render(&mut self, target: &str, chart: &ComposedChart<'_>) -> Result<(), RenderError> {
        self.frames.push(RenderedFrame {
            target: target.to_string(),
            figure: serde_json::to_value(chart)?,
        });
        Ok(())
    }
}

/// Writes each render as a standalone HTML page.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    path: PathBuf,
    title: String,
}

impl HtmlRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            title: "Simulation Dashboard".to_string(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builds the page for a chart.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be serialized.
    pub fn page(&self, target: &str, chart: &ComposedChart<'_>) -> Result<String, RenderError> {
        let target_json = script_json(&target)?;
        let data = script_json(&chart.traces)?;
        let layout = script_json(&chart.layout)?;
        let config = script_json(&chart.config)?;
        let notice = chart
            .notices
            .first()
            .map(|n| format!("<p class=\"notice\">{}</p>\n", n.message()))
            .unwrap_or_default();

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{PLOTLY_CDN}"></script>
<style>body {{ background: #0f0c29; color: #a0a0a0; font-family: Outfit, sans-serif; }}</style>
</head>
<body>
{notice}<div id="{id}" style="width:100%;height:90vh;"></div>
<script>
Plotly.newPlot({target_json}, {data}, {layout}, {config});
</script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            id = escape_html(target),
        ))
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, target: &str, chart: &ComposedChart<'_>) -> Result<(), RenderError> {
        let page = self.page(target, chart)?;
        std::fs::write(&self.path, page)?;
        info!(path = %self.path.display(), traces = chart.traces.len(), "Chart page written");
        Ok(())
    }
}

/// JSON safe to embed inside a `<script>` element.
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    let json = serde_json::to_string(value)?;
    debug!(bytes = json.len(), "Serialized chart fragment");
    Ok(json.replace("</", "<\\/"))
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
