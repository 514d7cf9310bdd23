//! Fixed layout and display configuration.
//!
//! These descriptors are identical for every render and carry no data.

use serde::Serialize;

const GRID_COLOR: &str = "rgba(255,255,255,0.1)";
const FONT_FAMILY: &str = "Outfit, sans-serif";
const ACCENT: &str = "#00f2ff";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverLabel {
    pub bgcolor: &'static str,
    pub bordercolor: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub visible: bool,
}

/// Axis settings; unset fields are left to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeslider: Option<RangeSlider>,
    pub gridcolor: &'static str,
    pub zerolinecolor: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showspikes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spikethickness: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spikedash: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spikecolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spikemode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixedrange: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: &'static str,
    pub y: f64,
    pub x: f64,
    pub xanchor: &'static str,
    pub font: Font,
}

/// Chart layout descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
    pub font: Font,
    pub hoverlabel: HoverLabel,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub margin: Margin,
    pub showlegend: bool,
    pub legend: Legend,
    pub dragmode: &'static str,
    pub hovermode: &'static str,
}

/// Interaction options for the renderer toolbar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    pub responsive: bool,
    pub display_mode_bar: bool,
    pub mode_bar_buttons_to_remove: Vec<&'static str>,
    pub displaylogo: bool,
    pub scroll_zoom: bool,
}

/// Dark, transparent layout with a date x axis, dotted crosshair spikes
/// and a horizontal legend above the plot.
#[must_use]
pub fn chart_layout() -> Layout {
    Layout {
        plot_bgcolor: "rgba(0,0,0,0)",
        paper_bgcolor: "rgba(0,0,0,0)",
        font: Font {
            color: "#a0a0a0",
            family: Some(FONT_FAMILY),
        },
        hoverlabel: HoverLabel {
            bgcolor: "#0f0c29",
            bordercolor: ACCENT,
            font: Font {
                color: "#ffffff",
                family: Some(FONT_FAMILY),
            },
        },
        xaxis: Axis {
            axis_type: Some("date"),
            rangeslider: Some(RangeSlider { visible: false }),
            gridcolor: GRID_COLOR,
            zerolinecolor: GRID_COLOR,
            showspikes: Some(true),
            spikethickness: Some(1),
            spikedash: Some("dot"),
            spikecolor: Some(ACCENT),
            spikemode: Some("across"),
            ..Axis::default()
        },
        yaxis: Axis {
            gridcolor: GRID_COLOR,
            zerolinecolor: GRID_COLOR,
            fixedrange: Some(false),
            ..Axis::default()
        },
        margin: Margin {
            l: 50,
            r: 20,
            t: 40,
            b: 40,
        },
        showlegend: true,
        legend: Legend {
            orientation: "h",
            y: 1.1,
            x: 0.5,
            xanchor: "center",
            font: Font {
                color: "#fff",
                family: None,
            },
        },
        dragmode: "zoom",
        hovermode: "x unified",
    }
}

/// Responsive chart with scroll zoom, no logo and no lasso/box select.
#[must_use]
pub fn display_config() -> DisplayConfig {
    DisplayConfig {
        responsive: true,
        display_mode_bar: true,
        mode_bar_buttons_to_remove: vec!["lasso2d", "select2d"],
        displaylogo: false,
        scroll_zoom: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_serializes_renderer_keys() {
        let layout = serde_json::to_value(chart_layout()).unwrap();

        assert_eq!(layout["xaxis"]["type"], "date");
        assert_eq!(layout["xaxis"]["rangeslider"]["visible"], false);
        assert_eq!(layout["xaxis"]["spikemode"], "across");
        assert_eq!(layout["hovermode"], "x unified");
        assert_eq!(layout["legend"]["orientation"], "h");
        assert!(layout["yaxis"].get("type").is_none());
        assert!(layout["legend"]["font"].get("family").is_none());
    }

    #[test]
    fn test_display_config_uses_camel_case() {
        let config = serde_json::to_value(display_config()).unwrap();

        assert_eq!(config["scrollZoom"], true);
        assert_eq!(config["displaylogo"], false);
        assert_eq!(
            config["modeBarButtonsToRemove"],
            serde_json::json!(["lasso2d", "select2d"])
        );
    }

    #[test]
    fn test_descriptors_are_constant() {
        assert_eq!(chart_layout(), chart_layout());
        assert_eq!(display_config(), display_config());
    }
}
