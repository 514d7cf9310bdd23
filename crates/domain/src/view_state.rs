//! Chart view state.

use crate::enums::{ChartMode, Overlay};
use serde::{Deserialize, Serialize};

/// Independent on/off flags for each overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayFlags {
    pub prediction: bool,
    pub sma: bool,
    pub ema: bool,
}

impl OverlayFlags {
    /// Every overlay enabled.
    #[must_use]
    pub fn all() -> Self {
        Self {
            prediction: true,
            sma: true,
            ema: true,
        }
    }

    /// Every overlay disabled.
    #[must_use]
    pub fn none() -> Self {
        Self {
            prediction: false,
            sma: false,
            ema: false,
        }
    }

    #[must_use]
    pub fn get(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Prediction => self.prediction,
            Overlay::Sma => self.sma,
            Overlay::Ema => self.ema,
        }
    }

    pub fn set(&mut self, overlay: Overlay, enabled: bool) {
        match overlay {
            Overlay::Prediction => self.prediction = enabled,
            Overlay::Sma => self.sma = enabled,
            Overlay::Ema => self.ema = enabled,
        }
    }
}

impl Default for OverlayFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// What the chart should show, as chosen by the user.
///
/// Exactly one mode is active at any time; it survives result
/// replacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    mode: ChartMode,
    overlays: OverlayFlags,
}

impl ViewState {
    /// Creates the startup state from the controls' defaults.
    #[must_use]
    pub fn with_defaults(mode: ChartMode, overlays: OverlayFlags) -> Self {
        Self { mode, overlays }
    }

    #[must_use]
    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    /// Whether a mode button should be shown as active.
    #[must_use]
    pub fn is_mode_active(&self, mode: ChartMode) -> bool {
        self.mode == mode
    }

    #[must_use]
    pub fn is_enabled(&self, overlay: Overlay) -> bool {
        self.overlays.get(overlay)
    }

    /// Activates a mode, implicitly deactivating the other one.
    ///
    /// Returns `true` if the mode changed.
    pub fn select_mode(&mut self, mode: ChartMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    /// Sets one overlay flag. Returns `true` if the flag changed.
    pub fn set_overlay(&mut self, overlay: Overlay, enabled: bool) -> bool {
        let changed = self.overlays.get(overlay) != enabled;
        self.overlays.set(overlay, enabled);
        changed
    }
}
