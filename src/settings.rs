use crate::overlay::{DisplayOptions, WindowPosition, WindowSize};
use serde::{Deserialize, Serialize};

/// Mount-time configuration for the overlay. Every field is optional in the
/// settings file; missing fields fall back to the defaults below.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Smallest size the panel can be resized to. Defaults to 500x500.
    #[serde(default = "default_minimum_size")]
    pub minimum_size: WindowSize,
    /// Size at mount. Raised to `minimum_size` if smaller.
    #[serde(default = "default_initial_size")]
    pub initial_size: WindowSize,
    #[serde(default = "default_initial_position")]
    pub initial_position: WindowPosition,
    /// Display options the panel starts with.
    #[serde(default)]
    pub display: DisplayOptions,
    /// When enabled the demo host initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file the demo host writes its log to.
    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_minimum_size() -> WindowSize {
    WindowSize::new(500.0, 500.0)
}

fn default_initial_size() -> WindowSize {
    WindowSize::new(600.0, 600.0)
}

fn default_initial_position() -> WindowPosition {
    WindowPosition::new(20.0, 20.0)
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            minimum_size: default_minimum_size(),
            initial_size: default_initial_size(),
            initial_position: default_initial_position(),
            display: DisplayOptions::default(),
            debug_logging: false,
            log_file: None,
        }
    }
}

impl OverlayConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn with_minimum_size(mut self, size: WindowSize) -> Self {
        self.minimum_size = size;
        self
    }

    pub fn with_initial_size(mut self, size: WindowSize) -> Self {
        self.initial_size = size;
        self
    }

    pub fn with_initial_position(mut self, position: WindowPosition) -> Self {
        self.initial_position = position;
        self
    }
}
