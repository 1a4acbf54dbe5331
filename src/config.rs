use serde::Deserialize;
use std::time::Duration;

/// Environment variable holding an inline JSON object of overrides.
pub const CONFIG_ENV: &str = "ZXPAINT_CONFIG";

pub const MAX_PIXEL_SIZE: u32 = 200;

/// What a click on a palette swatch writes into the selected colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwatchPick {
    /// Random ink, paper and bright, regardless of the swatch clicked.
    Randomize,
    /// The swatch hue goes to the active channel, its row sets bright.
    Exact,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub pixel_size: u32,
    pub block_size: u32,
    pub idle_delay_ms: u64,
    pub swatch_pick: SwatchPick,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_width: 1024,
            window_height: 768,
            pixel_size: 3,
            block_size: 32,
            idle_delay_ms: 10,
            swatch_pick: SwatchPick::Randomize,
        }
    }
}

impl EditorConfig {
    /// Reads overrides from `ZXPAINT_CONFIG`, falling back to defaults.
    pub fn from_env() -> Self {
        match std::env::var(CONFIG_ENV) {
            Ok(raw) => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("Ignoring {}: {}", CONFIG_ENV, err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.clamped())
    }

    fn clamped(mut self) -> Self {
        self.pixel_size = self.pixel_size.clamp(1, MAX_PIXEL_SIZE);
        self.block_size = self.block_size.clamp(8, 48);
        self.window_width = self.window_width.max(200);
        self.window_height = self.window_height.max(200);
        self
    }

    pub fn idle_delay(&self) -> Duration {
        Duration::from_millis(self.idle_delay_ms)
    }
}
