use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context as _;

use crate::foundation::error::{LoopreelError, LoopreelResult};
use crate::frame::color::Color;
use crate::library::Library;
use crate::playback::PlaybackContext;
use crate::playback::time::SystemTimeSource;
use crate::render::backend::RenderSettings;

/// Runtime settings. Every field has a default, so an empty JSON object is valid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Length of one animation loop, in seconds.
    pub cycle_secs: f64,
    /// Redraw ticks per second while playing.
    pub tick_hz: u32,
    /// Key shown when the gallery opens.
    pub initial_key: String,
    pub render: RenderConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Pixels per canvas unit.
    pub scale: f64,
    /// Opaque background for PNG and video output.
    pub background: Color,
    pub fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cycle_secs: 6.0,
            tick_hz: 60,
            initial_key: crate::gallery::shell::DEFAULT_KEY.to_string(),
            render: RenderConfig::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background: Color::hex(0x1e1b18),
            fps: 30,
        }
    }
}

impl Settings {
    pub fn from_json_str(s: &str) -> LoopreelResult<Self> {
        serde_json::from_str(s).map_err(|e| LoopreelError::serde(format!("settings: {e}")))
    }

    /// Read settings from a JSON file. The result is not validated yet.
    pub fn load(path: &Path) -> LoopreelResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings '{}'", path.display()))?;
        let settings = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Defaults, or the contents of `path` when given.
    pub fn load_or_default(path: Option<&Path>) -> LoopreelResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn validate(&self, library: &Library) -> LoopreelResult<()> {
        if !self.cycle_secs.is_finite() || self.cycle_secs <= 0.0 {
            return Err(LoopreelError::validation("cycle_secs must be finite and > 0"));
        }
        Duration::try_from_secs_f64(self.cycle_secs)
            .map_err(|e| LoopreelError::validation(format!("cycle_secs: {e}")))?;
        if self.tick_hz == 0 {
            return Err(LoopreelError::validation("tick_hz must be > 0"));
        }
        if self.render.fps == 0 {
            return Err(LoopreelError::validation("render.fps must be > 0"));
        }
        self.render_settings().validate()?;
        library.catalog().lookup(&self.initial_key)?;
        Ok(())
    }

    pub fn cycle(&self) -> Duration {
        Duration::from_secs_f64(self.cycle_secs)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_hz.max(1)
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            scale: self.render.scale,
            clear: Some(self.render.background),
        }
    }

    /// Wall-clock playback context with the configured cycle and tick rate.
    pub fn playback_context(&self) -> LoopreelResult<PlaybackContext> {
        PlaybackContext::new(
            Rc::new(SystemTimeSource::new()),
            self.cycle(),
            self.tick_interval(),
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
