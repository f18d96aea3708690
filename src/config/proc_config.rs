use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::canvas::mapping::{DEFAULT_SIZE, Interval};
use crate::foundation::core::{Canvas, Color};
use crate::foundation::error::{ProcError, ProcResult};
use crate::proc::processor::{DEFAULT_FRAME_PERIOD, DEFAULT_SEED, Proc};

/// Environment variable overriding [`ProcConfig::frame_period_ms`].
pub const FRAME_PERIOD_ENV: &str = "PROC2D_FRAME_PERIOD_MS";

/// Logical extents of a physical canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogicalExtents {
    /// Horizontal range.
    pub x: Interval,
    /// Vertical range.
    pub y: Interval,
}

/// Startup configuration of a [`Proc`], loadable from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Logical range; pixels when absent.
    pub logical: Option<LogicalExtents>,
    /// Interval between frame ticks.
    pub frame_period_ms: u64,
    /// Initial background color.
    pub background: Option<Color>,
    /// Initial random seed.
    pub seed: Option<u64>,
}

impl Default for ProcConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            logical: None,
            frame_period_ms: DEFAULT_FRAME_PERIOD.as_millis() as u64,
            background: None,
            seed: None,
        }
    }
}

impl ProcConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(s: &str) -> ProcResult<Self> {
        serde_json::from_str(s).map_err(|e| ProcError::config(format!("parse config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ProcResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ProcError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            ProcError::config(format!("parse config JSON '{}': {e}", path.display()))
        })
    }

    /// Apply `PROC2D_FRAME_PERIOD_MS` when it holds a positive integer.
    pub fn with_env_overrides(self) -> Self {
        self.with_frame_period_override(std::env::var(FRAME_PERIOD_ENV).ok().as_deref())
    }

    fn with_frame_period_override(mut self, raw: Option<&str>) -> Self {
        if let Some(ms) = raw
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&n| n > 0)
        {
            self.frame_period_ms = ms;
        }
        self
    }

    /// Check canvas size, logical intervals and frame period.
    pub fn validate(&self) -> ProcResult<()> {
        Canvas::new(self.width, self.height)?;
        if let Some(l) = &self.logical {
            l.x.validate()?;
            l.y.validate()?;
        }
        if self.frame_period_ms == 0 {
            return Err(ProcError::config("frame_period_ms must be > 0"));
        }
        Ok(())
    }

    /// Tick interval.
    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(self.frame_period_ms)
    }
}

impl Proc {
    /// A processor configured by a validated `cfg`.
    pub fn from_config(cfg: &ProcConfig) -> ProcResult<Self> {
        cfg.validate()?;
        let mut p = Proc::new();
        match &cfg.logical {
            Some(l) => {
                p.physical_canvas(cfg.width, cfg.height, l.x.min, l.x.max, l.y.min, l.y.max)?
            }
            None => p.canvas(cfg.width, cfg.height)?,
        }
        if let Some(bg) = cfg.background {
            p.background(bg);
        }
        p.random_seed(cfg.seed.unwrap_or(DEFAULT_SEED));
        p.frame_rate(cfg.frame_period());
        Ok(p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/proc_config.rs"]
mod tests;
