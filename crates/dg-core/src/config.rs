// ABOUTME: Grid configuration handling.
// ABOUTME: Loads and saves dynamic grid settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Axis, Color, StarSelection};

/// Per-axis track and separator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSettings {
    /// Number of logical content tracks
    pub count: usize,

    /// Interleave separator tracks between content tracks
    pub separators: bool,

    /// Content tracks that get proportional (Star) sizing
    pub star: StarSelection,

    /// Number of logical tracks on the opposite axis a separator crosses.
    /// `None` spans the whole opposite axis.
    pub separator_span: Option<u32>,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            count: 1,
            separators: true,
            star: StarSelection::None,
            separator_span: None,
        }
    }
}

/// Visual properties shared by every separator element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparatorStyle {
    /// Height of horizontal separators, width of vertical ones
    pub thickness: u32,
    pub color: Color,
}

impl SeparatorStyle {
    pub const DEFAULT_THICKNESS: u32 = 2;
}

impl Default for SeparatorStyle {
    fn default() -> Self {
        Self {
            thickness: Self::DEFAULT_THICKNESS,
            color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Row axis (hosts horizontal separators)
    pub rows: AxisSettings,

    /// Column axis (hosts vertical separators)
    pub columns: AxisSettings,

    /// Separator paint and thickness
    pub separator: SeparatorStyle,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl GridSettings {
    pub fn axis(&self, axis: Axis) -> &AxisSettings {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.columns,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisSettings {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.columns,
        }
    }

    /// Clamp values a config file can express but the engine never accepts
    pub fn sanitized(mut self) -> Self {
        for axis in Axis::ALL {
            let settings = self.axis_mut(axis);
            if settings.separator_span == Some(0) {
                settings.separator_span = Some(1);
            }
        }
        if self.separator.thickness == 0 {
            self.separator.thickness = SeparatorStyle::DEFAULT_THICKNESS;
        }
        self
    }

    /// Get the default config file path (~/.config/dyngrid/grid.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dyngrid").join("grid.toml"))
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        Ok(settings.sanitized())
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
