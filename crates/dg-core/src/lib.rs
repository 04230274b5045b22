// ABOUTME: Shared types and configuration for dyngrid.
// ABOUTME: Defines axes, colors, star selections, and grid config file handling.

pub mod axis;
pub mod color;
pub mod config;
pub mod star;

pub use axis::Axis;
pub use color::{Color, ColorParseError};
pub use config::{AxisSettings, ConfigError, GridSettings, SeparatorStyle};
pub use star::StarSelection;
