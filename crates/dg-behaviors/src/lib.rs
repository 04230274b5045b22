// ABOUTME: Small behaviors a grid host binds alongside the layout engine.
// ABOUTME: Provides one-value converters, geodetic angle formatting, and auto-scroll.

pub mod autoscroll;
pub mod convert;
pub mod geo;

pub use autoscroll::{
    AutoScroll, AutoScrollRegistry, ItemsChange, ListId, ScrollCommand, ScrollDirection,
    ScrollMetrics,
};
pub use convert::Visibility;
pub use geo::{dms_to_radians, AngleParseError, GeoAngle, Hemisphere};
