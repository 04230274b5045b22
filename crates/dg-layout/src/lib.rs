// ABOUTME: Dynamic grid layout engine.
// ABOUTME: Derives physical tracks and separators from a logical row/column configuration.

pub mod container;
pub mod engine;
pub mod outcome;
pub mod property;
pub mod rebase;
pub mod separator;
pub mod sizing;
pub mod snapshot;
pub mod span;
pub mod surface;
pub mod track;

#[cfg(test)]
mod properties;

pub use container::{Child, ChildId, Container, Content, Placement, Separator};
pub use engine::DynamicGrid;
pub use outcome::{Outcome, Rejection};
pub use property::{Property, Value, ValueKind};
pub use rebase::ChildRecords;
pub use snapshot::{ChildView, LayoutSnapshot};
pub use surface::GridSurface;
pub use track::{SizeMode, Track};
