// ABOUTME: Grid axis identifiers.
// ABOUTME: Rows host horizontal separators, columns host vertical ones.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Row, Axis::Column];

    /// The axis a separator on this axis spans across
    pub fn opposite(self) -> Axis {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }

    /// Orientation of the separators living on this axis
    pub fn separator_label(self) -> &'static str {
        match self {
            Axis::Row => "horizontal",
            Axis::Column => "vertical",
        }
    }
}
