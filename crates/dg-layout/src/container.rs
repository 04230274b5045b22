// ABOUTME: Host container abstraction the grid engine drives.
// ABOUTME: Defines child identities, placements, and separator elements.

use dg_core::{Axis, Color};
use serde::{Deserialize, Serialize};

use crate::track::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChildId(pub u64);

/// Cell a child occupies, in whichever coordinate space the caller is using
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
}

impl Placement {
    pub fn at(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            row_span: 1,
            column_span: 1,
        }
    }

    pub fn with_span(mut self, row_span: usize, column_span: usize) -> Self {
        self.row_span = row_span;
        self.column_span = column_span;
        self
    }

    pub fn index(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row,
            Axis::Column => self.column,
        }
    }

    pub fn span(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row_span,
            Axis::Column => self.column_span,
        }
    }
}

/// A user-owned element. The engine moves it but never creates or destroys it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub name: String,
    /// `None` for children that do not take part in grid placement
    pub placement: Option<Placement>,
}

impl Content {
    pub fn new(name: impl Into<String>, placement: Placement) -> Self {
        Self {
            name: name.into(),
            placement: Some(placement),
        }
    }

    pub fn unplaced(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placement: None,
        }
    }
}

/// Divider element synthesized on an odd physical track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separator {
    pub axis: Axis,
    /// Physical track index on `axis`
    pub track: usize,
    /// Physical tracks covered on the opposite axis
    pub cross_span: usize,
    pub thickness: u32,
    pub color: Color,
}

impl Separator {
    pub fn placement(&self) -> Placement {
        match self.axis {
            Axis::Row => Placement::at(self.track, 0).with_span(1, self.cross_span),
            Axis::Column => Placement::at(0, self.track).with_span(self.cross_span, 1),
        }
    }

    /// Tracks a drag on this separator resizes: the previous and next track only
    pub fn resized_tracks(&self) -> (usize, usize) {
        (self.track.saturating_sub(1), self.track.saturating_add(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Child {
    Content(Content),
    Separator(Separator),
}

impl Child {
    pub fn as_separator(&self) -> Option<&Separator> {
        match self {
            Child::Separator(separator) => Some(separator),
            Child::Content(_) => None,
        }
    }

    pub fn as_content(&self) -> Option<&Content> {
        match self {
            Child::Content(content) => Some(content),
            Child::Separator(_) => None,
        }
    }

    pub fn is_separator_on(&self, axis: Axis) -> bool {
        self.as_separator().is_some_and(|s| s.axis == axis)
    }
}

/// Grid-like surface owning row tracks, column tracks, and children
pub trait Container {
    fn tracks(&self, axis: Axis) -> &[Track];

    fn tracks_mut(&mut self, axis: Axis) -> &mut Vec<Track>;

    /// Identities of all children, in a stable order
    fn child_ids(&self) -> Vec<ChildId>;

    fn child(&self, id: ChildId) -> Option<&Child>;

    fn child_mut(&mut self, id: ChildId) -> Option<&mut Child>;

    fn add_child(&mut self, child: Child) -> ChildId;

    fn remove_child(&mut self, id: ChildId) -> Option<Child>;

    fn contains(&self, id: ChildId) -> bool {
        self.child(id).is_some()
    }

    /// Separator elements currently placed on `axis`
    fn separator_ids(&self, axis: Axis) -> Vec<ChildId> {
        self.child_ids()
            .into_iter()
            .filter(|id| self.child(*id).is_some_and(|c| c.is_separator_on(axis)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_placement_follows_axis() {
        let horizontal = Separator {
            axis: Axis::Row,
            track: 3,
            cross_span: 5,
            thickness: 2,
            color: Color::BLACK,
        };
        assert_eq!(horizontal.placement(), Placement::at(3, 0).with_span(1, 5));

        let vertical = Separator {
            axis: Axis::Column,
            ..horizontal
        };
        assert_eq!(vertical.placement(), Placement::at(0, 3).with_span(5, 1));
    }

    #[test]
    fn separator_resizes_neighbours_only() {
        let separator = Separator {
            axis: Axis::Column,
            track: 1,
            cross_span: 1,
            thickness: 2,
            color: Color::BLACK,
        };
        assert_eq!(separator.resized_tracks(), (0, 2));
    }
}
