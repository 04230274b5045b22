// ABOUTME: Child position rebaser.
// ABOUTME: Caches each child's logical cell and maps it to physical tracks.

use std::collections::HashMap;

use dg_core::Axis;

use crate::container::{Child, ChildId, Container, Placement};
use crate::track::{physical_index, physical_span};

/// Original logical placements of content children, scoped to one container
#[derive(Debug, Default)]
pub struct ChildRecords {
    records: HashMap<ChildId, Placement>,
}

impl ChildRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ChildId) -> Option<Placement> {
        self.records.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the logical placement of a child
    pub fn set(&mut self, id: ChildId, logical: Placement) {
        self.records.insert(id, logical);
    }

    pub fn forget(&mut self, id: ChildId) -> Option<Placement> {
        self.records.remove(&id)
    }

    /// Drop records of children that left the container
    pub fn evict_missing<C: Container + ?Sized>(&mut self, container: &C) -> usize {
        let before = self.records.len();
        self.records.retain(|id, _| container.contains(*id));
        before - self.records.len()
    }
}

/// Physical placement of a logical cell given each axis's separator flag
pub fn to_physical(logical: Placement, row_separators: bool, column_separators: bool) -> Placement {
    let separators = |axis| match axis {
        Axis::Row => row_separators,
        Axis::Column => column_separators,
    };
    Placement {
        row: physical_index(logical.row, separators(Axis::Row)),
        column: physical_index(logical.column, separators(Axis::Column)),
        row_span: physical_span(logical.row_span, separators(Axis::Row)),
        column_span: physical_span(logical.column_span, separators(Axis::Column)),
    }
}

/// Record unseen children and move every placed content child to its physical cell.
///
/// A child's first observed placement is taken as logical and never
/// overwritten here. Returns the number of children repositioned.
pub fn reposition_children<C: Container + ?Sized>(
    container: &mut C,
    records: &mut ChildRecords,
    row_separators: bool,
    column_separators: bool,
) -> usize {
    let evicted = records.evict_missing(container);
    if evicted > 0 {
        tracing::debug!("Evicted {} stale child records", evicted);
    }

    let mut moved = 0;
    for id in container.child_ids() {
        let Some(Child::Content(content)) = container.child_mut(id) else {
            continue;
        };
        let Some(placement) = content.placement.as_mut() else {
            continue;
        };
        let logical = *records.records.entry(id).or_insert(*placement);
        *placement = to_physical(logical, row_separators, column_separators);
        tracing::trace!("{} -> {:?}", content.name, placement);
        moved += 1;
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Content;
    use crate::surface::GridSurface;

    fn placement_of(surface: &GridSurface, id: ChildId) -> Option<Placement> {
        surface.content(id).and_then(|c| c.placement)
    }

    #[test]
    fn doubles_only_axes_with_separators() {
        let mut surface = GridSurface::new();
        let mut records = ChildRecords::new();
        let id = surface.add_content(Content::new("a", Placement::at(1, 0)));

        reposition_children(&mut surface, &mut records, false, false);
        assert_eq!(placement_of(&surface, id), Some(Placement::at(1, 0)));

        reposition_children(&mut surface, &mut records, true, false);
        assert_eq!(placement_of(&surface, id), Some(Placement::at(2, 0)));
    }

    #[test]
    fn record_is_captured_once() {
        let mut surface = GridSurface::new();
        let mut records = ChildRecords::new();
        let id = surface.add_content(Content::new("a", Placement::at(2, 3)));

        reposition_children(&mut surface, &mut records, true, true);
        reposition_children(&mut surface, &mut records, true, true);

        assert_eq!(records.get(id), Some(Placement::at(2, 3)));
        assert_eq!(placement_of(&surface, id), Some(Placement::at(4, 6)));
    }

    #[test]
    fn disabling_restores_logical_cell() {
        let mut surface = GridSurface::new();
        let mut records = ChildRecords::new();
        let id = surface.add_content(Content::new("a", Placement::at(1, 2)));

        reposition_children(&mut surface, &mut records, true, true);
        reposition_children(&mut surface, &mut records, false, false);

        assert_eq!(placement_of(&surface, id), Some(Placement::at(1, 2)));
    }

    #[test]
    fn spans_cover_interleaved_separators() {
        let mut surface = GridSurface::new();
        let mut records = ChildRecords::new();
        let id = surface.add_content(Content::new("wide", Placement::at(0, 1).with_span(1, 2)));

        reposition_children(&mut surface, &mut records, true, true);

        assert_eq!(
            placement_of(&surface, id),
            Some(Placement::at(0, 2).with_span(1, 3))
        );
    }

    #[test]
    fn unplaced_children_are_skipped() {
        let mut surface = GridSurface::new();
        let mut records = ChildRecords::new();
        let id = surface.add_content(Content::unplaced("overlay"));

        assert_eq!(reposition_children(&mut surface, &mut records, true, true), 0);
        assert!(records.get(id).is_none());
    }

    #[test]
    fn removed_children_are_evicted() {
        let mut surface = GridSurface::new();
        let mut records = ChildRecords::new();
        let id = surface.add_content(Content::new("a", Placement::at(0, 0)));
        reposition_children(&mut surface, &mut records, true, true);
        assert_eq!(records.len(), 1);

        surface.remove_child(id);
        reposition_children(&mut surface, &mut records, true, true);

        assert!(records.is_empty());
    }
}
