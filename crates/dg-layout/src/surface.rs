// ABOUTME: In-memory grid container.
// ABOUTME: Stands in for a host toolkit's grid in tests and the CLI.

use std::collections::BTreeMap;

use dg_core::Axis;

use crate::container::{Child, ChildId, Container, Content, Separator};
use crate::track::Track;

#[derive(Debug, Default)]
pub struct GridSurface {
    rows: Vec<Track>,
    columns: Vec<Track>,
    children: BTreeMap<ChildId, Child>,
    next_id: u64,
}

impl GridSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a content child, returns its ID
    pub fn add_content(&mut self, content: Content) -> ChildId {
        self.add_child(Child::Content(content))
    }

    pub fn content(&self, id: ChildId) -> Option<&Content> {
        self.children.get(&id).and_then(Child::as_content)
    }

    /// All separator elements on `axis`, ordered by track
    pub fn separators(&self, axis: Axis) -> Vec<&Separator> {
        let mut separators: Vec<&Separator> = self
            .children
            .values()
            .filter_map(Child::as_separator)
            .filter(|s| s.axis == axis)
            .collect();
        separators.sort_by_key(|s| s.track);
        separators
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Container for GridSurface {
    fn tracks(&self, axis: Axis) -> &[Track] {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.columns,
        }
    }

    fn tracks_mut(&mut self, axis: Axis) -> &mut Vec<Track> {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.columns,
        }
    }

    fn child_ids(&self) -> Vec<ChildId> {
        self.children.keys().copied().collect()
    }

    fn child(&self, id: ChildId) -> Option<&Child> {
        self.children.get(&id)
    }

    fn child_mut(&mut self, id: ChildId) -> Option<&mut Child> {
        self.children.get_mut(&id)
    }

    fn add_child(&mut self, child: Child) -> ChildId {
        let id = ChildId(self.next_id);
        self.next_id += 1;
        self.children.insert(id, child);
        id
    }

    fn remove_child(&mut self, id: ChildId) -> Option<Child> {
        self.children.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Placement;

    #[test]
    fn ids_are_never_reused() {
        let mut surface = GridSurface::new();
        let first = surface.add_content(Content::new("a", Placement::at(0, 0)));
        surface.remove_child(first);
        let second = surface.add_content(Content::new("b", Placement::at(0, 0)));

        assert_ne!(first, second);
        assert_eq!(surface.len(), 1);
        assert!(!surface.contains(first));
    }

    #[test]
    fn content_lookup_skips_separators() {
        let mut surface = GridSurface::new();
        let id = surface.add_child(Child::Separator(Separator {
            axis: Axis::Row,
            track: 1,
            cross_span: 1,
            thickness: 2,
            color: dg_core::Color::BLACK,
        }));

        assert!(surface.content(id).is_none());
        assert_eq!(surface.separator_ids(Axis::Row), vec![id]);
        assert!(surface.separator_ids(Axis::Column).is_empty());
    }
}
