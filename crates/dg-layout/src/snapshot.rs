// ABOUTME: Identity-free capture of a container's physical layout.
// ABOUTME: Used to compare reconciliation results and to print layouts.

use dg_core::Axis;
use serde::{Deserialize, Serialize};

use crate::container::{Child, Container, Placement, Separator};
use crate::track::SizeMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildView {
    pub name: String,
    pub placement: Option<Placement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub rows: Vec<SizeMode>,
    pub columns: Vec<SizeMode>,
    /// Ordered by axis, then track
    pub separators: Vec<Separator>,
    /// Content children in container order
    pub children: Vec<ChildView>,
}

impl LayoutSnapshot {
    pub fn capture<C: Container + ?Sized>(container: &C) -> Self {
        let modes = |axis: Axis| -> Vec<SizeMode> {
            container.tracks(axis).iter().map(|t| t.size).collect()
        };

        let mut separators = Vec::new();
        let mut children = Vec::new();
        for id in container.child_ids() {
            match container.child(id) {
                Some(Child::Separator(separator)) => separators.push(*separator),
                Some(Child::Content(content)) => children.push(ChildView {
                    name: content.name.clone(),
                    placement: content.placement,
                }),
                None => {}
            }
        }
        separators.sort_by_key(|s| (s.axis, s.track));

        Self {
            rows: modes(Axis::Row),
            columns: modes(Axis::Column),
            separators,
            children,
        }
    }

    pub fn tracks(&self, axis: Axis) -> &[SizeMode] {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.columns,
        }
    }

    pub fn separators_on(&self, axis: Axis) -> impl Iterator<Item = &Separator> {
        self.separators.iter().filter(move |s| s.axis == axis)
    }

    pub fn child(&self, name: &str) -> Option<&ChildView> {
        self.children.iter().find(|c| c.name == name)
    }
}
