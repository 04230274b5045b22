// ABOUTME: Separator synthesizer.
// ABOUTME: Removes and recreates divider elements on the odd tracks of an axis.

use dg_core::{Axis, SeparatorStyle};

use crate::container::{Child, Container, Separator};
use crate::track::is_separator_track;

/// Remove every separator element on `axis`, returns how many were removed
pub fn remove_separators<C: Container + ?Sized>(container: &mut C, axis: Axis) -> usize {
    let stale = container.separator_ids(axis);
    for id in &stale {
        container.remove_child(*id);
    }
    stale.len()
}

/// Create one separator per odd physical track currently on `axis`
fn create_separators<C: Container + ?Sized>(
    container: &mut C,
    axis: Axis,
    style: SeparatorStyle,
    cross_span: usize,
) -> usize {
    let track_count = container.tracks(axis).len();
    let mut created = 0;
    for track in (0..track_count).filter(|t| is_separator_track(*t, true)) {
        container.add_child(Child::Separator(Separator {
            axis,
            track,
            cross_span,
            thickness: style.thickness,
            color: style.color,
        }));
        created += 1;
    }
    created
}

/// Bring the separator elements on `axis` in line with its current tracks.
///
/// Removal is unconditional and happens before any creation, so repeated or
/// rapidly toggled calls never leave duplicates behind. Returns the number of
/// separators present afterwards.
pub fn reconcile_separators<C: Container + ?Sized>(
    container: &mut C,
    axis: Axis,
    enabled: bool,
    style: SeparatorStyle,
    cross_span: usize,
) -> usize {
    let removed = remove_separators(container, axis);
    let created = if enabled {
        create_separators(container, axis, style, cross_span)
    } else {
        0
    };
    tracing::debug!(
        "{} separators: removed {}, created {}",
        axis.separator_label(),
        removed,
        created
    );
    created
}
