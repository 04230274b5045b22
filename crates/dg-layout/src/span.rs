// ABOUTME: Span synchronizer for separator elements.
// ABOUTME: Translates a declared cross-axis span into physical tracks.

use dg_core::Axis;

use crate::container::{Child, Container};
use crate::track::physical_span;

/// Physical span for separators whose opposite axis has `opposite_count`
/// content tracks. An undeclared span covers the whole opposite axis.
pub fn separator_span(
    declared: Option<u32>,
    opposite_count: usize,
    opposite_separators: bool,
) -> usize {
    let logical = match declared {
        Some(span) => span.max(1) as usize,
        None => opposite_count,
    };
    physical_span(logical, opposite_separators).max(1)
}

/// Set the cross-axis span of every separator on `axis`, returns how many were touched
pub fn apply_span<C: Container + ?Sized>(container: &mut C, axis: Axis, span: usize) -> usize {
    let mut updated = 0;
    for id in container.separator_ids(axis) {
        if let Some(Child::Separator(separator)) = container.child_mut(id) {
            separator.cross_span = span;
            updated += 1;
        }
    }
    tracing::trace!("Applied span {} to {} {} separators", span, updated, axis.separator_label());
    updated
}
