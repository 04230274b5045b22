// ABOUTME: Star-sizing resolver for content tracks.
// ABOUTME: Selections name logical tracks; separator tracks are always Auto.

use dg_core::{Axis, StarSelection};

use crate::container::Container;
use crate::track::{is_separator_track, logical_index, SizeMode};

/// Assign a size mode to every physical track on `axis`, returns the number of Star tracks
pub fn apply_star_sizing<C: Container + ?Sized>(
    container: &mut C,
    axis: Axis,
    selection: &StarSelection,
    separators: bool,
) -> usize {
    let mut star = 0;
    for (physical, track) in container.tracks_mut(axis).iter_mut().enumerate() {
        track.size = if is_separator_track(physical, separators) {
            SizeMode::Auto
        } else if selection.contains(logical_index(physical, separators)) {
            star += 1;
            SizeMode::Star
        } else {
            SizeMode::Auto
        };
    }
    tracing::trace!("{:?} axis: {} star tracks for {:?}", axis, star, selection);
    star
}
