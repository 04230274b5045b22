// ABOUTME: Track model for the rows and columns of a grid.
// ABOUTME: Maps logical content indices to physical indices when separators interleave.

use dg_core::Axis;
use serde::{Deserialize, Serialize};

use crate::container::Container;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMode {
    /// Sized to content
    #[default]
    Auto,
    /// Shares remaining space proportionally
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Track {
    pub size: SizeMode,
}

impl Track {
    pub const AUTO: Self = Self {
        size: SizeMode::Auto,
    };
}

/// Physical track count for `count` content tracks
pub fn physical_count(count: usize, separators: bool) -> usize {
    if separators {
        count.saturating_mul(2).saturating_sub(1)
    } else {
        count
    }
}

/// Odd physical tracks host separators when they are enabled
pub fn is_separator_track(physical: usize, separators: bool) -> bool {
    separators && physical % 2 == 1
}

pub fn logical_index(physical: usize, separators: bool) -> usize {
    if separators {
        physical / 2
    } else {
        physical
    }
}

/// Saturates instead of overflowing for indices no container could hold
pub fn physical_index(logical: usize, separators: bool) -> usize {
    if separators {
        logical.saturating_mul(2)
    } else {
        logical
    }
}

/// Physical tracks covered by `logical` content tracks and the separators between them
pub fn physical_span(logical: usize, separators: bool) -> usize {
    if separators && logical > 0 {
        logical.saturating_mul(2).saturating_sub(1)
    } else {
        logical
    }
}

/// Replace every track on `axis` with fresh Auto tracks, dropping prior size modes
pub fn rebuild_tracks<C: Container + ?Sized>(
    container: &mut C,
    axis: Axis,
    count: usize,
    separators: bool,
) -> usize {
    let physical = physical_count(count, separators);
    let tracks = container.tracks_mut(axis);
    tracks.clear();
    tracks.resize(physical, Track::AUTO);
    tracing::trace!("Rebuilt {:?} axis: {} logical, {} physical", axis, count, physical);
    physical
}
