// ABOUTME: Property tests for the grid engine.
// ABOUTME: Checks track doubling, idempotence, and placement round-trips over random configs.

use dg_core::{Axis, AxisSettings, GridSettings};
use proptest::prelude::*;

use crate::container::{Container, Content, Placement};
use crate::engine::DynamicGrid;
use crate::snapshot::LayoutSnapshot;
use crate::surface::GridSurface;
use crate::track::SizeMode;

fn arb_axis() -> impl Strategy<Value = AxisSettings> {
    (0usize..8, any::<bool>(), prop::option::of(1u32..6)).prop_map(|(count, separators, span)| {
        AxisSettings {
            count,
            separators,
            separator_span: span,
            ..AxisSettings::default()
        }
    })
}

fn arb_settings() -> impl Strategy<Value = GridSettings> {
    let star = prop_oneof![
        Just(String::new()),
        Just("All".to_string()),
        "[0-7]( ?, ?[0-7]){0,3}",
    ];
    (arb_axis(), arb_axis(), star).prop_map(|(rows, columns, star)| {
        let mut settings = GridSettings {
            rows,
            columns,
            ..GridSettings::default()
        };
        settings.columns.star = dg_core::StarSelection::parse(&star);
        settings
    })
}

proptest! {
    #[test]
    fn separators_sit_on_odd_tracks(n in 1usize..32) {
        let mut surface = GridSurface::new();
        let mut settings = GridSettings::default();
        settings.rows.count = n;
        DynamicGrid::attach(&mut surface, settings);

        prop_assert_eq!(surface.tracks(Axis::Row).len(), 2 * n - 1);
        let separators = surface.separators(Axis::Row);
        prop_assert_eq!(separators.len(), n - 1);
        prop_assert!(separators.iter().all(|s| s.track % 2 == 1));
    }

    #[test]
    fn second_pass_changes_nothing(settings in arb_settings(), row in 0usize..8, column in 0usize..8) {
        let mut surface = GridSurface::new();
        let mut grid = DynamicGrid::attach(&mut surface, settings);
        grid.add_child(&mut surface, Content::new("child", Placement::at(row, column)));

        grid.reconcile(&mut surface);
        let once = LayoutSnapshot::capture(&surface);
        grid.reconcile(&mut surface);

        prop_assert_eq!(LayoutSnapshot::capture(&surface), once);
    }

    #[test]
    fn separator_tracks_stay_auto(settings in arb_settings()) {
        let mut surface = GridSurface::new();
        DynamicGrid::attach(&mut surface, settings.clone());

        for axis in Axis::ALL {
            if settings.axis(axis).separators {
                for (index, track) in surface.tracks(axis).iter().enumerate() {
                    if index % 2 == 1 {
                        prop_assert_eq!(track.size, SizeMode::Auto);
                    }
                }
            }
        }
    }

    #[test]
    fn toggling_separators_restores_placement(
        row in 0usize..8,
        column in 0usize..8,
        toggles in prop::collection::vec((any::<bool>(), any::<bool>()), 1..6),
    ) {
        let mut surface = GridSurface::new();
        let mut settings = GridSettings::default();
        settings.rows.count = 8;
        settings.columns.count = 8;
        settings.rows.separators = false;
        settings.columns.separators = false;
        let mut grid = DynamicGrid::attach(&mut surface, settings);
        let id = grid.add_child(&mut surface, Content::new("child", Placement::at(row, column)));

        for (rows_on, columns_on) in toggles {
            let _ = grid.set_separators_enabled(&mut surface, Axis::Row, rows_on);
            let _ = grid.set_separators_enabled(&mut surface, Axis::Column, columns_on);
        }
        let _ = grid.set_separators_enabled(&mut surface, Axis::Row, false);
        let _ = grid.set_separators_enabled(&mut surface, Axis::Column, false);

        prop_assert_eq!(
            surface.content(id).and_then(|c| c.placement),
            Some(Placement::at(row, column))
        );
    }
}
