// ABOUTME: Dynamic grid engine attached to one container.
// ABOUTME: Every configuration change re-derives tracks, separators, and child cells.

use dg_core::{Axis, Color, GridSettings, StarSelection};

use crate::container::{Child, ChildId, Container, Content, Placement};
use crate::outcome::{Outcome, Rejection};
use crate::property::{Property, Value};
use crate::rebase::{reposition_children, to_physical, ChildRecords};
use crate::separator::{reconcile_separators, remove_separators};
use crate::sizing::apply_star_sizing;
use crate::span::{apply_span, separator_span};
use crate::track::rebuild_tracks;

/// Engine state for a single container: its configuration and the
/// logical placement cache of its content children.
///
/// The engine never keeps a reference to the container. Every entry point
/// takes it explicitly, so the host decides where the grid lives and
/// serializes access to it.
#[derive(Debug, Default)]
pub struct DynamicGrid {
    settings: GridSettings,
    records: ChildRecords,
}

impl DynamicGrid {
    pub fn new(settings: GridSettings) -> Self {
        Self {
            settings: settings.sanitized(),
            records: ChildRecords::new(),
        }
    }

    /// Create an engine for `container` and bring it in line with `settings`
    pub fn attach<C: Container + ?Sized>(container: &mut C, settings: GridSettings) -> Self {
        let mut grid = Self::new(settings);
        grid.reconcile(container);
        grid
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    pub fn records(&self) -> &ChildRecords {
        &self.records
    }

    /// Logical cell a content child was declared at
    pub fn logical_placement(&self, id: ChildId) -> Option<Placement> {
        self.records.get(id)
    }

    /// Physical span of separators on `axis` across the opposite axis
    pub fn cross_span(&self, axis: Axis) -> usize {
        let opposite = self.settings.axis(axis.opposite());
        separator_span(
            self.settings.axis(axis).separator_span,
            opposite.count,
            opposite.separators,
        )
    }

    /// Full reconciliation pass: remove stale separators, rebuild tracks,
    /// reposition children, resolve star sizing, recreate separators, and
    /// reapply spans.
    pub fn reconcile<C: Container + ?Sized>(&mut self, container: &mut C) {
        let rows = &self.settings.rows;
        let columns = &self.settings.columns;
        tracing::debug!(
            "Reconciling grid: {} rows (separators: {}), {} columns (separators: {})",
            rows.count,
            rows.separators,
            columns.count,
            columns.separators
        );

        for axis in Axis::ALL {
            remove_separators(container, axis);
        }

        for axis in Axis::ALL {
            let settings = self.settings.axis(axis);
            rebuild_tracks(container, axis, settings.count, settings.separators);
        }

        self.reposition(container);

        for axis in Axis::ALL {
            let settings = self.settings.axis(axis);
            apply_star_sizing(container, axis, &settings.star, settings.separators);
        }

        for axis in Axis::ALL {
            let enabled = self.settings.axis(axis).separators;
            let span = self.cross_span(axis);
            reconcile_separators(container, axis, enabled, self.settings.separator, span);
        }

        for axis in Axis::ALL {
            let span = self.cross_span(axis);
            apply_span(container, axis, span);
        }
    }

    fn reposition<C: Container + ?Sized>(&mut self, container: &mut C) -> usize {
        reposition_children(
            container,
            &mut self.records,
            self.settings.rows.separators,
            self.settings.columns.separators,
        )
    }

    fn ignore(rejection: Rejection) -> Outcome {
        tracing::debug!("Ignoring configuration change: {}", rejection);
        Outcome::Ignored(rejection)
    }

    /// Number of logical content tracks on `axis`. Negative counts are ignored.
    pub fn set_track_count<C: Container + ?Sized>(
        &mut self,
        container: &mut C,
        axis: Axis,
        count: i64,
    ) -> Outcome {
        let Ok(count) = usize::try_from(count) else {
            return Self::ignore(Rejection::NegativeCount(count));
        };
        self.settings.axis_mut(axis).count = count;
        self.reconcile(container);
        Outcome::Applied
    }

    pub fn set_separators_enabled<C: Container + ?Sized>(
        &mut self,
        container: &mut C,
        axis: Axis,
        enabled: bool,
    ) -> Outcome {
        self.settings.axis_mut(axis).separators = enabled;
        self.reconcile(container);
        Outcome::Applied
    }

    pub fn set_separator_thickness<C: Container + ?Sized>(
        &mut self,
        container: &mut C,
        thickness: i64,
    ) -> Outcome {
        if thickness <= 0 {
            return Self::ignore(Rejection::NonPositiveThickness(thickness));
        }
        let applied = thickness.min(i64::from(u32::MAX));
        self.settings.separator.thickness = applied as u32;
        self.reconcile(container);
        clamped_or_applied(thickness, applied)
    }

    pub fn set_separator_color<C: Container + ?Sized>(
        &mut self,
        container: &mut C,
        color: Color,
    ) -> Outcome {
        self.settings.separator.color = color;
        self.reconcile(container);
        Outcome::Applied
    }

    /// Star selection for `axis`: `"All"` or comma-separated logical indices
    pub fn set_star_tracks<C: Container + ?Sized>(
        &mut self,
        container: &mut C,
        axis: Axis,
        selection: &str,
    ) -> Outcome {
        self.settings.axis_mut(axis).star = StarSelection::parse(selection);
        self.reconcile(container);
        Outcome::Applied
    }

    /// Logical tracks separators on `axis` cross. Values below 1 become 1.
    pub fn set_separator_span<C: Container + ?Sized>(
        &mut self,
        container: &mut C,
        axis: Axis,
        span: i64,
    ) -> Outcome {
        let applied = span.clamp(1, i64::from(u32::MAX));
        self.settings.axis_mut(axis).separator_span = Some(applied as u32);
        self.reconcile(container);
        clamped_or_applied(span, applied)
    }

    /// Let separators on `axis` span the whole opposite axis again
    pub fn clear_separator_span<C: Container + ?Sized>(
        &mut self,
        container: &mut C,
        axis: Axis,
    ) -> Outcome {
        self.settings.axis_mut(axis).separator_span = None;
        self.reconcile(container);
        Outcome::Applied
    }

    /// Apply a value from an untyped binding layer. A value of the wrong
    /// kind leaves the grid untouched.
    pub fn apply<C: Container + ?Sized>(
        &mut self,
        container: &mut C,
        property: Property,
        value: Value,
    ) -> Outcome {
        match (property, value) {
            (Property::RowCount, Value::Int(n)) => self.set_track_count(container, Axis::Row, n),
            (Property::ColumnCount, Value::Int(n)) => {
                self.set_track_count(container, Axis::Column, n)
            }
            (Property::AddHorizontalSeparators, Value::Bool(on)) => {
                self.set_separators_enabled(container, Axis::Row, on)
            }
            (Property::AddVerticalSeparators, Value::Bool(on)) => {
                self.set_separators_enabled(container, Axis::Column, on)
            }
            (Property::SeparatorThickness, Value::Int(n)) => {
                self.set_separator_thickness(container, n)
            }
            (Property::SeparatorColor, Value::Color(color)) => {
                self.set_separator_color(container, color)
            }
            (Property::StarRows, Value::Text(text)) => {
                self.set_star_tracks(container, Axis::Row, &text)
            }
            (Property::StarColumns, Value::Text(text)) => {
                self.set_star_tracks(container, Axis::Column, &text)
            }
            (Property::HorizontalSeparatorSpan, Value::Int(n)) => {
                self.set_separator_span(container, Axis::Row, n)
            }
            (Property::VerticalSeparatorSpan, Value::Int(n)) => {
                self.set_separator_span(container, Axis::Column, n)
            }
            (property, value) => Self::ignore(Rejection::TypeMismatch {
                property,
                expected: property.expected(),
                found: value.kind(),
            }),
        }
    }

    /// Add a content child declared in logical coordinates
    pub fn add_child<C: Container + ?Sized>(&mut self, container: &mut C, content: Content) -> ChildId {
        let id = container.add_child(Child::Content(content));
        self.reposition(container);
        id
    }

    /// Remove a child and its cached record
    pub fn remove_child<C: Container + ?Sized>(
        &mut self,
        container: &mut C,
        id: ChildId,
    ) -> Option<Child> {
        self.records.forget(id);
        container.remove_child(id)
    }

    /// Move a content child to a new logical cell, replacing its cached record.
    /// Returns false if `id` is not a content child.
    pub fn place_child<C: Container + ?Sized>(
        &mut self,
        container: &mut C,
        id: ChildId,
        logical: Placement,
    ) -> bool {
        let physical = to_physical(
            logical,
            self.settings.rows.separators,
            self.settings.columns.separators,
        );
        let Some(Child::Content(content)) = container.child_mut(id) else {
            return false;
        };
        content.placement = Some(physical);
        self.records.set(id, logical);
        true
    }

    /// Drop the cached record of a child the host removed on its own
    pub fn forget(&mut self, id: ChildId) -> Option<Placement> {
        self.records.forget(id)
    }
}

fn clamped_or_applied(requested: i64, applied: i64) -> Outcome {
    if requested == applied {
        Outcome::Applied
    } else {
        tracing::debug!("Clamped configuration value {} to {}", requested, applied);
        Outcome::Clamped { requested, applied }
    }
}
