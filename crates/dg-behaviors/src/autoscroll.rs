// ABOUTME: Auto-scroll-on-append behavior for item lists.
// ABOUTME: Follows new items unless the user has scrolled, selected, or grabbed the list.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    Down,
    Up,
    Right,
    Left,
}

/// How a list's item collection changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsChange {
    Add,
    Remove,
    Replace,
    Move,
    Reset,
}

/// Scroll request handed back to the host's scroll viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCommand {
    ToTop,
    ToBottom,
    ToLeftEnd,
    ToRightEnd,
}

/// Scroll viewer state along the direction being followed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub extent: f64,
    pub viewport: f64,
}

impl ScrollMetrics {
    const EPSILON: f64 = 1e-6;

    fn at_start(&self) -> bool {
        self.offset.abs() < Self::EPSILON
    }

    fn at_end(&self) -> bool {
        (self.offset - (self.extent - self.viewport)).abs() < Self::EPSILON
    }
}

impl ScrollDirection {
    fn command(self) -> ScrollCommand {
        match self {
            ScrollDirection::Down => ScrollCommand::ToBottom,
            ScrollDirection::Up => ScrollCommand::ToTop,
            ScrollDirection::Right => ScrollCommand::ToRightEnd,
            ScrollDirection::Left => ScrollCommand::ToLeftEnd,
        }
    }

    /// Whether the viewer sits where new items appear
    fn reached(self, metrics: &ScrollMetrics) -> bool {
        match self {
            ScrollDirection::Down | ScrollDirection::Right => metrics.at_end(),
            ScrollDirection::Up | ScrollDirection::Left => metrics.at_start(),
        }
    }
}

/// Per-list follow state
#[derive(Debug, Clone)]
pub struct AutoScroll {
    enabled: bool,
    direction: ScrollDirection,
    following: bool,
    user_interacting: bool,
    just_wheeled: bool,
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self {
            enabled: false,
            direction: ScrollDirection::Down,
            following: true,
            user_interacting: false,
            just_wheeled: false,
        }
    }
}

impl AutoScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Whether the next append would scroll
    pub fn is_following(&self) -> bool {
        self.enabled && self.following && !self.user_interacting
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_direction(&mut self, direction: ScrollDirection) {
        self.direction = direction;
    }

    pub fn on_mouse_capture_gained(&mut self) {
        self.user_interacting = true;
        self.following = false;
    }

    pub fn on_mouse_capture_lost(&mut self) {
        self.user_interacting = false;
    }

    /// The scroll event that follows a wheel decides whether following stops
    pub fn on_mouse_wheel(&mut self) {
        self.just_wheeled = true;
    }

    pub fn on_selection_changed(&mut self) {
        self.following = false;
    }

    pub fn on_scroll_changed(&mut self, metrics: ScrollMetrics) {
        let reached = self.direction.reached(&metrics);
        if self.just_wheeled && !reached {
            self.just_wheeled = false;
            self.following = false;
            return;
        }
        if reached {
            self.following = true;
        }
    }

    pub fn on_items_changed(&mut self, change: ItemsChange) -> Option<ScrollCommand> {
        if !matches!(change, ItemsChange::Add | ItemsChange::Reset) || !self.is_following() {
            return None;
        }
        Some(self.direction.command())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(pub u64);

/// Auto-scroll state for every list that opted in, dropped on unload
#[derive(Debug, Default)]
pub struct AutoScrollRegistry {
    behaviors: HashMap<ListId, AutoScroll>,
}

impl AutoScrollRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, list: ListId) -> Option<&AutoScroll> {
        self.behaviors.get(&list)
    }

    pub fn get_mut(&mut self, list: ListId) -> Option<&mut AutoScroll> {
        self.behaviors.get_mut(&list)
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// Turn following on or off, attaching the behavior on first use.
    /// Returns false if nothing changed.
    pub fn set_enabled(&mut self, list: ListId, enabled: bool) -> bool {
        let current = self.get(list).map(AutoScroll::enabled).unwrap_or(false);
        if current == enabled {
            return false;
        }
        self.behaviors.entry(list).or_default().set_enabled(enabled);
        tracing::debug!("Auto-scroll for {:?}: enabled={}", list, enabled);
        true
    }

    /// Change the follow direction, attaching the behavior on first use.
    /// Returns false if nothing changed.
    pub fn set_direction(&mut self, list: ListId, direction: ScrollDirection) -> bool {
        let current = self.get(list).map(AutoScroll::direction).unwrap_or_default();
        if current == direction {
            return false;
        }
        self.behaviors.entry(list).or_default().set_direction(direction);
        true
    }

    pub fn on_items_changed(&mut self, list: ListId, change: ItemsChange) -> Option<ScrollCommand> {
        self.behaviors.get_mut(&list)?.on_items_changed(change)
    }

    /// Drop the behavior of a list that left the UI
    pub fn unload(&mut self, list: ListId) -> bool {
        self.behaviors.remove(&list).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(offset: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            extent: 100.0,
            viewport: 20.0,
        }
    }

    fn enabled() -> AutoScroll {
        let mut behavior = AutoScroll::new();
        behavior.set_enabled(true);
        behavior
    }

    #[test]
    fn disabled_by_default() {
        let mut behavior = AutoScroll::new();
        assert_eq!(behavior.on_items_changed(ItemsChange::Add), None);
    }

    #[test]
    fn follows_appends_and_resets() {
        let mut behavior = enabled();
        assert_eq!(behavior.on_items_changed(ItemsChange::Add), Some(ScrollCommand::ToBottom));
        assert_eq!(behavior.on_items_changed(ItemsChange::Reset), Some(ScrollCommand::ToBottom));
        assert_eq!(behavior.on_items_changed(ItemsChange::Remove), None);
    }

    #[test]
    fn direction_picks_command() {
        let mut behavior = enabled();
        behavior.set_direction(ScrollDirection::Left);
        assert_eq!(behavior.on_items_changed(ItemsChange::Add), Some(ScrollCommand::ToLeftEnd));
        behavior.set_direction(ScrollDirection::Up);
        assert_eq!(behavior.on_items_changed(ItemsChange::Add), Some(ScrollCommand::ToTop));
    }

    #[test]
    fn wheel_away_from_end_stops_following() {
        let mut behavior = enabled();
        behavior.on_mouse_wheel();
        behavior.on_scroll_changed(metrics(40.0));
        assert!(!behavior.is_following());

        behavior.on_scroll_changed(metrics(80.0));
        assert!(behavior.is_following());
    }

    #[test]
    fn selection_stops_following_until_end_reached() {
        let mut behavior = enabled();
        behavior.on_selection_changed();
        assert_eq!(behavior.on_items_changed(ItemsChange::Add), None);

        behavior.on_scroll_changed(metrics(80.0));
        assert_eq!(behavior.on_items_changed(ItemsChange::Add), Some(ScrollCommand::ToBottom));
    }

    #[test]
    fn mouse_capture_blocks_scrolling() {
        let mut behavior = enabled();
        behavior.on_mouse_capture_gained();
        behavior.on_scroll_changed(metrics(80.0));
        assert_eq!(behavior.on_items_changed(ItemsChange::Add), None);

        behavior.on_mouse_capture_lost();
        assert_eq!(behavior.on_items_changed(ItemsChange::Add), Some(ScrollCommand::ToBottom));
    }

    #[test]
    fn upward_lists_follow_at_start() {
        let mut behavior = enabled();
        behavior.set_direction(ScrollDirection::Up);
        behavior.on_selection_changed();
        behavior.on_scroll_changed(metrics(0.0));
        assert!(behavior.is_following());
    }

    #[test]
    fn registry_attaches_lazily_and_unloads() {
        let mut registry = AutoScrollRegistry::new();
        let list = ListId(7);

        assert!(!registry.set_enabled(list, false));
        assert!(registry.is_empty());

        assert!(registry.set_direction(list, ScrollDirection::Right));
        assert_eq!(registry.on_items_changed(list, ItemsChange::Add), None);

        assert!(registry.set_enabled(list, true));
        assert!(!registry.set_enabled(list, true));
        assert_eq!(
            registry.on_items_changed(list, ItemsChange::Add),
            Some(ScrollCommand::ToRightEnd)
        );

        assert!(registry.unload(list));
        assert!(registry.get(list).is_none());
        assert_eq!(registry.on_items_changed(list, ItemsChange::Add), None);
    }
}
