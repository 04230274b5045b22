// ABOUTME: One-value-in, one-value-out converters for host bindings.
// ABOUTME: Bad input falls back to a default instead of failing.

use dg_core::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Collapsed,
}

/// Map a flag to a color.
///
/// Without a parameter `true` is red and `false` is black. A parameter of
/// the form `"A,B"` picks `A` for true (black if missing or unknown) and
/// `B` for false (red if missing or unknown). Either side may be empty.
pub fn bool_to_color(value: bool, parameter: Option<&str>) -> Color {
    let Some(parameter) = parameter else {
        return if value { Color::RED } else { Color::BLACK };
    };

    let mut parts = parameter.split(',');
    let (part, fallback) = if value {
        (parts.next(), Color::BLACK)
    } else {
        (parts.nth(1), Color::RED)
    };
    part.and_then(|p| p.parse().ok()).unwrap_or(fallback)
}

pub fn bool_to_visibility(value: bool) -> Visibility {
    if value {
        Visibility::Visible
    } else {
        Visibility::Collapsed
    }
}

pub fn bool_to_visibility_inverted(value: bool) -> Visibility {
    bool_to_visibility(!value)
}

pub fn invert_bool(value: bool) -> bool {
    !value
}

/// Whether a radio button bound to `value` should be checked for `option`
pub fn radio_matches<T: PartialEq>(value: &T, option: &T) -> bool {
    value == option
}

/// Value to write back when a radio button for `option` changes state
pub fn radio_selection<T: Clone>(checked: bool, option: &T) -> Option<T> {
    checked.then(|| option.clone())
}
