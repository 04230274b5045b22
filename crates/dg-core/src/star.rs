// ABOUTME: Declarative selection of proportionally sized tracks.
// ABOUTME: Parses "All" or a comma-separated list of logical track indices.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which logical content tracks get Star sizing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StarSelection {
    /// Every track is Auto sized
    #[default]
    None,
    /// Every content track is Star sized
    All,
    /// Only the listed logical indices are Star sized
    Tracks(BTreeSet<usize>),
}

impl StarSelection {
    pub const ALL_TOKEN: &'static str = "All";

    /// Parse a selection, dropping tokens that are not track indices
    ///
    /// Unparsable tokens can never match a track, so dropping them keeps
    /// the "no effect" semantics of an out-of-range index.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::None;
        }
        if trimmed == Self::ALL_TOKEN {
            return Self::All;
        }
        let tracks: BTreeSet<usize> = trimmed
            .split(',')
            .filter_map(|token| token.trim().parse().ok())
            .collect();
        if tracks.is_empty() {
            Self::None
        } else {
            Self::Tracks(tracks)
        }
    }

    /// Whether the logical content track `index` should be Star sized
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Self::None => false,
            Self::All => true,
            Self::Tracks(tracks) => tracks.contains(&index),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl FromStr for StarSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for StarSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::All => f.write_str(Self::ALL_TOKEN),
            Self::Tracks(tracks) => {
                let mut first = true;
                for track in tracks {
                    if !first {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", track)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

impl From<String> for StarSelection {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<StarSelection> for String {
    fn from(selection: StarSelection) -> Self {
        selection.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selects_nothing() {
        assert_eq!(StarSelection::parse(""), StarSelection::None);
        assert_eq!(StarSelection::parse("   "), StarSelection::None);
    }

    #[test]
    fn all_token_selects_everything() {
        let selection = StarSelection::parse("All");
        assert!(selection.contains(0));
        assert!(selection.contains(99));
    }

    #[test]
    fn list_entries_are_trimmed() {
        let selection = StarSelection::parse(" 1 ,3,  5");
        assert!(selection.contains(1));
        assert!(selection.contains(3));
        assert!(selection.contains(5));
        assert!(!selection.contains(0));
        assert!(!selection.contains(2));
    }

    #[test]
    fn junk_tokens_never_match() {
        let selection = StarSelection::parse("x, 2, -1");
        assert_eq!(selection, StarSelection::Tracks(BTreeSet::from([2])));
        assert_eq!(StarSelection::parse("all"), StarSelection::None);
    }

    #[test]
    fn tokens_compare_as_numbers() {
        let selection = StarSelection::parse("01, +3, 007");
        assert_eq!(selection, StarSelection::Tracks(BTreeSet::from([1, 3, 7])));
        assert!(selection.contains(1));
        assert!(!selection.contains(0));
    }

    #[test]
    fn display_matches_parse_input() {
        assert_eq!(StarSelection::parse("2, 0").to_string(), "0,2");
        assert_eq!(StarSelection::All.to_string(), "All");
        assert_eq!(StarSelection::None.to_string(), "");
    }
}
