use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Origin feed of a collected text.
///
/// The set is closed: per-source counters are keyed by this enum, so a
/// source outside it cannot be counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Reddit,
    Mastodon,
    GoogleTrends,
    Youtube,
    News,
    Twitter,
    Forums,
}

impl Source {
    /// Every source, in collection rotation order.
    pub const ALL: [Source; 7] = [
        Source::Reddit,
        Source::Mastodon,
        Source::GoogleTrends,
        Source::Youtube,
        Source::News,
        Source::Twitter,
        Source::Forums,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Reddit => "reddit",
            Source::Mastodon => "mastodon",
            Source::GoogleTrends => "google_trends",
            Source::Youtube => "youtube",
            Source::News => "news",
            Source::Twitter => "twitter",
            Source::Forums => "forums",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSource(s.to_string()))
    }
}
