/// Data models for portal-service
///
/// - `Channel`, `SocialProfile`: read-only views of rows owned by the panel
/// - `ResolvedStream`: request-scoped result handed to the page renderer
use serde::{Deserialize, Serialize};

/// A broadcaster's channel as stored by the administrative panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Channel {
    /// Broadcaster username, stored with its canonical case
    pub owner_identity: String,
    pub is_live: bool,
    /// Overrides the composed playback URL when present and non-empty
    pub explicit_playback_url: Option<String>,
}

impl Channel {
    /// The explicit playback URL, if it is set to something other than blanks.
    pub fn playback_override(&self) -> Option<&str> {
        self.explicit_playback_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Bio and social links shown next to a channel. Absence is normal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SocialProfile {
    pub owner_identity: String,
    pub bio: Option<String>,
    pub website_url: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub youtube_url: Option<String>,
}

impl SocialProfile {
    /// Non-empty links as `(label, url)` pairs, in display order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Website", &self.website_url),
            ("Instagram", &self.instagram_url),
            ("Twitter", &self.twitter_url),
            ("YouTube", &self.youtube_url),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(|u| (label, u))
        })
        .collect()
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref().map(str::trim).filter(|b| !b.is_empty())
    }
}

/// Stream data for one page render. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStream {
    pub display_name: String,
    pub playback_url: String,
    pub is_live: bool,
}
