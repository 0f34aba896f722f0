//! Channel resolution
//!
//! Decides what a request shows: the official channel, a broadcaster's
//! channel, or a redirect back home with a notice. Search matches owner
//! names ignoring case; direct navigation requires the exact stored name so
//! bookmarked URLs keep resolving to the same channel.

use super::playback_url::{channel_playlist, compose};
use crate::config::PlaybackConfig;
use crate::db::ChannelDirectory;
use crate::error::Result;
use crate::metrics::record_lookup;
use crate::models::{Channel, ResolvedStream, SocialProfile};
use crate::notice::Notice;
use std::sync::Arc;
use tracing::{debug, info};

pub const HOME_PATH: &str = "/";

/// Outcome of direct navigation to `/stream/<name>/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ResolvedStream),
    NotFound,
}

/// Where a request should be redirected, and what to tell the user there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub location: String,
    pub notice: Option<Notice>,
}

impl RedirectTarget {
    pub fn home() -> Self {
        Self {
            location: HOME_PATH.to_string(),
            notice: None,
        }
    }

    pub fn home_with(notice: Notice) -> Self {
        Self {
            location: HOME_PATH.to_string(),
            notice: Some(notice),
        }
    }

    /// Canonical page of the channel owned by `identity`.
    pub fn channel(identity: &str) -> Self {
        Self {
            location: channel_path(identity),
            notice: None,
        }
    }
}

/// Path of a channel page, with the identity percent-encoded as one segment.
pub fn channel_path(identity: &str) -> String {
    format!("/stream/{}/", urlencoding::encode(identity))
}

/// Resolves requests against the channel directory
#[derive(Clone)]
pub struct ChannelResolver {
    directory: Arc<dyn ChannelDirectory>,
    playback: PlaybackConfig,
}

impl ChannelResolver {
    pub fn new(directory: Arc<dyn ChannelDirectory>, playback: PlaybackConfig) -> Self {
        Self {
            directory,
            playback,
        }
    }

    pub fn playback(&self) -> &PlaybackConfig {
        &self.playback
    }

    pub fn directory(&self) -> &Arc<dyn ChannelDirectory> {
        &self.directory
    }

    /// The official channel shown on the home page. No lookup involved.
    pub fn resolve_home(&self) -> ResolvedStream {
        ResolvedStream {
            display_name: self.playback.official_channel_name.clone(),
            playback_url: compose(&self.playback.base_url, "", &self.playback.promo_playlist),
            is_live: true,
        }
    }

    /// Exact, case-sensitive lookup of `name`.
    pub async fn resolve_by_name(&self, name: &str) -> Result<Resolution> {
        match self.directory.find_exact(name).await? {
            Some(channel) => {
                record_lookup("direct", "found");
                debug!(
                    channel = %channel.owner_identity,
                    live = channel.is_live,
                    "channel resolved"
                );
                Ok(Resolution::Found(self.stream_for(&channel)))
            }
            None => {
                record_lookup("direct", "not_found");
                info!(channel = name, "direct navigation to unknown channel");
                Ok(Resolution::NotFound)
            }
        }
    }

    /// Case-insensitive search; redirects to the canonical channel page.
    pub async fn search(&self, query: &str) -> Result<RedirectTarget> {
        let query = query.trim();
        if query.is_empty() {
            record_lookup("search", "empty");
            return Ok(RedirectTarget::home());
        }

        match self.directory.find_case_insensitive(query).await? {
            Some(channel) => {
                record_lookup("search", "found");
                debug!(query, channel = %channel.owner_identity, "search matched channel");
                Ok(RedirectTarget::channel(&channel.owner_identity))
            }
            None => {
                record_lookup("search", "not_found");
                info!(query, "search found no channel");
                Ok(RedirectTarget::home_with(Notice::search_miss(query)))
            }
        }
    }

    /// Social profile rendered next to a channel, if one exists.
    pub async fn social_profile(&self, identity: &str) -> Result<Option<SocialProfile>> {
        self.directory.social_profile(identity).await
    }

    fn stream_for(&self, channel: &Channel) -> ResolvedStream {
        let playback_url = match channel.playback_override() {
            Some(url) => url.to_string(),
            None => compose(
                &self.playback.base_url,
                &self.playback.program_path,
                &channel_playlist(&channel.owner_identity),
            ),
        };

        ResolvedStream {
            display_name: format!("Channel of {}", channel.owner_identity),
            playback_url,
            is_live: channel.is_live,
        }
    }
}
