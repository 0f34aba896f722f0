#![allow(dead_code)]
//! Shared fixtures for portal-service integration tests

use portal_service::config::{NoticeSettings, PlaybackConfig};
use portal_service::db::ChannelDirectory;
use portal_service::error::{AppError, Result};
use portal_service::models::{Channel, SocialProfile};
use portal_service::notice::NoticeCookie;
use portal_service::services::ChannelResolver;
use std::sync::Arc;

/// In-memory stand-in for the panel's channel tables
#[derive(Default)]
pub struct InMemoryDirectory {
    channels: Vec<Channel>,
    profiles: Vec<SocialProfile>,
    unavailable: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, identity: &str, is_live: bool, url: Option<&str>) -> Self {
        self.channels.push(Channel {
            owner_identity: identity.to_string(),
            is_live,
            explicit_playback_url: url.map(str::to_string),
        });
        self
    }

    pub fn with_profile(mut self, profile: SocialProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    /// Every lookup fails as if the database were down.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(AppError::Database("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ChannelDirectory for InMemoryDirectory {
    async fn find_exact(&self, identity: &str) -> Result<Option<Channel>> {
        self.check()?;
        Ok(self
            .channels
            .iter()
            .find(|c| c.owner_identity == identity)
            .cloned())
    }

    async fn find_case_insensitive(&self, identity: &str) -> Result<Option<Channel>> {
        self.check()?;
        let wanted = identity.to_uppercase();
        Ok(self
            .channels
            .iter()
            .find(|c| c.owner_identity.to_uppercase() == wanted)
            .cloned())
    }

    async fn social_profile(&self, identity: &str) -> Result<Option<SocialProfile>> {
        self.check()?;
        Ok(self
            .profiles
            .iter()
            .find(|p| p.owner_identity == identity)
            .cloned())
    }

    async fn health_check(&self) -> Result<()> {
        self.check()
    }
}

pub fn playback() -> PlaybackConfig {
    PlaybackConfig {
        base_url: "https://x.test/hls".to_string(),
        program_path: "program".to_string(),
        official_channel_name: "Official Channel".to_string(),
        promo_playlist: "promo.m3u8".to_string(),
    }
}

pub fn resolver(directory: InMemoryDirectory) -> ChannelResolver {
    ChannelResolver::new(Arc::new(directory), playback())
}

pub fn notices() -> NoticeCookie {
    NoticeCookie::new(NoticeSettings::default())
}
