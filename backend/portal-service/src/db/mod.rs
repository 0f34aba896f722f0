//! Read-only access to the channel tables shared with the streaming panel.
//!
//! The schema is owned and migrated elsewhere. This module only issues
//! `SELECT` statements and does not validate schema drift.

mod channel_repo;

pub use channel_repo::PgChannelDirectory;

use crate::error::Result;
use crate::models::{Channel, SocialProfile};

/// Lookup interface over the externally managed channel records.
#[async_trait::async_trait]
pub trait ChannelDirectory: Send + Sync {
    /// Channel whose owner identity equals `identity` exactly (case-sensitive).
    async fn find_exact(&self, identity: &str) -> Result<Option<Channel>>;

    /// Channel whose owner identity equals `identity` ignoring case.
    /// When several identities fold to the same value, the oldest channel wins.
    async fn find_case_insensitive(&self, identity: &str) -> Result<Option<Channel>>;

    /// Social profile attached to `identity`, if the panel created one.
    async fn social_profile(&self, identity: &str) -> Result<Option<SocialProfile>>;

    /// Verify the backing store is reachable.
    async fn health_check(&self) -> Result<()>;
}
