//! Service layer for portal-service
//!
//! - Playback URL composition
//! - Channel resolution (home, direct navigation, search)

pub mod playback_url;
pub mod resolver;

pub use playback_url::{channel_playlist, compose};
pub use resolver::{ChannelResolver, RedirectTarget, Resolution};
