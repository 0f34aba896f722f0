//! HTML pages for the portal
//!
//! Rendered with maud; every interpolated value is escaped.

use crate::models::{ResolvedStream, SocialProfile};
use crate::notice::Notice;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const HLS_JS: &str = "https://cdn.jsdelivr.net/npm/hls.js@1";

const PLAYER_BOOTSTRAP: &str = r#"
(function () {
  var video = document.getElementById('mainStream');
  if (!video) return;
  var src = video.dataset.src;
  if (video.canPlayType('application/vnd.apple.mpegurl')) {
    video.src = src;
  } else if (window.Hls && window.Hls.isSupported()) {
    var hls = new window.Hls();
    hls.loadSource(src);
    hls.attachMedia(video);
  }
})();
"#;

/// Everything the stream page template needs
#[derive(Debug, Clone)]
pub struct PageContext {
    pub stream: ResolvedStream,
    pub is_home: bool,
    /// Canonical owner identity when showing a broadcaster's channel
    pub streamer_name: Option<String>,
    pub profile: Option<SocialProfile>,
    pub notice: Option<Notice>,
}

impl PageContext {
    pub fn home(stream: ResolvedStream, notice: Option<Notice>) -> Self {
        Self {
            stream,
            is_home: true,
            streamer_name: None,
            profile: None,
            notice,
        }
    }

    pub fn channel(
        stream: ResolvedStream,
        streamer_name: &str,
        profile: Option<SocialProfile>,
        notice: Option<Notice>,
    ) -> Self {
        Self {
            stream,
            is_home: false,
            streamer_name: Some(streamer_name.to_string()),
            profile,
            notice,
        }
    }
}

pub fn stream_page(ctx: &PageContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (ctx.stream.display_name) }
                script src=(HLS_JS) defer {}
            }
            body {
                (navbar())
                @if let Some(notice) = &ctx.notice {
                    div #notification-container class={ "notice notice-" (notice.level.as_str()) } role="alert" {
                        (notice.message)
                    }
                }
                main class="stream" data-streamer=[ctx.streamer_name.as_deref()] data-home=(if ctx.is_home { "true" } else { "false" }) {
                    header class="stream-header" {
                        h1 { (ctx.stream.display_name) }
                        @if ctx.stream.is_live {
                            span class="badge badge-live" { "LIVE" }
                        } @else {
                            span class="badge badge-offline" { "OFFLINE" }
                        }
                    }
                    @if ctx.stream.is_live {
                        video #mainStream controls autoplay muted playsinline data-src=(ctx.stream.playback_url) {
                            source src=(ctx.stream.playback_url) type="application/x-mpegURL";
                        }
                    } @else {
                        p class="offline" { "This channel is not broadcasting right now." }
                    }
                    @if let Some(profile) = &ctx.profile {
                        (profile_panel(profile))
                    }
                }
                script { (PreEscaped(PLAYER_BOOTSTRAP)) }
            }
        }
    }
}

fn navbar() -> Markup {
    html! {
        nav class="navbar" {
            a class="brand" href="/" { "Live" }
            form class="search" action="/search/" method="get" {
                input #searchInput type="search" name="q" placeholder="Search channel" autocomplete="off";
                button type="submit" { "Search" }
            }
        }
    }
}

fn profile_panel(profile: &SocialProfile) -> Markup {
    let links = profile.links();
    html! {
        aside class="profile" {
            @if let Some(bio) = profile.bio() {
                p class="bio" { (bio) }
            }
            @if !links.is_empty() {
                ul class="social-links" {
                    @for (label, url) in &links {
                        li { a href=(url) target="_blank" rel="noopener" { (label) } }
                    }
                }
            }
        }
    }
}
