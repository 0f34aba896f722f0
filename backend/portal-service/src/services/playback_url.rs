//! Playback URL composition
//!
//! Joins the configured HLS base, the program path and a playlist filename
//! with exactly one `/` between segments. Empty segments are skipped, so a
//! missing setting degrades the URL instead of failing the request.

/// Build `base/program/filename` with normalized separators.
pub fn compose(base_url: &str, program_path: &str, filename: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let rest = [program_path, filename]
        .into_iter()
        .map(|segment| segment.trim().trim_matches('/'))
        .filter(|segment| !segment.is_empty());

    let mut url = base.to_string();
    for segment in rest {
        if !url.is_empty() {
            url.push('/');
        }
        url.push_str(segment);
    }
    url
}

/// Playlist filename published by the media server for a channel.
pub fn channel_playlist(identity: &str) -> String {
    format!("{}.m3u8", identity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_three_segments() {
        assert_eq!(
            compose("https://x.test/hls", "program", "demo.m3u8"),
            "https://x.test/hls/program/demo.m3u8"
        );
    }

    #[test]
    fn normalizes_duplicate_slashes() {
        assert_eq!(
            compose("https://x.test/hls/", "/program/", "/demo.m3u8"),
            "https://x.test/hls/program/demo.m3u8"
        );
        assert_eq!(
            compose("https://x.test/hls///", "//program", "demo.m3u8"),
            "https://x.test/hls/program/demo.m3u8"
        );
    }

    #[test]
    fn keeps_scheme_separator() {
        assert_eq!(
            compose("http://localhost:8080/hls", "program", "a.m3u8"),
            "http://localhost:8080/hls/program/a.m3u8"
        );
    }

    #[test]
    fn nested_program_path_is_kept() {
        assert_eq!(
            compose("https://x.test", "/live/program/", "a.m3u8"),
            "https://x.test/live/program/a.m3u8"
        );
    }

    #[test]
    fn missing_configuration_degrades() {
        assert_eq!(compose("", "program", "demo.m3u8"), "program/demo.m3u8");
        assert_eq!(compose("https://x.test/hls", "", "demo.m3u8"), "https://x.test/hls/demo.m3u8");
        assert_eq!(compose("", "", "demo.m3u8"), "demo.m3u8");
    }

    #[test]
    fn playlist_name() {
        assert_eq!(channel_playlist("Alice"), "Alice.m3u8");
    }
}
