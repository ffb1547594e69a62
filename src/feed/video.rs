use std::sync::LazyLock;

use regex::Regex;

// Checked in order; the first hit wins.
static VIDEO_ID_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"youtu\.be/([A-Za-z0-9_-]{11})").expect("short link regex is valid"),
        Regex::new(r"v=([A-Za-z0-9_-]{11})").expect("watch regex is valid"),
        Regex::new(r"embed/([A-Za-z0-9_-]{11})").expect("embed regex is valid"),
    ]
});

/// Pulls the 11-character YouTube video id out of a short link, a watch URL
/// or an embed URL.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}
