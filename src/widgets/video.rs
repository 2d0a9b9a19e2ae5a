//! Lazy Vimeo embeds.

use crate::constants::video::{PLAYER_BASE, PLAYER_QUERY, THUMBNAIL_BASE};

/// A numeric Vimeo video id taken from `data-vimeo-id`. It is spliced into
/// URLs and placeholder markup, so anything but ASCII digits is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VimeoId(String);

impl VimeoId {
    pub fn parse(raw: &str) -> Option<Self> {
        let id = raw.trim();
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn thumbnail_url(&self) -> String {
        format!("{THUMBNAIL_BASE}{}.jpg", self.0)
    }

    pub fn player_url(&self) -> String {
        format!("{PLAYER_BASE}{}?{PLAYER_QUERY}", self.0)
    }

    pub fn player_title(&self) -> String {
        format!("Video {}", self.0)
    }
}

/// Placeholder contents once the thumbnail has loaded: the image plus a
/// centered play badge.
pub fn thumbnail_markup(thumbnail_url: &str) -> String {
    format!(
        r#"<img src="{thumbnail_url}" alt="Video thumbnail" class="w-full h-full object-cover">
<div class="absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2 bg-black bg-opacity-50 rounded-full p-6 group-hover:bg-opacity-70 transition-all duration-300">
    <svg class="w-12 h-12 text-white ml-1" fill="currentColor" viewBox="0 0 24 24">
        <path d="M8 5v14l11-7z"/>
    </svg>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls() {
        let id = VimeoId::parse(" 76979871 ").unwrap();
        assert_eq!(id.as_str(), "76979871");
        assert_eq!(id.thumbnail_url(), "https://vumbnail.com/76979871.jpg");
        assert_eq!(
            id.player_url(),
            "https://player.vimeo.com/video/76979871?badge=0&autopause=0&autoplay=1&player_id=0&app_id=58479"
        );
        assert_eq!(id.player_title(), "Video 76979871");
    }

    #[test]
    fn empty_id_is_ignored() {
        assert_eq!(VimeoId::parse("   "), None);
    }

    #[test]
    fn non_numeric_id_is_ignored() {
        assert_eq!(VimeoId::parse(r#"1"><img src=x onerror=alert(1)>"#), None);
        assert_eq!(VimeoId::parse("12 34"), None);
        assert_eq!(VimeoId::parse("abc"), None);
    }

    #[test]
    fn markup_embeds_thumbnail() {
        let html = thumbnail_markup("https://vumbnail.com/1.jpg");
        assert!(html.starts_with(r#"<img src="https://vumbnail.com/1.jpg""#));
        assert!(html.contains("<svg"));
    }
}
