//! Media attached to a scraped post
//!
//! The scraper stores either a single item or a Telegram media group.
//! Files are served by the backend under `/api/media/`.

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// Maximum number of items shown in a gallery before the overflow note
pub const MAX_GALLERY_ITEMS: usize = 4;

/// Kind of a media item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
    Document,
    #[default]
    #[serde(other)]
    Other,
}

impl MediaKind {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (MediaKind::Photo, Locale::Ru) => "Фото",
            (MediaKind::Video, Locale::Ru) => "Видео",
            (MediaKind::Document, Locale::Ru) => "Документ",
            (MediaKind::Other, Locale::Ru) => "Файл",
            (MediaKind::Photo, Locale::En) => "Photo",
            (MediaKind::Video, Locale::En) => "Video",
            (MediaKind::Document, Locale::En) => "Document",
            (MediaKind::Other, Locale::En) => "File",
        }
    }
}

/// A single stored file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
}

impl MediaItem {
    /// `file_path`, else `path`
    pub fn media_path(&self) -> Option<&str> {
        self.file_path.as_deref().or(self.path.as_deref())
    }

    /// Resolved download URL against `base`
    pub fn url(&self, base: &str) -> Option<String> {
        media_url(base, self.media_path())
    }

    /// Video by kind, or by file extension when the kind is unspecific
    pub fn is_video(&self) -> bool {
        match self.kind {
            MediaKind::Video => true,
            MediaKind::Photo => false,
            MediaKind::Document | MediaKind::Other => {
                self.media_path().is_some_and(is_video_url)
            }
        }
    }
}

/// A Telegram album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaGroup {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub media_list: Vec<MediaItem>,
}

/// `original_media` of a post
///
/// Groups are tried first: a group object would also satisfy the lenient
/// single-item shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OriginalMedia {
    Group(MediaGroup),
    Single(MediaItem),
}

impl OriginalMedia {
    pub fn items(&self) -> &[MediaItem] {
        match self {
            OriginalMedia::Group(group) => &group.media_list,
            OriginalMedia::Single(item) => std::slice::from_ref(item),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, OriginalMedia::Group(_))
    }

    /// Items shown in the gallery and the overflow count
    pub fn gallery(&self) -> (&[MediaItem], usize) {
        let items = self.items();
        let shown = items.len().min(MAX_GALLERY_ITEMS);
        (&items[..shown], items.len() - shown)
    }
}

/// Resolve a stored media path to a URL served by the backend
///
/// - empty or missing path: `None`
/// - `media/...`: `<base>/api/media/...`
/// - anything else: `<base>/api/media/<last path segment>`
pub fn media_url(base: &str, path: Option<&str>) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;
    let base = base.trim_end_matches('/');

    if path.starts_with("media/") {
        return Some(format!("{}/api/{}", base, path));
    }

    let file_name = path.rsplit('/').next().unwrap_or(path);
    Some(format!("{}/api/media/{}", base, file_name))
}

/// Whether a URL (or path) points at a video file
pub fn is_video_url(url: &str) -> bool {
    [".mp4", ".webm", ".mov"].iter().any(|ext| url.contains(ext))
}

/// Note shown under a truncated gallery
pub fn overflow_note(total: usize, locale: Locale) -> String {
    match locale {
        Locale::Ru => format!("Всего медиафайлов: {}", total),
        Locale::En => format!("Total media files: {}", total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8000";

    fn photo(path: &str) -> MediaItem {
        MediaItem {
            kind: MediaKind::Photo,
            file_path: Some(path.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_media_url_missing_path() {
        assert_eq!(media_url(BASE, None), None);
        assert_eq!(media_url(BASE, Some("")), None);
    }

    #[test]
    fn test_media_url_keeps_media_prefix() {
        assert_eq!(
            media_url(BASE, Some("media/2024/05/a.jpg")).as_deref(),
            Some("http://localhost:8000/api/media/2024/05/a.jpg")
        );
    }

    #[test]
    fn test_media_url_uses_file_name_for_legacy_paths() {
        assert_eq!(
            media_url(BASE, Some("/var/data/media/b.mp4")).as_deref(),
            Some("http://localhost:8000/api/media/b.mp4")
        );
        assert_eq!(
            media_url(BASE, Some("c.png")).as_deref(),
            Some("http://localhost:8000/api/media/c.png")
        );
    }

    #[test]
    fn test_media_url_trims_trailing_slash_of_base() {
        assert_eq!(
            media_url("https://cdn.example.com/", Some("x.jpg")).as_deref(),
            Some("https://cdn.example.com/api/media/x.jpg")
        );
    }

    #[test]
    fn test_is_video_url() {
        assert!(is_video_url("http://h/api/media/a.mp4"));
        assert!(is_video_url("clip.webm"));
        assert!(is_video_url("clip.MOV.mov"));
        assert!(!is_video_url("pic.jpg"));
    }

    #[test]
    fn test_media_path_prefers_file_path() {
        let item = MediaItem {
            file_path: Some("media/a.jpg".to_string()),
            path: Some("/old/a.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(item.media_path(), Some("media/a.jpg"));

        let legacy = MediaItem {
            path: Some("/old/b.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(legacy.media_path(), Some("/old/b.jpg"));
    }

    #[test]
    fn test_is_video_by_kind_or_extension() {
        let video = MediaItem {
            kind: MediaKind::Video,
            ..Default::default()
        };
        assert!(video.is_video());

        let doc = MediaItem {
            kind: MediaKind::Document,
            path: Some("movie.mp4".to_string()),
            ..Default::default()
        };
        assert!(doc.is_video());
        assert!(!photo("a.jpg").is_video());
    }

    #[test]
    fn test_single_item_deserializes() {
        let media: OriginalMedia =
            serde_json::from_str(r#"{"type": "photo", "file_path": "media/a.jpg"}"#).unwrap();
        assert!(!media.is_group());
        assert_eq!(media.items().len(), 1);
        assert_eq!(media.items()[0].kind, MediaKind::Photo);
    }

    #[test]
    fn test_unknown_kind_is_other() {
        let item: MediaItem = serde_json::from_str(r#"{"type": "sticker"}"#).unwrap();
        assert_eq!(item.kind, MediaKind::Other);
    }

    #[test]
    fn test_gallery_caps_at_four() {
        let media = OriginalMedia::Group(MediaGroup {
            kind: Some("media_group".to_string()),
            media_list: (0..6).map(|i| photo(&format!("media/{}.jpg", i))).collect(),
        });
        let (shown, hidden) = media.gallery();
        assert_eq!(shown.len(), MAX_GALLERY_ITEMS);
        assert_eq!(hidden, 2);
        assert_eq!(overflow_note(media.items().len(), Locale::Ru), "Всего медиафайлов: 6");
    }

    #[test]
    fn test_small_gallery_has_no_overflow() {
        let media = OriginalMedia::Single(photo("a.jpg"));
        let (shown, hidden) = media.gallery();
        assert_eq!(shown.len(), 1);
        assert_eq!(hidden, 0);
    }
}
