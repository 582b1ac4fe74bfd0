//! Product images
//!
//! Images travel to the API as base64 content. Uploads are normalised to a
//! data URL first and then, depending on the configured [`ImageEncoding`],
//! optionally stripped back down to the bare payload.

use std::borrow::Cow;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Prefix attached to base64 content that arrives without one.
pub const DEFAULT_IMAGE_PREFIX: &str = "data:image/png;base64,";

/// Placeholder shown when a product image is missing or cannot be rendered.
pub const FALLBACK_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDgiIGhlaWdodD0iNDgiIHZpZXdCb3g9IjAgMCA0OCA0OCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCBmaWxsPSIjZjJmMmYyIiB3aWR0aD0iNDgiIGhlaWdodD0iNDgiIHJ4PSI4Ii8+PHBhdGggZD0iTTI5LjUgMTYuNUMyOC4xIDQ0IDkuOSA0NCA4LjUgMTYuNSIgZmlsbD0iI2Q1ZDVkNSIvPjwvc3ZnPg==";

/// How image content is sent to the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageEncoding {
    /// Send the full `data:image/...;base64,` URL.
    DataUrl,

    /// Send only the base64 payload.
    #[default]
    RawBase64,
}

/// Normalise image content for upload under `encoding`.
///
/// Empty input stays empty. Input without a `data:image` prefix is assumed to
/// be PNG content.
pub fn normalize_for_upload(input: &str, encoding: ImageEncoding) -> String {
    if input.is_empty() {
        return String::new();
    }

    let with_prefix = if input.starts_with("data:image") {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!("{DEFAULT_IMAGE_PREFIX}{input}"))
    };

    match encoding {
        ImageEncoding::DataUrl => with_prefix.into_owned(),
        ImageEncoding::RawBase64 => with_prefix
            .split_once(',')
            .map_or_else(String::new, |(_, payload)| payload.to_string()),
    }
}

/// Encode raw bytes as a data URL.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

/// Image MIME type for a file extension, if it names an image format.
pub fn mime_from_extension(extension: &str) -> Option<&'static str> {
    let mime = match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jfif" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => return None,
    };

    Some(mime)
}

/// A stored product image reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRef<'a> {
    /// Full `data:image/...` URL
    DataUrl(&'a str),

    /// Base64 content without a prefix
    RawBase64(&'a str),

    /// Browser `blob:` reference
    Blob(&'a str),

    /// Absolute URL
    Remote(&'a str),
}

impl<'a> ImageRef<'a> {
    /// Classify a stored `imgUrl`. Empty values have no image.
    pub fn classify(value: &'a str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }

        let image = if value.starts_with("data:image") {
            Self::DataUrl(value)
        } else if looks_like_raw_base64(value) {
            Self::RawBase64(value)
        } else if value.starts_with("blob:") {
            Self::Blob(value)
        } else {
            Self::Remote(value)
        };

        Some(image)
    }

    /// A form that can be rendered directly.
    pub fn renderable(self) -> Cow<'a, str> {
        match self {
            Self::RawBase64(content) => Cow::Owned(format!("{DEFAULT_IMAGE_PREFIX}{content}")),
            Self::DataUrl(value) | Self::Blob(value) | Self::Remote(value) => Cow::Borrowed(value),
        }
    }

    /// Short label for listings.
    pub fn kind(self) -> &'static str {
        match self {
            Self::DataUrl(_) => "data-url",
            Self::RawBase64(_) => "base64",
            Self::Blob(_) => "blob",
            Self::Remote(_) => "url",
        }
    }
}

/// Renderable image for an optional stored reference, or the fallback.
pub fn renderable_or_fallback(img_url: Option<&str>) -> Cow<'_, str> {
    img_url
        .and_then(ImageRef::classify)
        .map_or(Cow::Borrowed(FALLBACK_IMAGE), ImageRef::renderable)
}

fn looks_like_raw_base64(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=' | '\r' | '\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_base64_gets_default_prefix_for_data_url_policy() {
        assert_eq!(
            normalize_for_upload("iVBORw0KGgo=", ImageEncoding::DataUrl),
            "data:image/png;base64,iVBORw0KGgo="
        );
    }

    #[test]
    fn data_url_is_stripped_for_raw_policy() {
        assert_eq!(
            normalize_for_upload("data:image/jpeg;base64,/9j/4AAQ", ImageEncoding::RawBase64),
            "/9j/4AAQ"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_for_upload("", ImageEncoding::DataUrl), "");
        assert_eq!(normalize_for_upload("", ImageEncoding::RawBase64), "");
    }

    #[test]
    fn classifies_stored_references() {
        assert!(matches!(
            ImageRef::classify("https://cdn.example/a.png"),
            Some(ImageRef::Remote(_))
        ));
        assert!(matches!(
            ImageRef::classify("blob:https://app/1234"),
            Some(ImageRef::Blob(_))
        ));
        assert!(matches!(
            ImageRef::classify("data:image/gif;base64,R0lG"),
            Some(ImageRef::DataUrl(_))
        ));
        assert!(matches!(
            ImageRef::classify("R0lGODlh\r\nAQAB"),
            Some(ImageRef::RawBase64(_))
        ));
        assert_eq!(ImageRef::classify(""), None);
    }

    #[test]
    fn raw_base64_renders_with_prefix() {
        let rendered = ImageRef::RawBase64("AAAA").renderable();

        assert_eq!(rendered, "data:image/png;base64,AAAA");
    }

    #[test]
    fn missing_image_renders_fallback() {
        assert_eq!(renderable_or_fallback(None), FALLBACK_IMAGE);
        assert_eq!(renderable_or_fallback(Some("")), FALLBACK_IMAGE);
    }

    #[test]
    fn bytes_encode_to_data_url() {
        assert_eq!(to_data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn mime_is_resolved_from_extension() {
        assert_eq!(mime_from_extension("JPG"), Some("image/jpeg"));
        assert_eq!(mime_from_extension("txt"), None);
    }
}
