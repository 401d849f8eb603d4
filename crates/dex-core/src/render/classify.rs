//! URL classification by suffix.

const AUDIO_SUFFIXES: &[&str] = &[".ogg", ".mp3"];
const IMAGE_SUFFIXES: &[&str] = &[".gif", ".png", ".svg", ".jpg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    Audio,
    Image,
    Link,
}

/// Strings starting with `http` are treated as URLs; nothing else is checked.
pub fn looks_like_url(s: &str) -> bool {
    s.starts_with("http")
}

/// Audio suffixes win over image suffixes; anything else is a plain link.
pub fn classify_url(url: &str) -> UrlKind {
    let lower = url.to_ascii_lowercase();
    let has_suffix = |suffixes: &[&str]| suffixes.iter().any(|s| lower.ends_with(s));
    if has_suffix(AUDIO_SUFFIXES) {
        UrlKind::Audio
    } else if has_suffix(IMAGE_SUFFIXES) {
        UrlKind::Image
    } else {
        UrlKind::Link
    }
}
