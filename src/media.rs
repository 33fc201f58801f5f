use std::path::Path;

const MEDIA_EXTENSIONS: [&str; 10] = [
    ".jpg", ".png", ".avi", ".mkv", ".bmp", ".gif", ".wmv", ".mp3", ".flac", ".mp4",
];

/// Case-insensitive check against the previewable image, video and audio
/// extensions. Extensions carry their leading dot (`".jpg"`).
pub fn is_media(extension: Option<&str>) -> bool {
    let Some(ext) = extension else {
        return false;
    };
    if ext.is_empty() {
        return false;
    }
    let ext = ext.to_ascii_lowercase();
    MEDIA_EXTENSIONS.contains(&ext.as_str())
}

/// The dotted extension of `path`, or `None` when it has none.
pub fn extension_of(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(|s| format!(".{s}"))
}
