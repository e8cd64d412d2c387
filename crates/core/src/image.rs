//! Image file recognition

use std::path::Path;

/// Suffixes (lower-case, with the dot) that count as images
pub const IMAGE_SUFFIXES: &[&str] = &[".png", ".jpg", ".jpeg"];

/// Check whether a path names an image file.
///
/// Only the final component is inspected, case-insensitively. The file does
/// not need to exist, and its name does not need to be valid UTF-8: the
/// suffixes are ASCII, so the comparison runs on the raw name bytes.
pub fn is_image_path(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };

    let name = name.as_encoded_bytes();
    IMAGE_SUFFIXES.iter().any(|suffix| {
        let suffix = suffix.as_bytes();
        name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
    })
}
