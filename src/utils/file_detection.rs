//! Filename classification for beatmap folder entries.

use std::collections::HashSet;
use std::path::Path;

/// Extracts a lowercased extension from a file name, if it has one.
pub fn extension_lowercase(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Checks whether a file name carries the configured descriptor extension.
pub fn is_descriptor_file(file_name: &str, descriptor_extension: &str) -> bool {
    extension_lowercase(file_name).is_some_and(|ext| ext.eq_ignore_ascii_case(descriptor_extension))
}

/// Checks whether a file name's extension is in the recognized video set.
/// The set must hold lowercased extensions, making the match case-insensitive.
pub fn is_video_file(file_name: &str, video_extensions: &HashSet<String>) -> bool {
    extension_lowercase(file_name).is_some_and(|ext| video_extensions.contains(&ext))
}
