// crates/shared-kernel/src/path.rs

/// Separator appended to directory paths and expected on the wire.
pub const DIRECTORY_SEPARATOR: char = '/';

/// Whether `c` separates path segments on any host an entry may come from.
pub const fn is_separator(c: char) -> bool {
    matches!(c, '/' | '\\')
}

/// Whether a directory path still lacks its trailing `/`.
///
/// Only the final character is inspected; repeated separators inside the
/// path are never collapsed.
#[inline]
pub fn needs_trailing_separator(path: &str, is_directory: bool) -> bool {
    is_directory && !path.ends_with(DIRECTORY_SEPARATOR)
}

/// Applies the directory rule, appending in place when required.
pub fn normalize_entry_path(mut path: String, is_directory: bool) -> String {
    if needs_trailing_separator(&path, is_directory) {
        path.push(DIRECTORY_SEPARATOR);
    }
    path
}
