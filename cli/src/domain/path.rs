//! Path composition for config files and volume host directories.

/// Separator inserted between a base path and a name.
pub const SEPARATOR: char = '/';

/// Join `base`, `name`, and `extension` into a single path string.
///
/// A separator is inserted between `base` and `name` unless `base` already
/// ends with one or `name` already starts with one. The extension is
/// appended verbatim (pass `""` for none).
///
/// Pure string composition: no normalization, no I/O.
#[must_use]
pub fn build_path(base: &str, name: &str, extension: &str) -> String {
    if base.ends_with(SEPARATOR) || name.starts_with(SEPARATOR) {
        format!("{base}{name}{extension}")
    } else {
        format!("{base}{SEPARATOR}{name}{extension}")
    }
}

/// Returns `true` if `path` is absolute (starts with `/`).
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}
