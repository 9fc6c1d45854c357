/// Marker character prefixing hidden entries on Unix-like platforms.
pub(crate) const HIDDEN_MARKER: char = '.';

/// Returns `true` when `name` identifies a hidden directory entry.
#[must_use]
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}
