//! Project name validation
//!
//! The rules are conservative on purpose: a name accepted here must be usable
//! as a directory name on every common filesystem, not just the local one.

/// Characters that are never allowed in a project directory name
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Device names reserved on Windows, compared case-insensitively
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Check whether `name` can be used as the directory name of a new project
pub fn is_valid_project_name(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }

    if name
        .chars()
        .any(|c| INVALID_CHARS.contains(&c) || ('\u{0}'..='\u{1f}').contains(&c))
    {
        return false;
    }

    !RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}
