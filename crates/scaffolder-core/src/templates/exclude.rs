//! Exclusion of development artifacts from the template tree
//!
//! Patterns are matched against single path segments. A pattern is either a
//! literal segment name or contains `*`, which stands for any run of
//! characters (including none). There is no `?`, no character classes and no
//! recursive `**`: excluding a directory segment already excludes everything
//! below it.

use std::path::Path;

/// Artifacts never copied into a new project
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    "node_modules",
    ".git",
    ".DS_Store",
    "dist",
    "out",
    ".cache",
    "coverage",
    ".env",
    ".env.local",
    ".env.*.local",
    "*.log",
    ".eslintcache",
    "*.tsbuildinfo",
    ".idea",
];

/// A single segment pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum SegmentPattern {
    Literal(String),
    /// Pattern split on `*`; always has at least two parts
    Wildcard(Vec<String>),
}

impl SegmentPattern {
    fn parse(pattern: &str) -> Self {
        if pattern.contains('*') {
            SegmentPattern::Wildcard(pattern.split('*').map(str::to_string).collect())
        } else {
            SegmentPattern::Literal(pattern.to_string())
        }
    }

    fn matches(&self, segment: &str) -> bool {
        match self {
            SegmentPattern::Literal(literal) => literal == segment,
            SegmentPattern::Wildcard(parts) => wildcard_match(parts, segment),
        }
    }
}

/// Anchored match of `segment` against a pattern already split on `*`
fn wildcard_match(parts: &[String], segment: &str) -> bool {
    let (first, rest) = match parts.split_first() {
        Some(split) => split,
        None => return false,
    };
    let (last, middle) = match rest.split_last() {
        Some(split) => split,
        None => return first == segment,
    };

    if segment.len() < first.len() + last.len()
        || !segment.starts_with(first.as_str())
        || !segment.ends_with(last.as_str())
    {
        return false;
    }

    // The remaining window sits between the fixed prefix and suffix.
    let mut window = &segment[first.len()..segment.len() - last.len()];
    for part in middle {
        match window.find(part.as_str()) {
            Some(idx) => window = &window[idx + part.len()..],
            None => return false,
        }
    }
    true
}

/// Immutable set of exclusion patterns consulted for every template entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPatterns {
    patterns: Vec<SegmentPattern>,
}

impl ExclusionPatterns {
    /// Build a pattern set from an explicit list
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| SegmentPattern::parse(p.as_ref()))
                .collect(),
        }
    }

    /// Check whether a single path segment matches any pattern
    pub fn matches_segment(&self, segment: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(segment))
    }

    /// Check whether `candidate` should be skipped when copying from `root`.
    ///
    /// Only the part of `candidate` below `root` is considered; the root itself
    /// is never excluded.
    pub fn should_exclude(&self, candidate: &Path, root: &Path) -> bool {
        let relative = candidate.strip_prefix(root).unwrap_or(candidate);

        relative
            .iter()
            .any(|segment| self.matches_segment(&segment.to_string_lossy()))
    }
}

impl Default for ExclusionPatterns {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDE_PATTERNS)
    }
}
