//! Split markers for the relative-path heuristic.
//!
//! Only the listed markers are recognized. Addresses under other top-level
//! domains (`.org`, `.net`, ...) have no relative path unless a marker is added.

use serde::{Deserialize, Serialize};

/// Markers used when no list is configured.
pub const DEFAULT_MARKERS: [&str; 4] = [".it/", ".com/", "hydra://", "?"];

/// Ordered list of literal split markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathMarkers(Vec<String>);

impl PathMarkers {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(markers.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// See [`split_after_first`].
    pub fn split_after_first<'a>(&self, input: &'a str) -> Option<&'a str> {
        split_after_first(input, &self.0)
    }
}

impl Default for PathMarkers {
    fn default() -> Self {
        Self::new(DEFAULT_MARKERS)
    }
}

/// Splits `input` on every marker occurrence and returns the second piece:
/// the text between the earliest marker and the next marker after it (or the
/// end of the input). `None` when no marker occurs.
///
/// At a given position the marker listed first wins. Empty markers are ignored.
pub fn split_after_first<'a, M: AsRef<str>>(input: &'a str, markers: &[M]) -> Option<&'a str> {
    let (pos, len) = earliest(input, 0, markers)?;
    let start = pos + len;
    let end = earliest(input, start, markers).map_or(input.len(), |(next, _)| next);
    Some(&input[start..end])
}

/// Position and length of the earliest marker at or after `from`.
fn earliest<M: AsRef<str>>(input: &str, from: usize, markers: &[M]) -> Option<(usize, usize)> {
    let haystack = &input[from..];
    let mut best: Option<(usize, usize)> = None;
    for marker in markers.iter().map(AsRef::as_ref) {
        if marker.is_empty() {
            continue;
        }
        if let Some(offset) = haystack.find(marker) {
            let pos = from + offset;
            if best.map_or(true, |(best_pos, _)| pos < best_pos) {
                best = Some((pos, marker.len()));
            }
        }
    }
    best
}
