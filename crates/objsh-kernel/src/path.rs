//! Path expression parsing.
//!
//! A path string is a sequence of `.`-separated segments; a segment is an
//! identifier optionally followed by chained `[index]` suffixes, so
//! `a.b[2][0].c` descends key `a`, key `b`, index `2`, index `0`, key `c`.
//!
//! Parsing is permissive: a segment with malformed bracket syntax (an
//! unterminated `[`, a nested `[`, an empty index) is kept whole as a
//! literal key rather than rejected. Paths are re-parsed on every call —
//! the environment may have changed shape between calls, so nothing here
//! is cached.

/// One traversal step of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Descend by member name.
    Key(String),
    /// Descend by bracket index token. The token is an arbitrary
    /// identifier/number; sequences interpret it as a decimal index,
    /// mappings as a member name.
    Index(String),
}

impl Step {
    /// The raw member token, whichever kind of step this is.
    pub fn token(&self) -> &str {
        match self {
            Step::Key(t) | Step::Index(t) => t,
        }
    }
}

/// Parse a path string into traversal steps.
///
/// The empty string parses to zero steps — a reference to the whole
/// environment.
pub fn parse(text: &str) -> Vec<Step> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('.').flat_map(parse_segment).collect()
}

/// Parse a single segment into one key step plus its index steps.
fn parse_segment(segment: &str) -> Vec<Step> {
    match try_parse_bracketed(segment) {
        Some(steps) => steps,
        // Malformed suffixes are literal characters of the key.
        None => vec![Step::Key(segment.to_string())],
    }
}

fn try_parse_bracketed(segment: &str) -> Option<Vec<Step>> {
    let open = segment.find('[')?;
    if open == 0 {
        return None;
    }
    let mut steps = vec![Step::Key(segment[..open].to_string())];
    let mut rest = &segment[open..];
    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return None;
        }
        let close = rest.find(']')?;
        let token = &rest[1..close];
        if token.is_empty() || token.contains('[') {
            return None;
        }
        steps.push(Step::Index(token.to_string()));
        rest = &rest[close + 1..];
    }
    Some(steps)
}

/// Split a path on its last `.` into `(parent, leaf)`.
///
/// A single-segment path has the empty parent (the environment root).
pub fn split_leaf(text: &str) -> (&str, &str) {
    match text.rfind('.') {
        Some(pos) => (&text[..pos], &text[pos + 1..]),
        None => ("", text),
    }
}

/// Build the cwd-relative spelling of a path.
pub fn join(cwd: &str, path: &str) -> String {
    if cwd.is_empty() {
        path.to_string()
    } else {
        format!("{cwd}.{path}")
    }
}
