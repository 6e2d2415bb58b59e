//! Single-wildcard name matching for `ls` filters.
//!
//! `*` matches any run of characters (including the empty run); every other
//! character — `.` included — matches itself literally. This is deliberately
//! not a glob engine: no `?`, no character classes, no escapes.

/// Match a name against a single-`*` wildcard pattern.
pub fn wildcard_match(pattern: &str, input: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let input: Vec<char> = input.chars().collect();
    match_at(&pattern, 0, &input, 0)
}

/// Recursive matching with backtracking for `*`.
fn match_at(pattern: &[char], pi: usize, input: &[char], ii: usize) -> bool {
    if pi >= pattern.len() {
        return ii >= input.len();
    }

    if pattern[pi] == '*' {
        // Collapse consecutive stars.
        let mut next = pi;
        while next < pattern.len() && pattern[next] == '*' {
            next += 1;
        }
        if next >= pattern.len() {
            return true;
        }
        for skip in 0..=(input.len() - ii) {
            if match_at(pattern, next, input, ii + skip) {
                return true;
            }
        }
        return false;
    }

    ii < input.len() && pattern[pi] == input[ii] && match_at(pattern, pi + 1, input, ii + 1)
}
