//! ls — list member names, with an optional single-`*` filter.

use std::sync::OnceLock;

use objsh_types::Node;
use regex::Regex;

use crate::scope::read_scoped;
use crate::shell::Shell;
use crate::wildcard::wildcard_match;

fn short_flag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-[A-Za-z]+$").unwrap())
}

fn long_flag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^--[A-Za-z]{2,}$").unwrap())
}

impl Shell {
    /// List the member names of the node `key` names, sorted.
    ///
    /// An empty key lists the cwd. A key that does not resolve but
    /// contains a `*` is treated as a wildcard filter over the cwd's own
    /// member names. Anything else yields an empty listing.
    pub fn ls(&self, key: &str) -> Vec<String> {
        self.ls_opts(key, "")
    }

    /// `ls` with an option string.
    ///
    /// Options are whitespace-separated flag tokens (`-a`, `--all`). If
    /// any token is not a well-formed flag the whole option string is
    /// ignored. With the all flag, the listing appends the pseudo-entries
    /// `"proto"` and `"perms"` for nodes that carry a delegate reference
    /// or a permission matrix.
    pub fn ls_opts(&self, key: &str, opts: &str) -> Vec<String> {
        let all = parse_all_flag(opts);

        let node = if key.is_empty() {
            self.cwd_node()
        } else {
            read_scoped(self.env(), self.cwd(), key).map(|(_, node)| node)
        };

        if let Some(node) = node.filter(|n| n.is_container()) {
            return listing(node, all);
        }

        // Unresolved key with a star: filter the cwd's names.
        if key.contains('*') {
            if let Some(here) = self.cwd_node() {
                let mut names: Vec<String> = here
                    .own_names()
                    .into_iter()
                    .filter(|name| wildcard_match(key, name))
                    .collect();
                names.sort();
                return names;
            }
        }

        Vec::new()
    }
}

fn parse_all_flag(opts: &str) -> bool {
    let tokens: Vec<&str> = opts.split_whitespace().collect();
    let well_formed = tokens
        .iter()
        .all(|t| short_flag_re().is_match(t) || long_flag_re().is_match(t));
    if !well_formed {
        return false;
    }
    tokens.iter().any(|t| {
        (short_flag_re().is_match(t) && t.contains('a')) || *t == "--all"
    })
}

fn listing(node: &Node, all: bool) -> Vec<String> {
    let mut names = node.own_names();
    if all {
        if let Some(meta) = node.meta() {
            if meta.delegate.is_some() {
                names.push("proto".to_string());
            }
            if meta.perms.is_some() {
                names.push("perms".to_string());
            }
        }
    }
    names.sort();
    names
}
