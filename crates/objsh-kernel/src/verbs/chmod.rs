//! chmod — adjust the advisory permission matrix on a node.

use objsh_types::{perms, Right, UserClass};

use crate::path::parse;
use crate::resolver::resolve_mut;
use crate::scope::read_scoped;
use crate::shell::Shell;

impl Shell {
    /// Apply a symbolic (`"u+rw"`) or numeric (`"750"`) mode to the node
    /// the path names. Returns false — and changes nothing — when the path
    /// does not resolve, the node is a scalar, or the mode string is
    /// malformed.
    pub fn chmod(&mut self, path: &str, mode: &str) -> bool {
        let Some((winning, _)) = read_scoped(self.env(), self.cwd(), path) else {
            return false;
        };
        let Some(node) = resolve_mut(self.env_mut(), &parse(&winning)) else {
            return false;
        };
        perms::chmod(node, mode)
    }

    /// Query one permission bit on the node the path names. Nodes never
    /// touched by a successful `chmod` report false for every bit.
    pub fn chmod_check(&self, path: &str, right: Right, class: UserClass) -> bool {
        match read_scoped(self.env(), self.cwd(), path) {
            Some((_, node)) => perms::chmod_check(node, right, class),
            None => false,
        }
    }
}
