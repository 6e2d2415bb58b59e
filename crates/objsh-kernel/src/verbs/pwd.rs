//! pwd — report the current working path.

use objsh_types::Node;

use crate::shell::Shell;

impl Shell {
    /// The current working path string; `""` denotes the root.
    pub fn pwd(&self) -> &str {
        self.cwd()
    }

    /// The node the current working path denotes — the environment root
    /// when the cwd is empty, or `None` if the location was deleted since
    /// the last `cd`.
    pub fn pwd_node(&self) -> Option<&Node> {
        self.cwd_node()
    }
}
