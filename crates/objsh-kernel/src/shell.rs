//! The shell handle: environment root plus current working path.
//!
//! Each `Shell` owns its environment — a constructor-supplied mapping that
//! lives as long as the shell and is only ever mutated, never replaced.
//! There is no ambient global state, so independent instances coexist and
//! tests stay deterministic.

use objsh_types::{json_to_node, MapNode, Node};

use crate::error::{ShellError, ShellResult};
use crate::path::parse;
use crate::resolver::resolve;
use crate::scope::write_scoped;

/// A shell over one in-memory object graph.
///
/// The current working path is a plain string; the empty string denotes the
/// environment root. It is validated when navigation or resolution happens,
/// not eagerly — a cwd whose target was deleted out from under it simply
/// resolves to nothing until the next `cd`.
#[derive(Debug, Clone)]
pub struct Shell {
    env: Node,
    cwd: String,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    /// Create a shell over an empty environment.
    pub fn new() -> Self {
        Self::with_env(MapNode::new())
    }

    /// Create a shell over a pre-populated environment.
    pub fn with_env(root: MapNode) -> Self {
        Self {
            env: Node::Map(root),
            cwd: String::new(),
        }
    }

    /// Seed a shell from a JSON object literal.
    pub fn from_json(value: serde_json::Value) -> ShellResult<Self> {
        match json_to_node(value) {
            Node::Map(root) => Ok(Self::with_env(root)),
            other => Err(ShellError::NotAMapping(format!("{other:?}"))),
        }
    }

    /// The environment root.
    pub fn env(&self) -> &Node {
        &self.env
    }

    /// Mutable access to the environment root, for embedding hosts that
    /// populate the graph directly.
    pub fn env_mut(&mut self) -> &mut Node {
        &mut self.env
    }

    /// The current working path (`""` = root).
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub(crate) fn set_cwd(&mut self, cwd: String) {
        tracing::debug!(from = %self.cwd, to = %cwd, "cwd changed");
        self.cwd = cwd;
    }

    /// Resolve a full root-relative path, no scoping. The empty path is the
    /// environment itself.
    pub fn reference(&self, path: &str) -> Option<&Node> {
        resolve(&self.env, &parse(path))
    }

    /// Assign a value at a path through the scope engine's WRITE mode:
    /// the local (cwd-relative) parent wins when it exists, otherwise the
    /// global one. Returns false — and mutates nothing — when the path is
    /// unresolved in both scopes.
    pub fn set(&mut self, path: &str, value: impl Into<Node>) -> bool {
        let cwd = self.cwd.clone();
        write_scoped(&mut self.env, &cwd, path, value.into())
    }

    /// The node the cwd currently denotes, if it still resolves.
    pub(crate) fn cwd_node(&self) -> Option<&Node> {
        resolve(&self.env, &parse(&self.cwd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_shell_is_empty_at_root() {
        let shell = Shell::new();
        assert_eq!(shell.cwd(), "");
        assert_eq!(shell.reference(""), Some(shell.env()));
        assert!(shell.env().own_names().is_empty());
    }

    #[test]
    fn from_json_requires_an_object() {
        assert!(Shell::from_json(serde_json::json!({"a": 1})).is_ok());
        assert!(Shell::from_json(serde_json::json!([1, 2])).is_err());
        assert!(Shell::from_json(serde_json::json!("scalar")).is_err());
    }

    #[test]
    fn reference_resolves_full_paths_only() {
        let shell = Shell::from_json(serde_json::json!({
            "a": {"b": {"c": 3}},
        }))
        .unwrap();
        assert_eq!(shell.reference("a.b.c"), Some(&Node::Int(3)));
        assert_eq!(shell.reference("b.c"), None);
    }

    #[test]
    fn set_writes_through_scope_precedence() {
        let mut shell = Shell::from_json(serde_json::json!({
            "Bar": {},
            "x": 1,
        }))
        .unwrap();
        shell.set_cwd("Bar".into());

        // Local parent exists, so the write lands under Bar.
        assert!(shell.set("x", Node::Int(2)));
        assert_eq!(shell.reference("Bar.x"), Some(&Node::Int(2)));
        assert_eq!(shell.reference("x"), Some(&Node::Int(1)));
    }

    #[test]
    fn set_on_unresolved_path_is_refused() {
        let mut shell = Shell::new();
        assert!(!shell.set("a.b.c", Node::Int(1)));
        assert!(shell.env().own_names().is_empty());
    }

    #[test]
    fn independent_shells_do_not_share_state() {
        let mut first = Shell::new();
        let second = Shell::new();
        assert!(first.set("a", Node::Int(1)));
        assert_eq!(second.reference("a"), None);
    }
}
