//! objsh-kernel: the shell over an in-memory object graph.
//!
//! This crate provides:
//!
//! - **Path parser**: dot/bracket path strings into traversal steps
//! - **Resolver**: walks parsed paths against the environment, with
//!   prototype (delegate) fallback for member lookups
//! - **Scope engine**: the local-vs-global precedence rule every mutating
//!   verb funnels through
//! - **Shell**: the environment root + cwd handle, with one verb per file
//!   under `verbs/` (`cd`, `pwd`, `ls`, `mkdir`, `rm`, `cp`, `chmod`)
//! - **Wildcard**: the single-`*` matcher backing `ls` filters
//!
//! The graph is transient and single-threaded by design: verbs observe
//! strict program order, and embedding hosts serialize access externally.

pub mod error;
pub mod path;
pub mod resolver;
pub mod scope;
pub mod shell;
pub mod verbs;
pub mod wildcard;

pub use error::{ShellError, ShellResult};
pub use shell::Shell;

// Value substrate, re-exported so embedders need only one crate.
pub use objsh_types::{
    chmod, chmod_check, json_to_node, node_to_json, Batch, MapNode, Node, NodeMeta, PermMatrix,
    Right, SeqNode, ShapeMismatch, UserClass,
};
