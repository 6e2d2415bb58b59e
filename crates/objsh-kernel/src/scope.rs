//! The dual-scope engine: local-vs-global resolution for mutating verbs.
//!
//! Every path handed to a mutating verb has two readings: the local one,
//! prefixed by the current working path, and the global one, taken from the
//! environment root. The precedence rule is fixed and shared by every verb
//! that funnels through here:
//!
//! 1. the local reading wins when its parent container exists AND the leaf
//!    already exists there (or the operation is a write, which may create
//!    the leaf);
//! 2. otherwise the global reading wins when its parent container exists;
//! 3. otherwise the local parent alone (for writes) decides;
//! 4. otherwise the path is unresolved and nothing is mutated.
//!
//! In short: local existence shadows the global name, but a global path
//! spelling keeps working until a local entry of that exact relative name
//! appears. This order is load-bearing — do not reorder the checks.

use objsh_types::Node;

use crate::path::{join, parse, split_leaf, Step};
use crate::resolver::{resolve, resolve_in, resolve_mut};

/// Which reading of a path won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Local,
    Global,
}

/// The winning target of a scoped resolution: a root-relative parent path
/// plus the leaf text (which may itself carry bracket suffixes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedTarget {
    pub parent: String,
    pub leaf: String,
    pub kind: ScopeKind,
}

impl ScopedTarget {
    /// Root-relative spelling of the whole target.
    pub fn full_path(&self) -> String {
        join(&self.parent, &self.leaf)
    }
}

/// Apply the precedence rule and pick a target, or decide the path is
/// unresolved. `writing` marks WRITE mode, where a missing local leaf is
/// still a local candidate.
pub fn select_target(root: &Node, cwd: &str, path: &str, writing: bool) -> Option<ScopedTarget> {
    if path.is_empty() {
        return None;
    }

    let (global_parent, leaf) = split_leaf(path);
    let local_full = join(cwd, path);
    let (local_parent, _) = split_leaf(&local_full);

    let local_parent_node = resolve(root, &parse(local_parent)).filter(|n| n.is_container());
    let local_candidate = match local_parent_node {
        Some(parent) => writing || resolve_in(root, parent, &parse(leaf)).is_some(),
        None => false,
    };
    let global_parent_ok = resolve(root, &parse(global_parent))
        .map(|n| n.is_container())
        .unwrap_or(false);

    let target = if !local_candidate && global_parent_ok {
        ScopedTarget {
            parent: global_parent.to_string(),
            leaf: leaf.to_string(),
            kind: ScopeKind::Global,
        }
    } else if local_parent_node.is_some() {
        ScopedTarget {
            parent: local_parent.to_string(),
            leaf: leaf.to_string(),
            kind: ScopeKind::Local,
        }
    } else {
        return None;
    };

    tracing::debug!(path, cwd, kind = ?target.kind, "scope selected");
    Some(target)
}

/// READ mode: resolve the path per the precedence rule.
///
/// Returns the winning root-relative path text alongside the node — callers
/// like `mkdir` record that text as the delegate reference.
pub fn read_scoped<'a>(root: &'a Node, cwd: &str, path: &str) -> Option<(String, &'a Node)> {
    let target = select_target(root, cwd, path, false)?;
    let parent = resolve(root, &parse(&target.parent))?;
    let node = resolve_in(root, parent, &parse(&target.leaf))?;
    Some((target.full_path(), node))
}

/// WRITE mode: set the leaf under the winning parent. Returns false when
/// the path is unresolved in both scopes — nothing is mutated.
pub fn write_scoped(root: &mut Node, cwd: &str, path: &str, value: Node) -> bool {
    let Some(target) = select_target(root, cwd, path, true) else {
        return false;
    };
    with_leaf_container(root, &target, |container, name| {
        container.set_member(name, value)
    })
    .unwrap_or(false)
}

/// DELETE mode: remove the leaf under the winning parent. Non-existence in
/// both scopes is a no-op reported as false.
pub fn delete_scoped(root: &mut Node, cwd: &str, path: &str) -> bool {
    let Some(target) = select_target(root, cwd, path, false) else {
        return false;
    };
    with_leaf_container(root, &target, |container, name| {
        container.remove_member(name)
    })
    .unwrap_or(false)
}

/// Navigate mutably to the container holding the target's final step and
/// run `op` with that container and the final member token. A leaf like
/// `b[2]` descends through `b` first, so indexed leaves work for writes
/// and deletes too.
fn with_leaf_container<R>(
    root: &mut Node,
    target: &ScopedTarget,
    op: impl FnOnce(&mut Node, &str) -> R,
) -> Option<R> {
    let leaf_steps = parse(&target.leaf);
    let (last, inner) = leaf_steps.split_last()?;

    let mut steps: Vec<Step> = parse(&target.parent);
    steps.extend_from_slice(inner);

    let container = resolve_mut(root, &steps)?;
    Some(op(container, last.token()))
}
