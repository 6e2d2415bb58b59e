//! Path resolution against the environment.
//!
//! `resolve` walks parsed steps from the root; absence of a path is an
//! ordinary outcome (`None`), never an error. Member lookup on a mapping
//! checks own entries first, then follows the node's delegate reference —
//! resolved root-relative — recursively. A fixed hop budget bounds delegate
//! chains, so a reference graph mangled by copying cannot loop resolution
//! forever.
//!
//! Mutable resolution walks own entries only: mutation never reaches
//! through a prototype.

use objsh_types::Node;

use crate::path::{parse, Step};

/// Upper bound on delegate-reference hops during one resolution.
const MAX_DELEGATE_HOPS: u8 = 32;

/// Resolve steps from the environment root.
pub fn resolve<'a>(root: &'a Node, steps: &[Step]) -> Option<&'a Node> {
    walk(root, root, steps, MAX_DELEGATE_HOPS)
}

/// Resolve steps starting at an arbitrary node. The root is still needed:
/// delegate references are root-relative.
pub fn resolve_in<'a>(root: &'a Node, start: &'a Node, steps: &[Step]) -> Option<&'a Node> {
    walk(root, start, steps, MAX_DELEGATE_HOPS)
}

/// Resolve steps mutably, own entries only.
pub fn resolve_mut<'a>(root: &'a mut Node, steps: &[Step]) -> Option<&'a mut Node> {
    let mut current = root;
    for step in steps {
        current = current.get_own_mut(step.token())?;
    }
    Some(current)
}

fn walk<'a>(root: &'a Node, start: &'a Node, steps: &[Step], budget: u8) -> Option<&'a Node> {
    let mut current = start;
    for step in steps {
        if !current.is_container() {
            return None;
        }
        current = lookup(root, current, step.token(), budget)?;
    }
    Some(current)
}

fn lookup<'a>(root: &'a Node, node: &'a Node, name: &str, budget: u8) -> Option<&'a Node> {
    if let Some(found) = node.get_own(name) {
        return Some(found);
    }
    if budget == 0 {
        return None;
    }
    let delegate = node.meta()?.delegate.as_deref()?;
    let proto = walk(root, root, &parse(delegate), budget - 1)?;
    lookup(root, proto, name, budget - 1)
}
