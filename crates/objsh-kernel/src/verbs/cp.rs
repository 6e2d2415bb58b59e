//! cp — copy a value, merging containers instead of clobbering them.

use objsh_types::Node;

use crate::error::{ShellError, ShellResult};
use crate::path::{parse, split_leaf};
use crate::resolver::resolve_mut;
use crate::scope::read_scoped;
use crate::shell::Shell;

impl Shell {
    /// Copy the value at `origin` to `dest`.
    ///
    /// Scalars replace whatever sits at the destination. Containers merge
    /// into an existing container destination member-by-member, recursing
    /// where both sides hold containers; members only present at the
    /// destination survive. A missing destination member receives a deep
    /// copy of the source.
    pub fn cp(&mut self, origin: &str, dest: &str) -> ShellResult<()> {
        if origin.is_empty() || dest.is_empty() {
            return Err(ShellError::MissingOperand);
        }

        let source = read_scoped(self.env(), self.cwd(), origin)
            .map(|(_, node)| node.clone())
            .ok_or_else(|| ShellError::SourceMissing(origin.to_string()))?;

        let (parent_text, leaf) = split_leaf(dest);
        let context_path = if parent_text.is_empty() {
            self.cwd().to_string()
        } else {
            match read_scoped(self.env(), self.cwd(), parent_text) {
                Some((winning, _)) => winning,
                None => return Err(ShellError::Unresolved(parent_text.to_string())),
            }
        };

        let context = resolve_mut(self.env_mut(), &parse(&context_path))
            .ok_or_else(|| ShellError::Unresolved(context_path.clone()))?;
        let Some(map) = context.as_map_mut() else {
            return Err(ShellError::NotAMapping(context_path));
        };

        match map.entries.get_mut(leaf) {
            Some(existing) if source.is_container() && existing.is_container() => {
                overlay_merge(existing, &source);
            }
            _ => {
                map.entries.insert(leaf.to_string(), source);
            }
        }
        Ok(())
    }
}

/// Merge `src` into `dest` member-by-member. Shared members where both
/// sides are containers merge recursively; any other shared member is
/// replaced by a copy of the source's. Destination-only members are left
/// alone.
fn overlay_merge(dest: &mut Node, src: &Node) {
    for name in src.own_names() {
        let Some(sv) = src.get_own(&name) else {
            continue;
        };
        match dest.get_own_mut(&name) {
            Some(dv) if dv.is_container() && sv.is_container() => overlay_merge(dv, sv),
            _ => {
                dest.set_member(&name, sv.clone());
            }
        }
    }
}
