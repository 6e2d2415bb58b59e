//! mkdir — create mappings, optionally delegating to a prototype.

use objsh_types::{Batch, MapNode, Node};

use crate::error::{ShellError, ShellResult};
use crate::path::{parse, split_leaf};
use crate::resolver::resolve_mut;
use crate::scope::read_scoped;
use crate::shell::Shell;

/// Per-item outcome of a (possibly batched) mkdir: the created leaf name,
/// or the refusal that left this item untouched.
pub type MkdirOutcome = Result<String, ShellError>;

impl Shell {
    /// Create one mapping per path in the batch.
    ///
    /// Each item is processed independently; one refusal (say, a name
    /// collision) never blocks the rest. `mkdir` never overwrites: an
    /// existing member is a refusal, not a merge.
    pub fn mkdir(&mut self, paths: impl Into<Batch<String>>) -> Batch<MkdirOutcome> {
        paths.into().apply(|path| self.mkdir_one(&path, None))
    }

    /// Create mappings that delegate to prototypes.
    ///
    /// `paths` and `protos` must have the same shape and length, or the
    /// whole call fails with no creations performed. Each created node
    /// records the prototype's resolved path as its delegate reference;
    /// member lookups missing on the child fall through to the prototype.
    pub fn mkdir_from(
        &mut self,
        paths: impl Into<Batch<String>>,
        protos: impl Into<Batch<String>>,
    ) -> ShellResult<Batch<MkdirOutcome>> {
        let pairs = paths.into().zip(protos.into())?;
        Ok(pairs.apply(|(path, proto)| self.mkdir_one(&path, Some(&proto))))
    }

    fn mkdir_one(&mut self, path: &str, proto: Option<&str>) -> MkdirOutcome {
        if path.is_empty() {
            return Err(ShellError::MissingOperand);
        }
        let (parent_text, leaf) = split_leaf(path);

        // Creation context: scoped resolution of the parent, or the cwd
        // node when the path is a bare leaf.
        let context_path = if parent_text.is_empty() {
            self.cwd().to_string()
        } else {
            match read_scoped(self.env(), self.cwd(), parent_text) {
                Some((winning, _)) => winning,
                None => return Err(ShellError::Unresolved(parent_text.to_string())),
            }
        };

        // Resolve the prototype before borrowing the context mutably. A
        // prototype argument that does not name a container degrades to a
        // plain empty mapping.
        let delegate = proto.and_then(|p| {
            read_scoped(self.env(), self.cwd(), p)
                .filter(|(_, node)| node.is_container())
                .map(|(winning, _)| winning)
        });

        let context = resolve_mut(self.env_mut(), &parse(&context_path))
            .ok_or_else(|| ShellError::Unresolved(context_path.clone()))?;
        let Some(map) = context.as_map_mut() else {
            return Err(ShellError::NotAMapping(context_path));
        };
        if map.entries.contains_key(leaf) {
            return Err(ShellError::AlreadyExists(path.to_string()));
        }

        let mut node = MapNode::new();
        node.meta.delegate = delegate;
        map.entries.insert(leaf.to_string(), Node::Map(node));
        Ok(leaf.to_string())
    }
}
