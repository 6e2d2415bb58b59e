//! objsh-types: the value substrate for objsh.
//!
//! This crate provides:
//!
//! - **Node**: the tagged value variant every path addresses — mapping,
//!   ordered sequence, or scalar — plus the metadata a container may carry
//!   (delegate reference, permission matrix)
//! - **Perms**: the advisory 3×3 permission matrix and the `chmod` /
//!   `chmod_check` operations on a node
//! - **Batch**: the shape-preserving adapter that lets verbs accept a single
//!   argument, an ordered list, or a keyed map and return a congruent result

pub mod batch;
pub mod node;
pub mod perms;

pub use batch::{Batch, ShapeMismatch};
pub use node::{json_to_node, node_to_json, MapNode, Node, NodeMeta, SeqNode};
pub use perms::{chmod, chmod_check, PermMatrix, Right, UserClass};
