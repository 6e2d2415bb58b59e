//! Node: the tagged value variant addressed by every path.
//!
//! Every value reachable from an environment root is a `Node`: a mapping,
//! an ordered sequence, or an opaque scalar. The shell's resolver and copy
//! algorithm branch on this classification constantly, so it is an explicit
//! sum type rather than anything inferred at runtime.
//!
//! Mapping and sequence nodes additionally carry [`NodeMeta`]: an optional
//! delegate reference (the root-relative path of the prototype the node was
//! created from) and an optional permission matrix. Both are runtime
//! metadata — they do not round-trip through the JSON bridge.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::perms::PermMatrix;

/// A value in the object graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Ordered sequence. Members are addressed by decimal index.
    Seq(SeqNode),
    /// Mapping from member name to child node.
    Map(MapNode),
}

/// Metadata a container node may carry.
///
/// Absent fields stay absent until the first `mkdir`-with-prototype or
/// `chmod` touches the node; once set they persist for the node's lifetime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeMeta {
    /// Root-relative path of the prototype node this one delegates to.
    ///
    /// Introspection only, never an ownership edge: deleting this node never
    /// affects the prototype, and deleting the prototype merely leaves the
    /// reference dangling (lookups through it resolve to nothing).
    pub delegate: Option<String>,
    /// Advisory permission matrix. No verb ever consults it as a gate.
    pub perms: Option<PermMatrix>,
}

/// A mapping node: named members plus metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapNode {
    pub entries: BTreeMap<String, Node>,
    pub meta: NodeMeta,
}

/// A sequence node: ordered members plus metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeqNode {
    pub items: Vec<Node>,
    pub meta: NodeMeta,
}

impl MapNode {
    /// Create an empty mapping with no metadata.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeqNode {
    /// Create an empty sequence with no metadata.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node {
    /// Create an empty mapping node.
    pub fn empty_map() -> Self {
        Node::Map(MapNode::new())
    }

    /// Create an empty sequence node.
    pub fn empty_seq() -> Self {
        Node::Seq(SeqNode::new())
    }

    /// True for mappings and sequences — the nodes that have
    /// path-addressable children.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Map(_) | Node::Seq(_))
    }

    /// True for everything that copies by value.
    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    pub fn as_map(&self) -> Option<&MapNode> {
        match self {
            Node::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut MapNode> {
        match self {
            Node::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&SeqNode> {
        match self {
            Node::Seq(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq_mut(&mut self) -> Option<&mut SeqNode> {
        match self {
            Node::Seq(s) => Some(s),
            _ => None,
        }
    }

    /// Container metadata, if this node is a container.
    pub fn meta(&self) -> Option<&NodeMeta> {
        match self {
            Node::Map(m) => Some(&m.meta),
            Node::Seq(s) => Some(&s.meta),
            _ => None,
        }
    }

    /// Mutable container metadata, if this node is a container.
    pub fn meta_mut(&mut self) -> Option<&mut NodeMeta> {
        match self {
            Node::Map(m) => Some(&mut m.meta),
            Node::Seq(s) => Some(&mut s.meta),
            _ => None,
        }
    }

    /// Look up an own member by name. Sequence members are addressed by
    /// decimal index; a non-numeric name on a sequence is simply absent.
    ///
    /// Own members only — delegate fallback lives in the resolver, which
    /// has the root in hand to chase the reference.
    pub fn get_own(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Map(m) => m.entries.get(name),
            Node::Seq(s) => name.parse::<usize>().ok().and_then(|i| s.items.get(i)),
            _ => None,
        }
    }

    /// Mutable own-member lookup, same addressing as [`Node::get_own`].
    pub fn get_own_mut(&mut self, name: &str) -> Option<&mut Node> {
        match self {
            Node::Map(m) => m.entries.get_mut(name),
            Node::Seq(s) => name
                .parse::<usize>()
                .ok()
                .and_then(move |i| s.items.get_mut(i)),
            _ => None,
        }
    }

    /// Set a member. On a mapping this inserts or replaces; on a sequence
    /// the index must address an existing item or the one-past-the-end slot
    /// (which appends). Returns false when the write cannot land.
    pub fn set_member(&mut self, name: &str, value: Node) -> bool {
        match self {
            Node::Map(m) => {
                m.entries.insert(name.to_string(), value);
                true
            }
            Node::Seq(s) => match name.parse::<usize>() {
                Ok(i) if i < s.items.len() => {
                    s.items[i] = value;
                    true
                }
                Ok(i) if i == s.items.len() => {
                    s.items.push(value);
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Remove an own member. Returns false if nothing was removed.
    /// Removing a sequence item shifts later items down.
    pub fn remove_member(&mut self, name: &str) -> bool {
        match self {
            Node::Map(m) => m.entries.remove(name).is_some(),
            Node::Seq(s) => match name.parse::<usize>() {
                Ok(i) if i < s.items.len() => {
                    s.items.remove(i);
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Directly-defined member names: mapping keys, or sequence indices
    /// rendered as decimal strings. Scalars have none.
    pub fn own_names(&self) -> Vec<String> {
        match self {
            Node::Map(m) => m.entries.keys().cloned().collect(),
            Node::Seq(s) => (0..s.items.len()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Str(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Str(s)
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Int(i)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Delegate to node_to_json; metadata is intentionally dropped.
        node_to_json(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(json_to_node(json))
    }
}

/// Convert a `serde_json::Value` into a node tree.
///
/// Numbers become `Int` when they fit an i64, otherwise `Float`. This is
/// the supported way to seed an environment from literal JSON.
pub fn json_to_node(json: serde_json::Value) -> Node {
    match json {
        serde_json::Value::Null => Node::Null,
        serde_json::Value::Bool(b) => Node::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Node::Int(i)
            } else if let Some(f) = n.as_f64() {
                Node::Float(f)
            } else {
                Node::Str(n.to_string())
            }
        }
        serde_json::Value::String(s) => Node::Str(s),
        serde_json::Value::Array(items) => Node::Seq(SeqNode {
            items: items.into_iter().map(json_to_node).collect(),
            meta: NodeMeta::default(),
        }),
        serde_json::Value::Object(map) => Node::Map(MapNode {
            entries: map.into_iter().map(|(k, v)| (k, json_to_node(v))).collect(),
            meta: NodeMeta::default(),
        }),
    }
}

/// Convert a node tree to `serde_json::Value`, dropping metadata.
///
/// Float NaN has no JSON spelling and becomes null.
pub fn node_to_json(node: &Node) -> serde_json::Value {
    match node {
        Node::Null => serde_json::Value::Null,
        Node::Bool(b) => serde_json::Value::Bool(*b),
        Node::Int(i) => serde_json::Value::Number((*i).into()),
        Node::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Node::Str(s) => serde_json::Value::String(s.clone()),
        Node::Seq(s) => serde_json::Value::Array(s.items.iter().map(node_to_json).collect()),
        Node::Map(m) => serde_json::Value::Object(
            m.entries
                .iter()
                .map(|(k, v)| (k.clone(), node_to_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_classification() {
        assert!(Node::empty_map().is_container());
        assert!(Node::empty_seq().is_container());
        assert!(!Node::Int(3).is_container());
        assert!(Node::Str("x".into()).is_scalar());
        assert!(Node::Null.is_scalar());
    }

    #[test]
    fn map_member_access() {
        let mut node = Node::empty_map();
        assert!(node.set_member("a", Node::Int(1)));
        assert_eq!(node.get_own("a"), Some(&Node::Int(1)));
        assert_eq!(node.get_own("b"), None);
        assert!(node.remove_member("a"));
        assert!(!node.remove_member("a"));
    }

    #[test]
    fn seq_member_access_by_decimal_index() {
        let mut node = Node::Seq(SeqNode {
            items: vec![Node::Int(10), Node::Int(20)],
            meta: NodeMeta::default(),
        });
        assert_eq!(node.get_own("1"), Some(&Node::Int(20)));
        assert_eq!(node.get_own("2"), None);
        assert_eq!(node.get_own("x"), None);

        // Index == len appends, anything beyond fails.
        assert!(node.set_member("2", Node::Int(30)));
        assert!(!node.set_member("5", Node::Int(99)));
        assert_eq!(node.get_own("2"), Some(&Node::Int(30)));
    }

    #[test]
    fn seq_remove_shifts() {
        let mut node = Node::Seq(SeqNode {
            items: vec![Node::Int(1), Node::Int(2), Node::Int(3)],
            meta: NodeMeta::default(),
        });
        assert!(node.remove_member("0"));
        assert_eq!(node.get_own("0"), Some(&Node::Int(2)));
        assert_eq!(node.own_names(), vec!["0", "1"]);
    }

    #[test]
    fn scalar_has_no_members() {
        let mut node = Node::Int(7);
        assert_eq!(node.get_own("0"), None);
        assert!(!node.set_member("a", Node::Null));
        assert!(!node.remove_member("a"));
        assert!(node.own_names().is_empty());
    }

    #[test]
    fn json_round_trip_preserves_data() {
        let json = serde_json::json!({
            "a": [1, [2], {"b": [3, [4, 5]]}],
            "s": "text",
            "f": 1.5,
            "n": null,
            "t": true,
        });
        let node = json_to_node(json.clone());
        assert_eq!(node_to_json(&node), json);
    }

    #[test]
    fn metadata_does_not_serialize() {
        let mut node = Node::empty_map();
        node.meta_mut().unwrap().delegate = Some("proto.path".into());
        let json = node_to_json(&node);
        assert_eq!(json, serde_json::json!({}));
    }
}
