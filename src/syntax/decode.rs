//! serde_yaml value graph → [`YamlTree`].

use serde_yaml::Value;

use super::tree::{NodeId, NodeShape, YamlTree};

/// Build a tree from a decoded document. A `null` document has no tree.
pub(super) fn build(value: Value) -> Option<YamlTree> {
    let value = untag(value);
    if value.is_null() {
        return None;
    }
    let mut tree = YamlTree::with_capacity(16);
    build_node(&mut tree, None, None, value, 0);
    Some(tree)
}

fn build_node(
    tree: &mut YamlTree,
    parent: Option<NodeId>,
    name: Option<String>,
    value: Value,
    index: usize,
) -> NodeId {
    match untag(value) {
        Value::Mapping(mapping) => {
            let id = tree.alloc(parent, name, None, NodeShape::Mapping, index);
            for (i, (key, child)) in mapping.into_iter().enumerate() {
                let key = scalar_text(&untag(key));
                build_node(tree, Some(id), key, child, i);
            }
            tree.close(id);
            id
        }
        Value::Sequence(items) => {
            let id = tree.alloc(parent, name, None, NodeShape::Sequence, index);
            let items = items
                .into_iter()
                .map(untag)
                .filter(|item| !item.is_null());
            for (i, item) in items.enumerate() {
                build_node(tree, Some(id), None, item, i);
            }
            tree.close(id);
            id
        }
        scalar => {
            let id = tree.alloc(parent, name, scalar_text(&scalar), NodeShape::Scalar, index);
            tree.close(id);
            id
        }
    }
}

fn untag(value: Value) -> Value {
    match value {
        Value::Tagged(tagged) => untag(tagged.value),
        other => other,
    }
}

/// Text form of a scalar; `None` for `null` and containers.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
