//! Node-Baum → JSON-Projektion.
//!
//! Blaetter werden zu Strings (der Textwert), Elemente zu Objekten.
//! Mehrfach vorkommende Kindnamen falten zu Arrays zusammen; hat ein
//! Element neben Kindern auch Text, landet der unter `"#text"`.

use serde_json::{Map, Value};

use crate::node::Node;

/// Projects the tree into a JSON document keyed by the root name.
pub fn node_to_json(node: &Node) -> Value {
    let mut root = Map::new();
    root.insert(node.name().to_owned(), value_of(node));
    Value::Object(root)
}

/// JSON-Wert eines einzelnen Knotens (ohne den eigenen Namen).
fn value_of(node: &Node) -> Value {
    if node.children().is_empty() {
        return Value::String(node.text().unwrap_or("").to_owned());
    }

    let mut map = Map::new();
    if let Some(text) = node.text() {
        if !text.is_empty() {
            map.insert("#text".to_owned(), Value::String(text.to_owned()));
        }
    }

    for child in node.children() {
        let value = value_of(child);
        match map.get_mut(child.name()) {
            None => {
                map.insert(child.name().to_owned(), value);
            }
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
        }
    }
    Value::Object(map)
}
