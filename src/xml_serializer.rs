//! Node-Baum → XML-Serialisierung.
//!
//! Rekonstruiert die XML-Sicht, die die Mapping-Schichten historisch
//! konsumiert haben. Zwei Formen:
//! - `to_xml()` / `write_xml()` - kompakt, eine Zeile.
//! - `to_pretty_xml()` / `write_pretty_xml()` - mit Einrueckung
//!   (2 Spaces).
//!
//! Die `to_*`-Varianten liefern einen String, die `write_*`-Varianten
//! streamen direkt in `impl Write`.

use std::io::Write;

use crate::node::Node;
use crate::{Error, Result};

/// Serializes the tree as a compact XML string.
pub fn to_xml(node: &Node) -> Result<String> {
    let mut buf = Vec::new();
    write_xml(node, &mut buf)?;
    String::from_utf8(buf).map_err(|_| Error::Io("XML output is not valid UTF-8".into()))
}

/// Serializes the tree as a pretty-printed XML string (2-space indent).
pub fn to_pretty_xml(node: &Node) -> Result<String> {
    let mut buf = Vec::new();
    write_pretty_xml(node, &mut buf)?;
    String::from_utf8(buf).map_err(|_| Error::Io("XML output is not valid UTF-8".into()))
}

/// Streams the tree as compact XML into a writer.
pub fn write_xml(node: &Node, mut writer: impl Write) -> Result<()> {
    write_compact(node, &mut writer)
}

/// Streams the tree as pretty-printed XML into a writer.
pub fn write_pretty_xml(node: &Node, mut writer: impl Write) -> Result<()> {
    write_indented(node, &mut writer, 0)?;
    Ok(writeln!(writer)?)
}

fn write_compact(node: &Node, writer: &mut impl Write) -> Result<()> {
    if node.text().is_none() && node.children().is_empty() {
        return Ok(write!(writer, "<{}/>", node.name())?);
    }
    write!(writer, "<{}>", node.name())?;
    write_escaped(node.text().unwrap_or(""), writer)?;
    for child in node.children() {
        write_compact(child, writer)?;
    }
    Ok(write!(writer, "</{}>", node.name())?)
}

fn write_indented(node: &Node, writer: &mut impl Write, depth: usize) -> Result<()> {
    let pad = "  ".repeat(depth);
    let text = node.text().unwrap_or("");

    if node.children().is_empty() {
        if node.text().is_none() {
            return Ok(write!(writer, "{pad}<{}/>", node.name())?);
        }
        write!(writer, "{pad}<{}>", node.name())?;
        write_escaped(text, writer)?;
        return Ok(write!(writer, "</{}>", node.name())?);
    }

    writeln!(writer, "{pad}<{}>", node.name())?;
    if !text.is_empty() {
        write!(writer, "{pad}  ")?;
        write_escaped(text, writer)?;
        writeln!(writer)?;
    }
    for child in node.children() {
        write_indented(child, writer, depth + 1)?;
        writeln!(writer)?;
    }
    Ok(write!(writer, "{pad}</{}>", node.name())?)
}

/// Escaped `&`, `<` und `>` in Textinhalten. Attribute gibt es in
/// diesem Baum nicht, also auch kein Quote-Escaping.
fn write_escaped(text: &str, writer: &mut impl Write) -> Result<()> {
    for ch in text.chars() {
        match ch {
            '&' => write!(writer, "&amp;")?,
            '<' => write!(writer, "&lt;")?,
            '>' => write!(writer, "&gt;")?,
            _ => write!(writer, "{ch}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, text: &str) -> Node {
        let mut n = Node::new(name);
        n.set_text(text);
        n
    }

    fn sample() -> Node {
        let mut root = Node::new("vehicle");
        root.set_text("");
        let mut hull = Node::new("hull");
        hull.set_text("");
        hull.push_child(leaf("maxHealth", "340"));
        root.push_child(hull);
        root.push_child(leaf("name", "T-34"));
        root
    }

    // --- Kompakt ---

    #[test]
    fn compact_nested() {
        let xml = to_xml(&sample()).unwrap();
        assert_eq!(
            xml,
            "<vehicle><hull><maxHealth>340</maxHealth></hull><name>T-34</name></vehicle>"
        );
    }

    #[test]
    fn compact_empty_node_is_self_closing() {
        let xml = to_xml(&Node::new("empty")).unwrap();
        assert_eq!(xml, "<empty/>");
    }

    /// Leerer Text (gesetzt, aber "") ist kein Self-Closing - der
    /// Knoten hatte einen Wert.
    #[test]
    fn compact_empty_text_keeps_tag_pair() {
        let xml = to_xml(&leaf("s", "")).unwrap();
        assert_eq!(xml, "<s></s>");
    }

    #[test]
    fn text_is_escaped() {
        let xml = to_xml(&leaf("v", "a<b & c>d")).unwrap();
        assert_eq!(xml, "<v>a&lt;b &amp; c&gt;d</v>");
    }

    // --- Pretty ---

    #[test]
    fn pretty_indents_children() {
        let xml = to_pretty_xml(&sample()).unwrap();
        let expected = "\
<vehicle>
  <hull>
    <maxHealth>340</maxHealth>
  </hull>
  <name>T-34</name>
</vehicle>
";
        assert_eq!(xml, expected);
    }

    #[test]
    fn pretty_leaf_stays_inline() {
        let xml = to_pretty_xml(&leaf("n", "5")).unwrap();
        assert_eq!(xml, "<n>5</n>\n");
    }

    #[test]
    fn pretty_mixed_text_gets_own_line() {
        let mut n = Node::new("mixed");
        n.set_text("hello");
        n.push_child(leaf("c", "1"));
        let xml = to_pretty_xml(&n).unwrap();
        let expected = "\
<mixed>
  hello
  <c>1</c>
</mixed>
";
        assert_eq!(xml, expected);
    }

    // --- Writer-Varianten ---

    #[test]
    fn writer_matches_string_variant() {
        let node = sample();
        let mut buf = Vec::new();
        write_xml(&node, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), to_xml(&node).unwrap());
    }
}
