//! The decoded tree model.
//!
//! Ein [`Node`] ist Name + optionaler Textwert + geordnete Kinder - das
//! ist alles, was die nachgelagerten Mapping-Schichten brauchen: sie
//! navigieren per festen Pfadnamen (`"hull/primaryArmor"`) und parsen
//! die Textwerte typisiert. Der Baum wird waehrend des Decodierens
//! aufgebaut und danach nicht mehr veraendert.

/// One decoded tree unit: name, optional text value, ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    name: String,
    /// Textwert; `None` solange kein Value-Decoder einen gesetzt hat.
    text: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// Creates a node with the given name, no text and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), text: None, children: Vec::new() }
    }

    /// The node name (dictionary name, or the external root label).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text value, if any.
    ///
    /// Textwerte sind immer Strings - auch Zahlen, Float-Listen,
    /// Booleans und Base64-Blobs landen als Text hier.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Sets the text value.
    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Appends a child node.
    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// The ordered children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Resolves a `/`-separated path, descending into the first match
    /// at each step. Leere Segmente (doppelte Slashes) werden
    /// uebersprungen.
    pub fn select(&self, path: &str) -> Option<&Node> {
        let mut current = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Text value at the given path.
    pub fn select_text(&self, path: &str) -> Option<&str> {
        self.select(path)?.text()
    }

    // --- Typed accessors over paths ---

    /// Parses the text at `path` as `f32`.
    pub fn parse_f32(&self, path: &str) -> Option<f32> {
        self.select_text(path)?.trim().parse().ok()
    }

    /// Parses the text at `path` as `i32`.
    pub fn parse_i32(&self, path: &str) -> Option<i32> {
        self.select_text(path)?.trim().parse().ok()
    }

    /// True when the text at `path` is exactly `"true"`.
    ///
    /// Jeder andere Text (auch "True", "1") zaehlt als false.
    pub fn parse_bool(&self, path: &str) -> Option<bool> {
        Some(self.select_text(path)? == "true")
    }

    /// Parses the space-separated text at `path` as a float list.
    ///
    /// Tokens, die sich nicht als Float lesen lassen, werden
    /// ausgelassen.
    pub fn parse_f32_array(&self, path: &str) -> Option<Vec<f32>> {
        Some(
            self.select_text(path)?
                .split_whitespace()
                .filter_map(|t| t.parse().ok())
                .collect(),
        )
    }
}
