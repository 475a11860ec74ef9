//! DOM node model.
//!
//! All nodes live in a flat `Vec<Node>` owned by [`Dom`](crate::Dom) and are
//! referenced by `NodeId`. A page never frees nodes while it is alive, so a
//! plain index is a stable handle for the page's whole lifetime.

/// A handle that uniquely identifies a node within one [`Dom`](crate::Dom).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

// ---------------------------------------------------------------------------
// Attribute
// ---------------------------------------------------------------------------

/// A single attribute on an element (e.g. `class="foo"`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Element data
// ---------------------------------------------------------------------------

/// Data specific to element nodes.
///
/// `id` and `classes` are caches of the `id` and `class` attributes. Every
/// mutator below keeps the caches and the attribute list in agreement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementData {
    pub tag_name: String,
    attrs: Vec<Attr>,
    id: Option<String>,
    classes: Vec<String>,
}

impl ElementData {
    /// Build element data, extracting the `id` and `class` caches from `attrs`.
    pub fn new(tag_name: &str, attrs: Vec<Attr>) -> Self {
        let mut elem = Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attrs,
            id: None,
            classes: Vec::new(),
        };
        elem.refresh_caches();
        elem
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Value of the attribute `name`, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set (or add) the attribute `name`.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.to_string(),
            None => self.attrs.push(Attr::new(name, value)),
        }
        if name == "id" || name == "class" {
            self.refresh_caches();
        }
    }

    /// Remove the attribute `name`. Returns `true` if it was present.
    pub fn remove_attr(&mut self, name: &str) -> bool {
        let before = self.attrs.len();
        self.attrs.retain(|a| a.name != name);
        let removed = self.attrs.len() != before;
        if removed && (name == "id" || name == "class") {
            self.refresh_caches();
        }
        removed
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add `class` to the class list. Returns `true` if the list changed.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        self.write_class_attr();
        true
    }

    /// Remove `class` from the class list. Returns `true` if the list changed.
    pub fn remove_class(&mut self, class: &str) -> bool {
        if !self.has_class(class) {
            return false;
        }
        self.classes.retain(|c| c != class);
        self.write_class_attr();
        true
    }

    fn refresh_caches(&mut self) {
        self.id = self.attr("id").map(String::from);
        self.classes = self
            .attr("class")
            .map(|v| v.split_whitespace().map(String::from).collect())
            .unwrap_or_default();
    }

    /// Serialize the class cache back into the `class` attribute.
    fn write_class_attr(&mut self) {
        let joined = self.classes.join(" ");
        match self.attrs.iter_mut().find(|a| a.name == "class") {
            Some(attr) => attr.value = joined,
            None => self.attrs.push(Attr::new("class", &joined)),
        }
    }
}

// ---------------------------------------------------------------------------
// Node data (variant per node type)
// ---------------------------------------------------------------------------

/// The payload that distinguishes different kinds of DOM nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    Document,
    Element(ElementData),
    Text { data: String },
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A single node in the DOM tree.
#[derive(Clone, Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    /// Create a new detached node.
    pub fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
        }
    }

    /// If this is an element, return a reference to its [`ElementData`].
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// If this is an element, return a mutable reference to its [`ElementData`].
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_element_extracts_id_and_classes() {
        let elem = ElementData::new(
            "NAV",
            vec![Attr::new("id", "nav-list"), Attr::new("class", "menu  show")],
        );
        assert_eq!(elem.tag_name, "nav");
        assert_eq!(elem.id(), Some("nav-list"));
        assert_eq!(elem.classes(), ["menu", "show"]);
    }

    #[test]
    fn add_and_remove_class_rewrite_attribute() {
        let mut elem = ElementData::new("ul", vec![Attr::new("class", "menu")]);

        assert!(elem.add_class("show"));
        assert!(!elem.add_class("show"));
        assert_eq!(elem.attr("class"), Some("menu show"));

        assert!(elem.remove_class("menu"));
        assert!(!elem.remove_class("menu"));
        assert_eq!(elem.attr("class"), Some("show"));
    }

    #[test]
    fn add_class_creates_missing_attribute() {
        let mut elem = ElementData::new("ul", Vec::new());
        elem.add_class("show");
        assert_eq!(elem.attr("class"), Some("show"));
    }

    #[test]
    fn set_attr_class_refreshes_cache() {
        let mut elem = ElementData::new("div", Vec::new());
        elem.set_attr("class", "hero-right wide");
        assert!(elem.has_class("hero-right"));

        elem.set_attr("id", "hero");
        assert_eq!(elem.id(), Some("hero"));

        assert!(elem.remove_attr("class"));
        assert!(elem.classes().is_empty());
        assert!(!elem.remove_attr("class"));
    }
}
