//! Parsed page shell with the mutation primitives binders need.
//!
//! A [`Document`] wraps a `scraper::Html` tree. Binders never hold element
//! references across a mutation; they locate an [`Anchor`] (a node id), then
//! ask the document to rewrite that node's text, attributes or children.
//!
//! ## Detached nodes
//!
//! The underlying arena keeps detached nodes around, and `Html::select`
//! walks the whole arena. All lookups here therefore start from the root
//! element and only see nodes that are still attached to the page.
//!
//! ## Generated markup
//!
//! Children are always produced from a maud [`Markup`] value, which is
//! escaped at render time, then parsed as an HTML fragment and grafted in.
//! Raw strings are never spliced into the page.

use ego_tree::NodeId;
use html5ever::{LocalName, Namespace, QualName};
use maud::Markup;
use scraper::node::Text;
use scraper::{ElementRef, Html, Node, Selector, StrTendril};

/// A pre-existing element a binder is allowed to mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor(NodeId);

#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::debug!(selector, error = ?e, "invalid selector");
            None
        }
    }
}

impl Document {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Serialize the whole page.
    pub fn to_html(&self) -> String {
        self.html.html()
    }

    /// Read-only access to the parsed tree.
    pub fn html(&self) -> &Html {
        &self.html
    }

    fn element(&self, anchor: Anchor) -> Option<ElementRef<'_>> {
        self.html.tree.get(anchor.0).and_then(ElementRef::wrap)
    }

    /// First attached element matching `selector`, in document order.
    pub fn select_first(&self, selector: &str) -> Option<Anchor> {
        let selector = parse_selector(selector)?;
        self.html
            .root_element()
            .select(&selector)
            .next()
            .map(|el| Anchor(el.id()))
    }

    /// First descendant of `scope` matching `selector`.
    pub fn select_within(&self, scope: Anchor, selector: &str) -> Option<Anchor> {
        let selector = parse_selector(selector)?;
        self.element(scope)?
            .select(&selector)
            .next()
            .map(|el| Anchor(el.id()))
    }

    /// Nearest element matching `selector`, starting at `anchor` itself and
    /// walking up through its ancestors.
    pub fn closest(&self, anchor: Anchor, selector: &str) -> Option<Anchor> {
        let selector = parse_selector(selector)?;
        let node = self.html.tree.get(anchor.0)?;
        std::iter::once(node)
            .chain(node.ancestors())
            .filter_map(ElementRef::wrap)
            .find(|el| selector.matches(el))
            .map(|el| Anchor(el.id()))
    }

    pub fn text(&self, anchor: Anchor) -> Option<String> {
        self.element(anchor).map(|el| el.text().collect())
    }

    pub fn attr(&self, anchor: Anchor, name: &str) -> Option<String> {
        self.element(anchor)?.attr(name).map(str::to_string)
    }

    pub fn inner_html(&self, anchor: Anchor) -> Option<String> {
        self.element(anchor).map(|el| el.inner_html())
    }

    fn clear_children(&mut self, anchor: Anchor) {
        let Some(node) = self.html.tree.get(anchor.0) else {
            return;
        };
        let children: Vec<NodeId> = node.children().map(|c| c.id()).collect();
        for id in children {
            if let Some(mut child) = self.html.tree.get_mut(id) {
                child.detach();
            }
        }
    }

    /// Replace the anchor's content with a single text node.
    pub fn set_text(&mut self, anchor: Anchor, text: &str) {
        self.clear_children(anchor);
        if text.is_empty() {
            return;
        }
        if let Some(mut node) = self.html.tree.get_mut(anchor.0) {
            node.append(Node::Text(Text {
                text: StrTendril::from_slice(text),
            }));
        }
    }

    /// Set an attribute on the anchor element.
    ///
    /// `id` and `class` are refused: the element caches both on first read,
    /// so rewriting them in place would leave selector matching stale.
    pub fn set_attr(&mut self, anchor: Anchor, name: &str, value: &str) -> bool {
        if matches!(name, "id" | "class") {
            return false;
        }
        let Some(mut node) = self.html.tree.get_mut(anchor.0) else {
            return false;
        };
        let Node::Element(element) = node.value() else {
            return false;
        };

        let key = QualName::new(None, Namespace::from(""), LocalName::from(name));
        let value = StrTendril::from_slice(value);
        // Attributes are kept sorted by name; lookups binary-search them.
        match element.attrs.binary_search_by(|(k, _)| k.cmp(&key)) {
            Ok(idx) => element.attrs[idx].1 = value,
            Err(idx) => element.attrs.insert(idx, (key, value)),
        }
        true
    }

    /// Parse `markup` as a fragment, merge it into this tree, and return the
    /// ids of its top-level nodes (still owned by the fragment wrapper).
    fn graft(&mut self, markup: Markup) -> Vec<NodeId> {
        let fragment = Html::parse_fragment(&markup.into_string());
        let root = self.html.tree.extend_tree(fragment.tree).id();
        let Some(wrapper) = self
            .html
            .tree
            .get(root)
            .and_then(|r| r.children().find(|c| c.value().is_element()))
        else {
            return Vec::new();
        };
        wrapper.children().map(|c| c.id()).collect()
    }

    /// Regenerate the anchor's children from `markup`.
    ///
    /// Existing children are detached first, so binding twice yields the same
    /// content as binding once.
    pub fn replace_children(&mut self, anchor: Anchor, markup: Markup) {
        self.clear_children(anchor);
        self.append(anchor, markup);
    }

    /// Append `markup` as the anchor's last children. Returns the first
    /// appended element, if any.
    pub fn append(&mut self, anchor: Anchor, markup: Markup) -> Option<Anchor> {
        let ids = self.graft(markup);
        let mut target = self.html.tree.get_mut(anchor.0)?;
        for &id in &ids {
            target.append_id(id);
        }
        self.first_element(&ids)
    }

    /// Insert `markup` directly after the anchor. Returns the first inserted
    /// element, if any.
    pub fn insert_after(&mut self, anchor: Anchor, markup: Markup) -> Option<Anchor> {
        self.html.tree.get(anchor.0)?.parent()?;
        let ids = self.graft(markup);
        let mut cursor = anchor.0;
        for &id in &ids {
            let mut node = self.html.tree.get_mut(cursor)?;
            cursor = node.insert_id_after(id).id();
        }
        self.first_element(&ids)
    }

    fn first_element(&self, ids: &[NodeId]) -> Option<Anchor> {
        ids.iter()
            .copied()
            .find(|&id| self.element(Anchor(id)).is_some())
            .map(Anchor)
    }
}
