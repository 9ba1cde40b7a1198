//! Arena-backed unit tree
//!
//! Units are addressed by [`UnitId`], an index into the owning [`UnitTree`].
//! [`Unit`] is a cheap borrowed view pairing the tree with an id; it is what
//! callers navigate with (`parent`, `children`, `terminals`, derived `id`).

use super::kind::UnitKind;
use super::metadata::{keys, Metadata};
use std::fmt;

/// Index of a unit inside its tree. Only meaningful for the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(usize);

impl UnitId {
    pub const ROOT: UnitId = UnitId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct UnitNode {
    kind: UnitKind,
    text: String,
    parent: Option<UnitId>,
    children: Vec<UnitId>,
    /// Position among the parent's children.
    sibling_index: usize,
    metadata: Metadata,
}

/// The owned hierarchy for one loaded document. Immutable once built.
#[derive(Debug, Clone)]
pub struct UnitTree {
    nodes: Vec<UnitNode>,
}

impl UnitTree {
    pub fn root(&self) -> Unit<'_> {
        Unit {
            tree: self,
            id: UnitId::ROOT,
        }
    }

    pub fn get(&self, id: UnitId) -> Option<Unit<'_>> {
        (id.0 < self.nodes.len()).then_some(Unit { tree: self, id })
    }

    /// Number of PARAGRAPH units under the root.
    pub fn paragraph_count(&self) -> usize {
        self.nodes[UnitId::ROOT.0].children.len()
    }

    pub fn paragraph(&self, index: usize) -> Option<Unit<'_>> {
        self.root().child(index)
    }

    pub fn paragraphs(&self) -> impl ExactSizeIterator<Item = Unit<'_>> + '_ {
        self.root().children()
    }

    /// True when the document produced no paragraph at all.
    pub fn is_empty(&self) -> bool {
        self.paragraph_count() == 0
    }

    /// Total number of units, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Every unit, parents before children, siblings in text order.
    pub fn units(&self) -> Vec<Unit<'_>> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![UnitId::ROOT];
        while let Some(id) = stack.pop() {
            out.push(Unit { tree: self, id });
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    /// Number of terminal units across the whole book.
    pub fn terminal_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.kind.is_terminal())
            .count()
    }

    fn node(&self, id: UnitId) -> &UnitNode {
        &self.nodes[id.0]
    }
}

/// Borrowed view of one unit.
#[derive(Clone, Copy)]
pub struct Unit<'t> {
    tree: &'t UnitTree,
    id: UnitId,
}

impl<'t> Unit<'t> {
    pub fn unit_id(&self) -> UnitId {
        self.id
    }

    pub fn kind(&self) -> UnitKind {
        self.node().kind
    }

    pub fn text(&self) -> &'t str {
        &self.node().text
    }

    pub fn metadata(&self) -> &'t Metadata {
        &self.node().metadata
    }

    pub fn is_terminal(&self) -> bool {
        self.kind().is_terminal()
    }

    /// Zero-based index among the parent's children (0 for the root).
    pub fn sibling_index(&self) -> usize {
        self.node().sibling_index
    }

    pub fn parent(&self) -> Option<Unit<'t>> {
        self.node().parent.map(|id| Unit {
            tree: self.tree,
            id,
        })
    }

    pub fn children(&self) -> impl ExactSizeIterator<Item = Unit<'t>> + 't {
        let tree = self.tree;
        tree.node(self.id)
            .children
            .iter()
            .map(move |&id| Unit { tree, id })
    }

    pub fn child(&self, index: usize) -> Option<Unit<'t>> {
        self.node().children.get(index).map(|&id| Unit {
            tree: self.tree,
            id,
        })
    }

    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    /// Number of edges between this unit and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(unit) = current {
            depth += 1;
            current = unit.parent();
        }
        depth
    }

    /// Derived identifier: `<parent.id>-<kindInitial><siblingIndex>`, root is `book`.
    pub fn id(&self) -> String {
        let mut segments = Vec::new();
        let mut current = *self;
        while let Some(parent) = current.parent() {
            segments.push(format!("{}{}", current.kind().initial(), current.sibling_index()));
            current = parent;
        }
        let mut id = current.kind().as_str().to_lowercase();
        for segment in segments.iter().rev() {
            id.push('-');
            id.push_str(segment);
        }
        id
    }

    /// Terminal descendants in text order, phrases flattened away.
    pub fn terminals(&self) -> Vec<Unit<'t>> {
        let mut out = Vec::new();
        self.collect_terminals(&mut out);
        out
    }

    pub fn terminal_count(&self) -> usize {
        if self.is_terminal() {
            return 1;
        }
        self.children().map(|child| child.terminal_count()).sum()
    }

    fn collect_terminals(&self, out: &mut Vec<Unit<'t>>) {
        if self.is_terminal() {
            out.push(*self);
            return;
        }
        for child in self.children() {
            child.collect_terminals(out);
        }
    }

    fn node(&self) -> &'t UnitNode {
        self.tree.node(self.id)
    }
}

impl PartialEq for Unit<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl fmt::Debug for Unit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("id", &self.id())
            .field("kind", &self.kind())
            .field("text", &self.text())
            .finish()
    }
}

/// Append-only construction of a [`UnitTree`].
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<UnitNode>,
}

impl TreeBuilder {
    /// Start a tree whose BOOK root carries `title` as text and metadata.
    pub fn new(title: &str) -> Self {
        let metadata = if title.is_empty() {
            Metadata::new()
        } else {
            Metadata::new().with(keys::TITLE, title)
        };
        TreeBuilder {
            nodes: vec![UnitNode {
                kind: UnitKind::Book,
                text: title.to_string(),
                parent: None,
                children: Vec::new(),
                sibling_index: 0,
                metadata,
            }],
        }
    }

    pub fn root(&self) -> UnitId {
        UnitId::ROOT
    }

    /// Number of children already attached to `parent`; the index the next child gets.
    pub fn child_count(&self, parent: UnitId) -> usize {
        self.nodes[parent.0].children.len()
    }

    /// Append a child to `parent` and return its id.
    ///
    /// Panics if `parent` is a terminal unit or was not issued by this builder.
    pub fn push(
        &mut self,
        parent: UnitId,
        kind: UnitKind,
        text: impl Into<String>,
        metadata: Metadata,
    ) -> UnitId {
        assert!(
            !self.nodes[parent.0].kind.is_terminal(),
            "terminal units cannot own children"
        );
        let id = UnitId(self.nodes.len());
        let sibling_index = self.nodes[parent.0].children.len();
        self.nodes.push(UnitNode {
            kind,
            text: text.into(),
            parent: Some(parent),
            children: Vec::new(),
            sibling_index,
            metadata,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn finish(self) -> UnitTree {
        UnitTree { nodes: self.nodes }
    }
}
