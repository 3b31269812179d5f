// src/core/dom.rs

// Document adapter over `scraper`: one parsed tree per session plus every
// structural/selector query the locator needs. Elements are handed around
// as `NodeId`s; borrow an `ElementRef` back through `get()`.

use std::cell::RefCell;
use std::collections::HashMap;

use ego_tree::NodeId;
use log::trace;
use scraper::{ElementRef, Html, Selector};

pub struct Dom {
    html: Html,
    // Whole-document evaluation results, keyed by rendered selector.
    // Single-threaded by construction, hence RefCell.
    memo: RefCell<HashMap<String, Vec<NodeId>>>,
}

impl Dom {
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
            memo: RefCell::new(HashMap::new()),
        }
    }

    /// All elements in document order (depth-first pre-order).
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.tree.root().descendants().filter_map(ElementRef::wrap)
    }

    /// Borrow an element back from its id. Ids only ever come from this
    /// tree, so a miss is a bug.
    pub fn get(&self, id: NodeId) -> ElementRef<'_> {
        let node = self
            .html
            .tree
            .get(id)
            .unwrap_or_else(|| panic!("internal: node id {id:?} not in this tree"));
        ElementRef::wrap(node)
            .unwrap_or_else(|| panic!("internal: node id {id:?} is not an element"))
    }

    // Borrows from the tree behind `el`, not from `&self`.
    pub fn parent<'a>(&self, el: ElementRef<'a>) -> Option<ElementRef<'a>> {
        el.parent().and_then(ElementRef::wrap)
    }

    /// Text owned by the element itself: its direct text-node children,
    /// concatenated. Descendant text is not included.
    pub fn direct_text(&self, el: ElementRef<'_>) -> String {
        let mut out = s!();
        for child in el.children() {
            if let scraper::Node::Text(t) = child.value() {
                out.push_str(&t.text);
            }
        }
        out
    }

    /// Class names in attribute declaration order. The order matters:
    /// jump tie-breaks keep the first-declared class.
    pub fn classes<'a>(&self, el: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
        el.value().attr("class").unwrap_or("").split_whitespace()
    }

    /// 0 = no same-tag siblings (no disambiguation needed);
    /// otherwise 1-based position among same-tag siblings.
    pub fn sibling_ordinal(&self, el: ElementRef<'_>) -> usize {
        let tag = el.value().name();
        let same = |s: &ElementRef<'_>| s.value().name() == tag;
        let before = el.prev_siblings().filter_map(ElementRef::wrap).filter(same).count();
        let after = el.next_siblings().filter_map(ElementRef::wrap).filter(same).count();
        if before + after == 0 { 0 } else { before + 1 }
    }

    /// Evaluate against the whole document, in document order. Memoized.
    pub fn select(&self, selector: &str) -> Vec<NodeId> {
        if let Some(hit) = self.memo.borrow().get(selector) {
            return hit.clone();
        }
        let compiled = compile(selector);
        let matches: Vec<NodeId> = self.html.select(&compiled).map(|el| el.id()).collect();
        trace!("select {selector:?} -> {} match(es)", matches.len());
        self.memo.borrow_mut().insert(s!(selector), matches.clone());
        matches
    }

    /// Match count within the subtree rooted at `scope`, the scope root
    /// itself included. Not memoized; jump probes rarely repeat a scope.
    pub fn scoped_count(&self, scope: ElementRef<'_>, selector: &str) -> usize {
        let compiled = compile(selector);
        let root = usize::from(compiled.matches(&scope));
        root + scope.select(&compiled).count()
    }
}

// Every selector here is rendered by us from hygiene-checked fragments,
// so a parse failure is a defect, not input.
fn compile(selector: &str) -> Selector {
    Selector::parse(selector)
        .unwrap_or_else(|e| panic!("internal: rendered selector {selector:?} rejected: {e}"))
}
