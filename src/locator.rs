// src/locator.rs

use ego_tree::NodeId;

use crate::core::{net, Dom};
use crate::errors::LocateError;
use crate::locate::{self, targets};

/// One search session: one parsed document plus its selector memo.
/// Reusable across any number of `find` calls.
pub struct Locator {
    pub(crate) dom: Dom,
}

impl Locator {
    pub fn new(html: &str) -> Self {
        Self { dom: Dom::parse(html) }
    }

    /// Blocking fetch; the response body becomes the document.
    pub fn from_url(url: &str) -> Result<Self, LocateError> {
        let body = net::fetch_text(url)?;
        Ok(Self::new(&body))
    }

    /// One (selector, index) pair per matching element, in document
    /// order. Fresh iterator per call; construction is lazy per item.
    pub fn find<'a>(&'a self, text: &str, fuzzy: bool) -> Paths<'a> {
        Paths {
            dom: &self.dom,
            targets: self.scan(text, fuzzy).into_iter(),
        }
    }

    pub fn find_first(&self, text: &str, fuzzy: bool) -> Option<(String, Option<usize>)> {
        self.find(text, fuzzy).next()
    }

    pub(crate) fn scan(&self, text: &str, fuzzy: bool) -> Vec<NodeId> {
        targets::find_targets(&self.dom, text, fuzzy)
    }
}

/// Borrowing result iterator of [`Locator::find`].
pub struct Paths<'a> {
    dom: &'a Dom,
    targets: std::vec::IntoIter<NodeId>,
}

impl Iterator for Paths<'_> {
    type Item = (String, Option<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let target = self.targets.next()?;
        Some(locate::locate(self.dom, target))
    }
}
