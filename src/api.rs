// src/api.rs

// Free-function entry points over a one-shot session. `url` wins over
// `html`; empty strings count as absent; neither present is an error
// raised before any parsing.

use ego_tree::NodeId;

use crate::errors::LocateError;
use crate::locate;
use crate::locator::Locator;

#[derive(Clone, Debug)]
pub struct Params {
    /// Markup to search. Ignored when `url` is set.
    pub html: Option<String>,
    /// Location to fetch markup from (blocking GET).
    pub url: Option<String>,
    /// Substring containment vs whole-text equality.
    pub fuzzy: bool,
}

impl Params {
    pub fn new() -> Self {
        Self { html: None, url: None, fuzzy: true }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

/// One (selector, index) pair per element whose text matches `target`,
/// in document order. The iterator owns its session and is produced
/// fresh per call.
pub fn find(params: &Params, target: &str) -> Result<Hits, LocateError> {
    let locator = session(params)?;
    let targets = locator.scan(target, params.fuzzy);
    Ok(Hits { locator, targets: targets.into_iter() })
}

/// Like [`find`], first pair only.
pub fn find_first(
    params: &Params,
    target: &str,
) -> Result<Option<(String, Option<usize>)>, LocateError> {
    Ok(find(params, target)?.next())
}

fn session(params: &Params) -> Result<Locator, LocateError> {
    let html = params.html.as_deref().filter(|s| !s.is_empty());
    let url = params.url.as_deref().filter(|s| !s.is_empty());
    match (html, url) {
        (None, None) => Err(LocateError::NoSource),
        (_, Some(url)) => Locator::from_url(url),
        (Some(html), None) => Ok(Locator::new(html)),
    }
}

/// Owning result iterator of [`find`]. Target elements are scanned up
/// front; each selector is constructed on demand.
pub struct Hits {
    locator: Locator,
    targets: std::vec::IntoIter<NodeId>,
}

impl Iterator for Hits {
    type Item = (String, Option<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let target = self.targets.next()?;
        Some(locate::locate(&self.locator.dom, target))
    }
}
