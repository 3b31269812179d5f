// src/locate/minimize.rs

// Shrink a chain to the shortest rendering that still pins the target:
// first with no ordinals, then over every subset of Tag ordinals by
// growing size, then positionally. Each trial renders pure from
// (chain, subset); nothing leaks between trials.

use ego_tree::NodeId;

use super::node::{render, Node};
use crate::config::ROOT_WRAPPERS;
use crate::core::Dom;

/// Produce the final (selector, index) pair for one chain.
///
/// `index` is absent when some rendering matches the target alone; the
/// positional fallback always succeeds because the target is in its own
/// selector's match set by construction. Anything else is a defect and
/// panics.
pub fn minimize(dom: &Dom, chain: &[Node], target: NodeId) -> (String, Option<usize>) {
    let bare = render(chain, &[]);
    if dom.select(&bare).len() == 1 {
        return (strip_wrappers(&bare), None);
    }

    let tags: Vec<usize> = chain
        .iter()
        .enumerate()
        .filter_map(|(i, n)| n.is_tag().then_some(i))
        .collect();

    for size in 1..=tags.len() {
        for combo in Combinations::new(tags.len(), size) {
            let active: Vec<usize> = combo.iter().map(|&i| tags[i]).collect();
            let selector = render(chain, &active);
            if dom.select(&selector).len() == 1 {
                return (strip_wrappers(&selector), None);
            }
        }
    }

    // Positional fallback: all ordinals shown, index into the match set.
    let selector = render(chain, &tags);
    let matches = dom.select(&selector);
    let index = matches
        .iter()
        .position(|&id| id == target)
        .unwrap_or_else(|| {
            panic!("internal: target missing from match set of {selector:?}")
        });
    (strip_wrappers(&selector), Some(index))
}

/// Drop the implicit document-root wrapper segments. Segment-wise and
/// in order: a leading bare `html`, then a bare `body`.
fn strip_wrappers(selector: &str) -> String {
    let segments: Vec<&str> = selector.split(' ').collect();
    let mut start = 0;
    for wrapper in ROOT_WRAPPERS {
        if segments.get(start) == Some(&wrapper) {
            start += 1;
        } else {
            break;
        }
    }
    segments[start..].join(" ")
}

/// Size-k subsets of `0..n` in index-lexicographic order.
struct Combinations {
    n: usize,
    k: usize,
    next: Option<Vec<usize>>,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        let next = (k <= n).then(|| (0..k).collect());
        Self { n, k, next }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        // Rightmost index that can still move right advances; everything
        // after it packs tight behind.
        let mut indices = current.clone();
        let mut i = self.k;
        while i > 0 {
            i -= 1;
            if indices[i] < self.n - (self.k - i) {
                indices[i] += 1;
                for j in i + 1..self.k {
                    indices[j] = indices[j - 1] + 1;
                }
                self.next = Some(indices);
                break;
            }
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::targets::find_targets;

    fn tag(name: &str, ordinal: usize) -> Node {
        Node::Tag { name: s!(name), ordinal }
    }

    #[test]
    fn combinations_are_lexicographic_by_growing_index() {
        let got: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            got,
            [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]
        );
    }

    #[test]
    fn combinations_full_and_oversized() {
        assert_eq!(Combinations::new(3, 3).collect::<Vec<_>>(), [[0, 1, 2]]);
        assert!(Combinations::new(2, 3).next().is_none());
    }

    #[test]
    fn strip_is_segment_wise_and_ordered() {
        assert_eq!(strip_wrappers("html body .a p"), ".a p");
        assert_eq!(strip_wrappers("html .a p"), ".a p");
        assert_eq!(strip_wrappers(".a p"), ".a p");
        // a lone leading body is a real segment, not the wrapper pair
        assert_eq!(strip_wrappers("body .a p"), "body .a p");
        // only bare tag segments strip
        assert_eq!(strip_wrappers("html body:nth-child(2) p"), "body:nth-child(2) p");
        // body does not strip unless html led
        assert_eq!(strip_wrappers("#top body p"), "#top body p");
    }

    #[test]
    fn unique_without_ordinals_returns_no_index() {
        let dom = Dom::parse("<html><body><div><p>only</p></div></body></html>");
        let target = find_targets(&dom, "only", false)[0];
        let chain = [tag("div", 0), tag("p", 0)];
        assert_eq!(minimize(&dom, &chain, target), (s!("div p"), None));
    }

    #[test]
    fn smallest_ordinal_subset_wins() {
        let dom = Dom::parse(
            "<html><body><div><p>a</p><p>b</p></div></body></html>",
        );
        let target = find_targets(&dom, "b", false)[0];
        let chain = [
            tag("html", 0),
            tag("body", 0),
            tag("div", 0),
            tag("p", 2),
        ];
        assert_eq!(minimize(&dom, &chain, target), (s!("div p:nth-child(2)"), None));
    }

    #[test]
    fn fallback_reports_position_in_match_set() {
        let dom = Dom::parse(
            r#"<html><body><div class="intro">
                <p class="info">a</p><p class="info">b</p>
            </div></body></html>"#,
        );
        let target = find_targets(&dom, "b", false)[0];
        let chain = [Node::Class(s!("intro")), Node::Class(s!("info"))];
        assert_eq!(minimize(&dom, &chain, target), (s!(".intro .info"), Some(1)));
    }
}
