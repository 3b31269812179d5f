// src/locate/targets.rs

use ego_tree::NodeId;

use crate::core::Dom;

/// Elements whose directly-owned text matches the query, in document
/// order. Fuzzy = substring containment; exact = whole-text equality.
/// Elements owning no text never match.
pub fn find_targets(dom: &Dom, text: &str, fuzzy: bool) -> Vec<NodeId> {
    dom.elements()
        .filter(|el| {
            let own = dom.direct_text(*el);
            !own.is_empty() && if fuzzy { own.contains(text) } else { own == text }
        })
        .map(|el| el.id())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html><body>\
        <h1>greeting</h1>\
        <p>hello</p>\
        <p>hello world</p>\
        <div><span>other</span></div>\
    </body></html>";

    fn texts(dom: &Dom, hits: &[NodeId]) -> Vec<String> {
        hits.iter().map(|&id| dom.direct_text(dom.get(id))).collect()
    }

    #[test]
    fn fuzzy_matches_substrings_in_document_order() {
        let dom = Dom::parse(PAGE);
        let hits = find_targets(&dom, "hello", true);
        assert_eq!(texts(&dom, &hits), ["hello", "hello world"]);
    }

    #[test]
    fn exact_requires_whole_text() {
        let dom = Dom::parse(PAGE);
        let hits = find_targets(&dom, "hello", false);
        assert_eq!(texts(&dom, &hits), ["hello"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let dom = Dom::parse(PAGE);
        assert!(find_targets(&dom, "absent", true).is_empty());
    }

    #[test]
    fn descendant_text_does_not_count_as_own() {
        let dom = Dom::parse(PAGE);
        let hits = find_targets(&dom, "other", true);
        // the span owns it; the div does not
        assert_eq!(hits.len(), 1);
        assert_eq!(dom.get(hits[0]).value().name(), "span");
    }
}
