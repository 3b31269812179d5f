// src/locate/path.rs

// Upward chain construction: at each element try, in order, a usable id,
// a globally-unique class, the longest class jump, and finally a tag with
// its sibling ordinal. Explicit loop; depth is bounded by the tree.

use ego_tree::NodeId;
use log::debug;
use scraper::ElementRef;

use super::node::{is_css_identifier, Node};
use crate::core::Dom;

/// Build the root-to-target chain for one element.
pub fn build_chain(dom: &Dom, target: NodeId) -> Vec<Node> {
    let mut chain = Vec::new();
    let mut cursor = Some(dom.get(target));

    while let Some(e) = cursor {
        match e.value().attr("id") {
            Some(id) if is_css_identifier(id) => {
                chain.push(Node::Id(s!(id)));
                break;
            }
            Some(id) => debug!("id {id:?} is not a CSS identifier; skipped as hint"),
            None => {}
        }

        let classes: Vec<&str> = dom
            .classes(e)
            .filter(|c| {
                let ok = is_css_identifier(c);
                if !ok {
                    debug!("class {c:?} is not a CSS identifier; skipped as hint");
                }
                ok
            })
            .collect();

        // Unique across the whole document: the class alone pins the scope.
        if let Some(name) = classes.iter().find(|c| dom.select(&format!(".{c}")).len() == 1) {
            chain.push(Node::Class(s!(*name)));
            break;
        }

        // Longest jump wins; on equal distance the first-declared class.
        let mut best: Option<(i64, Option<ElementRef<'_>>, &str)> = None;
        for &name in &classes {
            let (distance, resume) = longest_jump(dom, e, name);
            if best.is_none_or(|(d, _, _)| distance > d) {
                best = Some((distance, resume, name));
            }
        }
        if let Some((distance, resume, name)) = best {
            if distance >= 0 {
                debug!("jump on .{name} (distance {distance})");
                chain.push(Node::Class(s!(name)));
                cursor = resume;
                continue;
            }
        }

        chain.push(Node::Tag {
            name: s!(e.value().name()),
            ordinal: dom.sibling_ordinal(e),
        });
        cursor = dom.parent(e);
    }

    chain.reverse();
    chain
}

/// Climb from `start` while `.class_name` stays unique in the subtree of
/// the current ancestor (ancestor itself included). Returns the climb
/// distance (-1 when not even `start`'s own subtree is unique, so no
/// usable jump) and the element construction resumes at: for distance 0
/// the start's parent, otherwise the highest still-unique ancestor,
/// which then contributes its own fragment to anchor the scope.
fn longest_jump<'a>(
    dom: &'a Dom,
    start: ElementRef<'a>,
    class_name: &str,
) -> (i64, Option<ElementRef<'a>>) {
    let selector = format!(".{class_name}");
    let mut distance: i64 = -1;
    let mut highest = start;
    let mut cursor = Some(start);

    while let Some(scope) = cursor {
        if dom.scoped_count(scope, &selector) != 1 {
            break;
        }
        distance += 1;
        highest = scope;
        cursor = dom.parent(scope);
    }

    let resume = if distance == 0 { dom.parent(highest) } else { Some(highest) };
    (distance, resume)
}
