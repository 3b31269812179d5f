// src/locate/node.rs

// Path fragments and their rendering. Rendering is pure: whether a Tag
// fragment shows its position is decided per trial by the caller, never
// stored on the node.

/// One fragment of a root-to-target chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// `#value`. Assumed unique; terminates chain construction.
    Id(String),
    /// `.value`. May anchor a jump (construction resumed above the scope).
    Class(String),
    /// Bare tag name, or `tag:nth-child(ordinal)` when shown and ordinal > 0.
    Tag { name: String, ordinal: usize },
}

impl Node {
    pub fn is_tag(&self) -> bool {
        matches!(self, Node::Tag { .. })
    }

    fn fragment(&self, show_position: bool) -> String {
        match self {
            Node::Id(value) => format!("#{value}"),
            Node::Class(name) => format!(".{name}"),
            Node::Tag { name, ordinal } if show_position && *ordinal > 0 => {
                format!("{name}:nth-child({ordinal})")
            }
            Node::Tag { name, .. } => s!(name.as_str()),
        }
    }
}

/// Join fragments with the descendant combinator. `active` holds the
/// chain indices whose Tag ordinal is rendered this trial.
pub fn render(chain: &[Node], active: &[usize]) -> String {
    let fragments: Vec<String> = chain
        .iter()
        .enumerate()
        .map(|(i, node)| node.fragment(active.contains(&i)))
        .collect();
    fragments.join(" ")
}

/// Conservative CSS identifier check. Id/class values failing this are
/// skipped as hints: interpolating them would make every later oracle
/// query unparseable.
pub fn is_css_identifier(s: &str) -> bool {
    fn head(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
    }
    fn tail(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
    }
    let mut chars = s.chars();
    let ok = match chars.next() {
        Some('-') => matches!(chars.next(), Some(c) if head(c)),
        Some(c) => head(c),
        None => false,
    };
    ok && chars.all(tail)
}
