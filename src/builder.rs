use crate::ast::{Child, Node, NodeKind};
use crate::error::BuildError;
use crate::types::Attributes;

/// Build a node of the requested kind. Dispatches to the validator for
/// that kind; `None` attributes become an empty map.
pub fn construct(
    kind: NodeKind,
    attributes: Option<Attributes>,
    children: Vec<Child>,
) -> Result<Node, BuildError> {
    let attributes = attributes.unwrap_or_default();
    match kind {
        NodeKind::Sentence => make_sentence(attributes, children),
        NodeKind::Fragment => make_fragment(attributes, children),
        NodeKind::Template => make_template(attributes, children),
    }
}

/// Entry point for kinds arriving as strings from an untyped boundary.
/// Unrecognized kinds fail with `UnknownElementKind`; well-typed callers
/// should use [`construct`] directly, where that error cannot occur.
pub fn construct_named(
    kind: &str,
    attributes: Option<Attributes>,
    children: Vec<Child>,
) -> Result<Node, BuildError> {
    construct(kind.parse()?, attributes, children)
}

/// Top-level node. Node children must be fragments; bare strings pass
/// through untyped; anything that is neither a node nor a string is
/// dropped rather than rejected, tolerating stray values from conditional
/// composition. A dictionary-item list is object-shaped with the wrong
/// kind, so it is an error, not a drop.
pub fn make_sentence(attributes: Attributes, children: Vec<Child>) -> Result<Node, BuildError> {
    let mut kept = Vec::with_capacity(children.len());
    for (index, child) in children.into_iter().enumerate() {
        match child {
            Child::Node(node) => {
                if node.kind() != NodeKind::Fragment {
                    return Err(BuildError::InvalidChildKind {
                        parent: NodeKind::Sentence,
                        index,
                        found: format!("{} node", node.kind()),
                        expected: "fragment",
                    });
                }
                kept.push(Child::Node(node));
            }
            Child::Items(_) => {
                return Err(BuildError::InvalidChildKind {
                    parent: NodeKind::Sentence,
                    index,
                    found: "dictionary items".to_string(),
                    expected: "fragment",
                });
            }
            Child::Text(text) => kept.push(Child::Text(text)),
            // getters and raw values are silently dropped
            Child::Getter(_) | Child::Raw(_) => {}
        }
    }
    Ok(Node::new(NodeKind::Sentence, attributes, kept))
}

/// Mid-level node. Every child must already be a template node; nothing is
/// dropped, and the first offender by order fails the construction.
pub fn make_fragment(attributes: Attributes, children: Vec<Child>) -> Result<Node, BuildError> {
    for (index, child) in children.iter().enumerate() {
        match child {
            Child::Node(node) if node.kind() == NodeKind::Template => {}
            other => {
                return Err(BuildError::InvalidChildKind {
                    parent: NodeKind::Fragment,
                    index,
                    found: other.describe(),
                    expected: "template",
                });
            }
        }
    }
    Ok(Node::new(NodeKind::Fragment, attributes, children))
}

/// Leaf node. Children are literal text, deferred generators, or resolved
/// dictionary items. Generators are stored as-is; invoking them is the
/// renderer's job, so the same template can yield different text each time.
pub fn make_template(attributes: Attributes, children: Vec<Child>) -> Result<Node, BuildError> {
    for (index, child) in children.iter().enumerate() {
        match child {
            Child::Text(_) | Child::Getter(_) | Child::Items(_) => {}
            other => {
                return Err(BuildError::InvalidChildKind {
                    parent: NodeKind::Template,
                    index,
                    found: other.describe(),
                    expected: "text, generator, or dictionary items",
                });
            }
        }
    }
    Ok(Node::new(NodeKind::Template, attributes, children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DictionaryItem, RandomItemGetter};
    use serde_json::json;

    fn template() -> Node {
        make_template(Attributes::new(), vec![Child::from("word")]).unwrap()
    }

    fn fragment() -> Node {
        make_fragment(Attributes::new(), vec![Child::from(template())]).unwrap()
    }

    #[test]
    fn sentence_rejects_non_fragment_nodes() {
        let err = make_sentence(
            Attributes::new(),
            vec![Child::from(fragment()), Child::from(template())],
        )
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidChildKind {
                parent: NodeKind::Sentence,
                index: 1,
                found: "template node".to_string(),
                expected: "fragment",
            }
        );
    }

    #[test]
    fn sentence_rejects_dictionary_items() {
        let items = vec![DictionaryItem::new(json!("cat"))];
        let err = make_sentence(Attributes::new(), vec![Child::Items(items)]).unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidChildKind {
                parent: NodeKind::Sentence,
                expected: "fragment",
                ..
            }
        ));
    }

    #[test]
    fn sentence_drops_getters_and_raw_values() {
        let getter = RandomItemGetter::new(|| DictionaryItem::new(json!("dog")));
        let node = make_sentence(
            Attributes::new(),
            vec![
                Child::from(fragment()),
                Child::Getter(getter),
                Child::Raw(json!(null)),
                Child::Raw(json!(false)),
            ],
        )
        .unwrap();
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn fragment_rejects_everything_but_template_nodes() {
        for bad in [
            Child::from(fragment()),
            Child::from("text"),
            Child::Raw(json!(1)),
            Child::Items(vec![]),
        ] {
            let found = bad.describe();
            let err = make_fragment(Attributes::new(), vec![Child::from(template()), bad])
                .unwrap_err();
            assert_eq!(
                err,
                BuildError::InvalidChildKind {
                    parent: NodeKind::Fragment,
                    index: 1,
                    found,
                    expected: "template",
                }
            );
        }
    }

    #[test]
    fn fragment_keeps_input_sequence_unmodified() {
        let a = template();
        let b = template();
        let node = make_fragment(
            Attributes::new(),
            vec![Child::from(a.clone()), Child::from(b.clone())],
        )
        .unwrap();
        assert_eq!(node.children(), &[Child::Node(a), Child::Node(b)]);
    }

    #[test]
    fn template_rejects_nodes_and_raw_values() {
        let err = make_template(Attributes::new(), vec![Child::from(fragment())]).unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidChildKind {
                parent: NodeKind::Template,
                index: 0,
                found: "fragment node".to_string(),
                expected: "text, generator, or dictionary items",
            }
        );

        let err = make_template(Attributes::new(), vec![Child::Raw(json!(42))]).unwrap_err();
        assert!(matches!(err, BuildError::InvalidChildKind { index: 0, .. }));
    }
}
