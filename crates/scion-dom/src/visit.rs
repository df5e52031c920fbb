//! Mutation-safe pre-order traversal.
//!
//! The walk owns an index cursor into each element's child list instead of
//! iterating the list by reference. That keeps the traversal well-defined
//! when the visitor replaces the children of the element it is currently
//! looking at: returning [`Flow::SkipChildren`] guarantees the fresh content
//! is never descended into, and siblings keep their scheduled visits.

use crate::tree::{Element, Node};

/// What the traversal should do after visiting an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Descend into the element's children.
    Continue,
    /// Do not descend. Use this after replacing the element's children
    /// in place, so substituted content is not re-visited.
    SkipChildren,
}

/// Visit `root` and every element beneath it in pre-order.
///
/// The visitor may freely mutate the element it receives, including
/// replacing its attribute map and child list. An `Err` aborts the walk
/// immediately and is returned to the caller.
pub fn visit_mut<E, F>(root: &mut Element, visitor: &mut F) -> Result<(), E>
where
    F: FnMut(&mut Element) -> Result<Flow, E>,
{
    if visitor(root)? == Flow::SkipChildren {
        return Ok(());
    }

    let mut index = 0;
    while index < root.children.len() {
        if let Node::Element(child) = &mut root.children[index] {
            visit_mut(child, visitor)?;
        }
        index += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{el, text};

    fn sample() -> Element {
        el(
            "div",
            &[],
            vec![
                el("p", &[], vec![text("a")]).into(),
                el("pre", &[], vec![el("code", &[], vec![]).into()]).into(),
                el("p", &[], vec![text("b")]).into(),
            ],
        )
    }

    #[test]
    fn preorder_visit_order() {
        let mut tree = sample();
        let mut tags = Vec::new();
        visit_mut::<(), _>(&mut tree, &mut |element| {
            tags.push(element.tag.clone());
            Ok(Flow::Continue)
        })
        .unwrap();
        assert_eq!(tags, ["div", "p", "pre", "code", "p"]);
    }

    #[test]
    fn skip_children_prevents_descent_into_replacement() {
        let mut tree = sample();
        let mut tags = Vec::new();
        visit_mut::<(), _>(&mut tree, &mut |element| {
            tags.push(element.tag.clone());
            if element.tag == "pre" {
                // Replace the subtree, as a splice would.
                element.children = vec![el("span", &[], vec![]).into()];
                return Ok(Flow::SkipChildren);
            }
            Ok(Flow::Continue)
        })
        .unwrap();
        // The fresh span is not visited; the trailing sibling still is.
        assert_eq!(tags, ["div", "p", "pre", "p"]);
    }

    #[test]
    fn error_aborts_the_walk() {
        let mut tree = sample();
        let mut visited = 0;
        let result = visit_mut::<&str, _>(&mut tree, &mut |element| {
            visited += 1;
            if element.tag == "pre" {
                return Err("boom");
            }
            Ok(Flow::Continue)
        });
        assert_eq!(result, Err("boom"));
        assert_eq!(visited, 3);
    }
}
