//! Composition utilities for common visitor patterns.
//!
//! This module provides helper functions that reduce boilerplate when writing
//! visitors for common tasks like finding, counting, and collecting nodes.
//! All of them walk the tree in pre-order; the searches stop at the first
//! match.
//!
//! # Examples
//!
//! ```
//! use jtree::ast::{Category, IntegerLiteral, Node, NodeKind, PlusExpression};
//! use jtree::source::SourceInfo;
//! use jtree::visit::composers::*;
//!
//! let one: Node = IntegerLiteral::new(SourceInfo::dummy(), 1).into();
//! let two: Node = IntegerLiteral::new(SourceInfo::dummy(), 2).into();
//! let expr: Node = PlusExpression::new(SourceInfo::dummy(), one, two).into();
//!
//! // Check for any literal
//! assert!(contains(&expr, |n| n.is_a(Category::LexicalLiteral)));
//!
//! // Count integer literals
//! assert_eq!(count(&expr, |n| n.kind() == NodeKind::IntegerLiteral), 2);
//!
//! // Collect literal values
//! let values = collect(&expr, |n| n.as_integer_literal().map(|lit| lit.value()));
//! assert_eq!(values, vec![1, 2]);
//! ```

use std::sync::Arc;

use crate::ast::*;
use crate::visit::{AbstractVisitorVoid, Children, DepthFirstVisitor, DepthFirstVisitorVoid};

// ============================================================================
// Detection / Predicate Helpers
// ============================================================================

/// Check if a tree contains any node matching a predicate.
///
/// Stops testing nodes after the first match.
pub fn contains<F>(root: &Node, predicate: F) -> bool
where
    F: Fn(&Node) -> bool,
{
    find_first(root, predicate).is_some()
}

/// First node in pre-order matching a predicate.
///
/// Descends child by child and returns as soon as a node matches; later
/// siblings and their subtrees are never tested.
pub fn find_first<F>(root: &Node, predicate: F) -> Option<Node>
where
    F: Fn(&Node) -> bool,
{
    struct Finder<F> {
        predicate: F,
        found: Option<Node>,
    }

    impl<F> AbstractVisitorVoid for Finder<F>
    where
        F: Fn(&Node) -> bool,
    {
        fn default_case(&mut self, that: &Node) {
            if (self.predicate)(that) {
                self.found = Some(that.clone());
                return;
            }
            for child in that.children() {
                self.visit(child);
                if self.found.is_some() {
                    return;
                }
            }
        }
    }

    let mut finder = Finder { predicate, found: None };
    finder.visit(root);
    finder.found
}

// ============================================================================
// Counting Helpers
// ============================================================================

/// Count nodes matching a predicate.
pub fn count<F>(root: &Node, predicate: F) -> usize
where
    F: Fn(&Node) -> bool,
{
    struct Counter<F> {
        predicate: F,
        count: usize,
    }

    impl<F> DepthFirstVisitorVoid for Counter<F>
    where
        F: Fn(&Node) -> bool,
    {
        fn default_do_first(&mut self, that: &Node) {
            if (self.predicate)(that) {
                self.count += 1;
            }
        }
    }

    let mut counter = Counter { predicate, count: 0 };
    counter.visit(root);
    counter.count
}

/// Total number of nodes, root included.
pub fn node_count(root: &Node) -> usize {
    count(root, |_| true)
}

/// Length of the longest root-to-leaf path, counted in nodes.
pub fn max_depth(root: &Node) -> usize {
    struct Depth;

    impl DepthFirstVisitor for Depth {
        type Output = usize;

        fn default_case(&mut self, _that: &Node, children: Children<usize>) -> usize {
            1 + children.flatten().into_iter().max().unwrap_or(0)
        }
    }

    Depth.visit(root)
}

// ============================================================================
// Collection Helpers
// ============================================================================

/// Collect values from nodes in pre-order.
///
/// The mapper returns `Some(value)` to collect or `None` to skip.
pub fn collect<T, F>(root: &Node, mapper: F) -> Vec<T>
where
    F: FnMut(&Node) -> Option<T>,
{
    struct Collector<T, F> {
        mapper: F,
        items: Vec<T>,
    }

    impl<T, F> DepthFirstVisitorVoid for Collector<T, F>
    where
        F: FnMut(&Node) -> Option<T>,
    {
        fn default_do_first(&mut self, that: &Node) {
            if let Some(item) = (self.mapper)(that) {
                self.items.push(item);
            }
        }
    }

    let mut collector = Collector { mapper, items: Vec::new() };
    collector.visit(root);
    collector.items
}

/// Collect every `Word` text in pre-order, e.g. the parts of a compound name.
pub fn collect_words(root: &Node) -> Vec<String> {
    collect(root, |n| n.as_word().map(|w| w.text().to_string()))
}

/// Collect every node of one variant, typed.
pub fn collect_integer_literals(root: &Node) -> Vec<Arc<IntegerLiteral>> {
    collect(root, |n| n.as_integer_literal().cloned())
}
