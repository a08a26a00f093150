//! Depth-first traversal with pre-order and post-order hooks.
//!
//! For each node the engine calls `for_<variant>_do_first`, then visits every
//! child left to right (declared field order, then sequence index order), then
//! calls `for_<variant>_only` with the results. Both hooks fall back through
//! the category lattice: `for_<category>_do_first` and `for_<category>_only`
//! chain to their parent up to `for_any_node_*`, which call
//! `default_do_first` and `default_case`.
//!
//! Variant-level `only` hooks receive each child's result as a typed argument
//! (a `Vec` for sequence fields). Category-level hooks cannot know the field
//! layout, so they receive the same results packed into [`Children`].

use std::sync::Arc;

use crate::ast::*;
use crate::visit::{NodeVisitor, NodeVisitorVoid};

/// Result of visiting one child field.
#[derive(Debug, Clone, PartialEq)]
pub enum ChildResult<R> {
    Single(R),
    Sequence(Vec<R>),
}

impl<R> ChildResult<R> {
    pub fn as_single(&self) -> Option<&R> {
        match self {
            ChildResult::Single(r) => Some(r),
            ChildResult::Sequence(_) => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[R]> {
        match self {
            ChildResult::Single(_) => None,
            ChildResult::Sequence(rs) => Some(rs),
        }
    }
}

/// Child results in declared field order, keyed by field name.
#[derive(Debug, Clone, PartialEq)]
pub struct Children<R> {
    entries: Vec<(&'static str, ChildResult<R>)>,
}

impl<R> Default for Children<R> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<R> Children<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_single(&mut self, field: &'static str, result: R) {
        self.entries.push((field, ChildResult::Single(result)));
    }

    pub fn push_sequence(&mut self, field: &'static str, results: Vec<R>) {
        self.entries.push((field, ChildResult::Sequence(results)));
    }

    pub fn get(&self, field: &str) -> Option<&ChildResult<R>> {
        self.entries.iter().find(|(name, _)| *name == field).map(|(_, r)| r)
    }

    pub fn single(&self, field: &str) -> Option<&R> {
        self.get(field).and_then(ChildResult::as_single)
    }

    pub fn sequence(&self, field: &str) -> Option<&[R]> {
        self.get(field).and_then(ChildResult::as_sequence)
    }

    /// Number of child fields (not child nodes).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ChildResult<R>)> {
        self.entries.iter().map(|(name, r)| (*name, r))
    }

    /// Every result in visit order, sequences spliced in place.
    pub fn flatten(self) -> Vec<R> {
        let mut out = Vec::new();
        for (_, result) in self.entries {
            match result {
                ChildResult::Single(r) => out.push(r),
                ChildResult::Sequence(rs) => out.extend(rs),
            }
        }
        out
    }
}

/// Adapter that runs a [`DepthFirstVisitor`] through [`Node::accept`].
pub struct DepthFirst<'a, V: ?Sized>(pub &'a mut V);

/// Adapter that runs a [`DepthFirstVisitorVoid`] through [`Node::accept_void`].
pub struct DepthFirstVoid<'a, V: ?Sized>(pub &'a mut V);

macro_rules! define_depth_first {
    (
        categories { $( $Cat:ident : $CatParent:ident ),* }
        nodes {
            $(
                $Name:ident : $Parent:ident {
                    $( $leaf:ident : $lty:ty ),* ;
                    $( $child:ident : $ckind:ident ),*
                }
            )*
        }
    ) => {
        paste::paste! {
            pub trait DepthFirstVisitor {
                type Output;

                /// Terminal post-order handler.
                fn default_case(
                    &mut self,
                    that: &Node,
                    children: Children<Self::Output>,
                ) -> Self::Output;

                /// Terminal pre-order hook.
                fn default_do_first(&mut self, _that: &Node) {}

                fn for_any_node_do_first(&mut self, that: &Node) {
                    self.default_do_first(that)
                }

                fn for_any_node_only(
                    &mut self,
                    that: &Node,
                    children: Children<Self::Output>,
                ) -> Self::Output {
                    self.default_case(that, children)
                }

                $(
                    fn [<for_ $Cat:snake _do_first>](&mut self, that: &Node) {
                        self.[<for_ $CatParent:snake _do_first>](that)
                    }

                    fn [<for_ $Cat:snake _only>](
                        &mut self,
                        that: &Node,
                        children: Children<Self::Output>,
                    ) -> Self::Output {
                        self.[<for_ $CatParent:snake _only>](that, children)
                    }
                )*

                $(
                    fn [<for_ $Name:snake _do_first>](&mut self, that: &Arc<$Name>) {
                        self.[<for_ $Parent:snake _do_first>](&Node::$Name(that.clone()))
                    }

                    fn [<for_ $Name:snake _only>](
                        &mut self,
                        that: &Arc<$Name>,
                        $( $child: child_result_ty!($ckind, Self::Output), )*
                    ) -> Self::Output {
                        #[allow(unused_mut)]
                        let mut children = Children::new();
                        $( push_result!(children, $child, $ckind); )*
                        self.[<for_ $Parent:snake _only>](&Node::$Name(that.clone()), children)
                    }
                )*

                /// Traverse `node` and return the result of its `only` hook.
                fn visit(&mut self, node: &Node) -> Self::Output {
                    tracing::trace!(root = %node.kind(), "depth-first traversal");
                    node.accept(&mut DepthFirst(self))
                }
            }

            pub trait DepthFirstVisitorVoid {
                /// Terminal post-order hook.
                fn default_case(&mut self, _that: &Node) {}

                /// Terminal pre-order hook.
                fn default_do_first(&mut self, _that: &Node) {}

                fn for_any_node_do_first(&mut self, that: &Node) {
                    self.default_do_first(that)
                }

                fn for_any_node_only(&mut self, that: &Node) {
                    self.default_case(that)
                }

                $(
                    fn [<for_ $Cat:snake _do_first>](&mut self, that: &Node) {
                        self.[<for_ $CatParent:snake _do_first>](that)
                    }

                    fn [<for_ $Cat:snake _only>](&mut self, that: &Node) {
                        self.[<for_ $CatParent:snake _only>](that)
                    }
                )*

                $(
                    fn [<for_ $Name:snake _do_first>](&mut self, that: &Arc<$Name>) {
                        self.[<for_ $Parent:snake _do_first>](&Node::$Name(that.clone()))
                    }

                    fn [<for_ $Name:snake _only>](&mut self, that: &Arc<$Name>) {
                        self.[<for_ $Parent:snake _only>](&Node::$Name(that.clone()))
                    }
                )*

                fn visit(&mut self, node: &Node) {
                    tracing::trace!(root = %node.kind(), "depth-first traversal");
                    node.accept_void(&mut DepthFirstVoid(self))
                }
            }

            impl<V: DepthFirstVisitor + ?Sized> NodeVisitor for DepthFirst<'_, V> {
                type Output = V::Output;

                $(
                    fn [<for_ $Name:snake>](&mut self, that: &Arc<$Name>) -> V::Output {
                        self.0.[<for_ $Name:snake _do_first>](that);
                        $( let $child = walk_child!(self, that.$child, $ckind); )*
                        self.0.[<for_ $Name:snake _only>](that, $( $child, )*)
                    }
                )*
            }

            impl<V: DepthFirstVisitorVoid + ?Sized> NodeVisitorVoid for DepthFirstVoid<'_, V> {
                $(
                    fn [<for_ $Name:snake>](&mut self, that: &Arc<$Name>) {
                        self.0.[<for_ $Name:snake _do_first>](that);
                        $( walk_child_void!(self, that.$child, $ckind); )*
                        self.0.[<for_ $Name:snake _only>](that)
                    }
                )*
            }
        }
    };
}

crate::for_each_node!(define_depth_first);
