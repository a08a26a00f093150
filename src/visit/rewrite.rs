//! Tree-to-tree rewriting.
//!
//! A [`Rewriter`] is a depth-first value visitor producing [`Node`]s. By
//! default every `for_<variant>_only` hook rebuilds its node from the
//! rewritten children, keeping provenance and leaf values, so a rewriter with
//! no overrides returns a fresh tree equal to its input. Override the hook for
//! the variants to replace and leave the rest alone.
//!
//! Children are untyped [`Node`]s: returning, say, a statement where an
//! expression belongs is not detected here.

use std::sync::Arc;

use crate::ast::*;
use crate::visit::{Children, DepthFirstVisitor};

/// Adapter that drives a [`Rewriter`] through the depth-first engine.
struct Rewrite<'a, R: ?Sized>(&'a mut R);

macro_rules! define_rewriter {
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
            pub trait Rewriter {
                $(
                    fn [<for_ $Name:snake _do_first>](&mut self, _that: &Arc<$Name>) {}

                    fn [<for_ $Name:snake _only>](
                        &mut self,
                        that: &Arc<$Name>,
                        $( $child: child_ty!($ckind), )*
                    ) -> Node {
                        Node::from(that.rebuild($( $child, )*))
                    }
                )*

                /// Rewrite the tree rooted at `node`.
                fn rewrite(&mut self, node: &Node) -> Node {
                    tracing::trace!(root = %node.kind(), "rewrite pass");
                    Rewrite(self).visit(node)
                }
            }

            impl<R: Rewriter + ?Sized> DepthFirstVisitor for Rewrite<'_, R> {
                type Output = Node;

                fn default_case(&mut self, that: &Node, _children: Children<Node>) -> Node {
                    that.clone()
                }

                $(
                    fn [<for_ $Name:snake _do_first>](&mut self, that: &Arc<$Name>) {
                        self.0.[<for_ $Name:snake _do_first>](that)
                    }

                    fn [<for_ $Name:snake _only>](
                        &mut self,
                        that: &Arc<$Name>,
                        $( $child: child_ty!($ckind), )*
                    ) -> Node {
                        self.0.[<for_ $Name:snake _only>](that, $( $child, )*)
                    }
                )*
            }
        }
    };
}

crate::for_each_node!(define_rewriter);
