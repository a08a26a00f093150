//! Visitors whose handlers fall back to their parent category.
//!
//! Each variant handler defaults to the handler of the category it hangs
//! under, each category handler to its own parent, and `for_any_node` to
//! `default_case`. Override `default_case` once for blanket behavior, then
//! override individual variants or categories to specialize.
//!
//! Category handlers take the node as a plain [`Node`]; variant handlers take
//! the typed payload.

use std::sync::Arc;

use crate::ast::*;
use crate::visit::{NodeVisitor, NodeVisitorVoid};

/// Adapter that lets an [`AbstractVisitor`] be passed to [`Node::accept`].
pub struct Fallback<'a, V: ?Sized>(pub &'a mut V);

/// Adapter that lets an [`AbstractVisitorVoid`] be passed to [`Node::accept_void`].
pub struct FallbackVoid<'a, V: ?Sized>(pub &'a mut V);

macro_rules! define_fallback {
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
            pub trait AbstractVisitor {
                type Output;

                /// Terminal handler every unhandled node reaches.
                fn default_case(&mut self, that: &Node) -> Self::Output;

                fn for_any_node(&mut self, that: &Node) -> Self::Output {
                    self.default_case(that)
                }

                $(
                    fn [<for_ $Cat:snake>](&mut self, that: &Node) -> Self::Output {
                        self.[<for_ $CatParent:snake>](that)
                    }
                )*

                $(
                    fn [<for_ $Name:snake>](&mut self, that: &Arc<$Name>) -> Self::Output {
                        self.[<for_ $Parent:snake>](&Node::$Name(that.clone()))
                    }
                )*

                /// Dispatch `node` to this visitor.
                fn visit(&mut self, node: &Node) -> Self::Output {
                    node.accept(&mut Fallback(self))
                }
            }

            pub trait AbstractVisitorVoid {
                fn default_case(&mut self, _that: &Node) {}

                fn for_any_node(&mut self, that: &Node) {
                    self.default_case(that)
                }

                $(
                    fn [<for_ $Cat:snake>](&mut self, that: &Node) {
                        self.[<for_ $CatParent:snake>](that)
                    }
                )*

                $(
                    fn [<for_ $Name:snake>](&mut self, that: &Arc<$Name>) {
                        self.[<for_ $Parent:snake>](&Node::$Name(that.clone()))
                    }
                )*

                fn visit(&mut self, node: &Node) {
                    node.accept_void(&mut FallbackVoid(self))
                }
            }

            impl<V: AbstractVisitor + ?Sized> NodeVisitor for Fallback<'_, V> {
                type Output = V::Output;

                $(
                    fn [<for_ $Name:snake>](&mut self, that: &Arc<$Name>) -> V::Output {
                        self.0.[<for_ $Name:snake>](that)
                    }
                )*
            }

            impl<V: AbstractVisitorVoid + ?Sized> NodeVisitorVoid for FallbackVoid<'_, V> {
                $(
                    fn [<for_ $Name:snake>](&mut self, that: &Arc<$Name>) {
                        self.0.[<for_ $Name:snake>](that)
                    }
                )*
            }
        }
    };
}

crate::for_each_node!(define_fallback);
