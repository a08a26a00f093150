//! Visitor infrastructure for the syntax tree.
//!
//! Dispatch is exact: [`Node::accept`] calls the one handler whose variant
//! matches the node, and a visitor must supply a handler for every variant.
//! On top of the two total contracts sit the engines that make that cheap to
//! do:
//!
//! - [`NodeVisitor`] / [`NodeVisitorVoid`]: one required method per variant.
//! - [`AbstractVisitor`] / [`AbstractVisitorVoid`]: every handler defaults to
//!   its parent category's handler, ending at a single `default_case`.
//! - [`DepthFirstVisitor`] / [`DepthFirstVisitorVoid`]: a `*_do_first` hook
//!   before the children are visited and a `*_only` hook after, both falling
//!   back up the lattice.
//! - [`Rewriter`]: depth-first, rebuilding every node from its rewritten
//!   children unless a handler substitutes something else.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use jtree::ast::{IntegerLiteral, Node, PlusExpression};
//! use jtree::source::SourceInfo;
//! use jtree::visit::DepthFirstVisitorVoid;
//!
//! struct Literals(Vec<i32>);
//!
//! impl DepthFirstVisitorVoid for Literals {
//!     fn for_integer_literal_only(&mut self, that: &Arc<IntegerLiteral>) {
//!         self.0.push(that.value());
//!     }
//! }
//!
//! let one: Node = IntegerLiteral::new(SourceInfo::dummy(), 1).into();
//! let two: Node = IntegerLiteral::new(SourceInfo::dummy(), 2).into();
//! let sum: Node = PlusExpression::new(SourceInfo::dummy(), one, two).into();
//!
//! let mut literals = Literals(Vec::new());
//! literals.visit(&sum);
//! assert_eq!(literals.0, vec![1, 2]);
//! ```
//!
//! ## When to Use
//!
//! Use the fallback or depth-first engines when most variants share one
//! behavior. Use a plain `match` on [`Node`] when most arms have custom logic.

use std::sync::Arc;

use crate::ast::*;

pub mod composers;
pub mod depth_first;
pub mod fallback;
pub mod rewrite;

pub use depth_first::{
    ChildResult, Children, DepthFirst, DepthFirstVisitor, DepthFirstVisitorVoid, DepthFirstVoid,
};
pub use fallback::{AbstractVisitor, AbstractVisitorVoid, Fallback, FallbackVoid};
pub use rewrite::Rewriter;

macro_rules! define_visitors {
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
            /// Value-returning visitor: one handler per variant.
            pub trait NodeVisitor {
                type Output;

                $( fn [<for_ $Name:snake>](&mut self, that: &Arc<$Name>) -> Self::Output; )*
            }

            /// Side-effecting visitor: one handler per variant.
            pub trait NodeVisitorVoid {
                $( fn [<for_ $Name:snake>](&mut self, that: &Arc<$Name>); )*
            }

            impl Node {
                /// Call the handler for this node's exact variant.
                pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
                    match self {
                        $( Node::$Name(n) => visitor.[<for_ $Name:snake>](n), )*
                    }
                }

                pub fn accept_void<V: NodeVisitorVoid + ?Sized>(&self, visitor: &mut V) {
                    match self {
                        $( Node::$Name(n) => visitor.[<for_ $Name:snake>](n), )*
                    }
                }
            }
        }
    };
}

crate::for_each_node!(define_visitors);
