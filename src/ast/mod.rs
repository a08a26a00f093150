//! Immutable syntax tree for a Java-like source language.
//!
//! Each concrete node shape is a payload struct (`PlusExpression`,
//! `ArrayAccess`, ...) shared behind an `Arc` and wrapped in the closed
//! [`Node`] union. Payloads are built once through their `new` constructor and
//! are read-only afterwards; the rewrite engine produces new nodes instead of
//! editing old ones.
//!
//! Equality and hashing are structural and ignore [`SourceInfo`]. The
//! structural hash combines a per-variant identity hash with the XOR of every
//! field hash, so swapping two same-typed fields (or two elements of a
//! sequence) leaves it unchanged. Use [`Node::content_hash`] when the order of
//! fields has to matter.

mod builder;
mod fields;
mod lattice;
mod table;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

pub use builder::NodeBuilder;
pub use fields::{FieldSpec, FieldType, FieldValue, Leaf, Modifier, Modifiers};

use crate::source::SourceInfo;

macro_rules! define_nodes {
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
            $(
                pub struct $Name {
                    pub(crate) source: SourceInfo,
                    $( pub(crate) $leaf: $lty, )*
                    $( pub(crate) $child: child_ty!($ckind), )*
                    pub(crate) hash: OnceLock<u64>,
                }

                impl $Name {
                    pub const FIELDS: &'static [FieldSpec] = &[
                        $( FieldSpec::new(stringify!($leaf), <$lty as Leaf>::FIELD_TYPE), )*
                        $( FieldSpec::new(stringify!($child), child_field_type!($ckind)), )*
                    ];

                    #[allow(clippy::too_many_arguments)]
                    pub fn new(
                        source: SourceInfo,
                        $( $leaf: $lty, )*
                        $( $child: child_ty!($ckind), )*
                    ) -> Self {
                        Self {
                            source,
                            $( $leaf, )*
                            $( $child, )*
                            hash: OnceLock::new(),
                        }
                    }

                    /// Same variant, provenance and leaves with new children.
                    #[allow(clippy::too_many_arguments)]
                    pub fn rebuild(&self, $( $child: child_ty!($ckind), )*) -> Self {
                        Self::new(
                            self.source.clone(),
                            $( self.$leaf.clone(), )*
                            $( $child, )*
                        )
                    }

                    pub fn source(&self) -> &SourceInfo {
                        &self.source
                    }

                    $(
                        pub fn $leaf(&self) -> <$lty as Leaf>::Ref<'_> {
                            Leaf::get(&self.$leaf)
                        }
                    )*

                    $(
                        pub fn $child(&self) -> child_ref!($ckind) {
                            &self.$child
                        }
                    )*

                    pub fn structural_hash(&self) -> u64 {
                        *self.hash.get_or_init(|| {
                            NodeKind::$Name.identity_hash()
                                $( ^ Leaf::leaf_hash(&self.$leaf) )*
                                $( ^ child_hash!(self.$child, $ckind) )*
                        })
                    }
                }

                impl PartialEq for $Name {
                    #[allow(unused_variables)]
                    fn eq(&self, other: &Self) -> bool {
                        true
                            $( && Leaf::leaf_eq(&self.$leaf, &other.$leaf) )*
                            $( && self.$child == other.$child )*
                    }
                }

                impl Eq for $Name {}

                impl Hash for $Name {
                    fn hash<H: Hasher>(&self, state: &mut H) {
                        state.write_u64(self.structural_hash());
                    }
                }

                impl fmt::Debug for $Name {
                    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.debug_struct(stringify!($Name))
                            $( .field(stringify!($leaf), &self.$leaf) )*
                            $( .field(stringify!($child), &self.$child) )*
                            .finish()
                    }
                }

                impl From<$Name> for Node {
                    fn from(node: $Name) -> Self {
                        Node::$Name(Arc::new(node))
                    }
                }

                impl From<Arc<$Name>> for Node {
                    fn from(node: Arc<$Name>) -> Self {
                        Node::$Name(node)
                    }
                }
            )*

            /// Any node of the tree. Cloning shares the payload.
            #[derive(Clone)]
            pub enum Node {
                $( $Name(Arc<$Name>), )*
            }

            impl Node {
                pub fn kind(&self) -> NodeKind {
                    match self {
                        $( Node::$Name(_) => NodeKind::$Name, )*
                    }
                }

                pub fn source(&self) -> &SourceInfo {
                    match self {
                        $( Node::$Name(n) => &n.source, )*
                    }
                }

                /// Direct children in declared field order, sequences flattened.
                pub fn children(&self) -> Vec<&Node> {
                    match self {
                        $(
                            #[allow(unused_variables)]
                            Node::$Name(n) => {
                                #[allow(unused_mut)]
                                let mut out = Vec::new();
                                $( push_child!(out, n.$child, $ckind); )*
                                out
                            }
                        )*
                    }
                }

                pub fn structural_hash(&self) -> u64 {
                    match self {
                        $( Node::$Name(n) => n.structural_hash(), )*
                    }
                }

                $(
                    pub fn [<as_ $Name:snake>](&self) -> Option<&Arc<$Name>> {
                        match self {
                            Node::$Name(n) => Some(n),
                            _ => None,
                        }
                    }
                )*
            }

            impl PartialEq for Node {
                fn eq(&self, other: &Self) -> bool {
                    match (self, other) {
                        $( (Node::$Name(a), Node::$Name(b)) => Arc::ptr_eq(a, b) || **a == **b, )*
                        _ => false,
                    }
                }
            }

            impl fmt::Debug for Node {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self {
                        $( Node::$Name(n) => fmt::Debug::fmt(&**n, f), )*
                    }
                }
            }

            /// Tag of a concrete variant, without its payload.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub enum NodeKind {
                $( $Name, )*
            }

            impl NodeKind {
                pub const ALL: &'static [NodeKind] = &[ $( NodeKind::$Name, )* ];

                pub const fn name(self) -> &'static str {
                    match self {
                        $( NodeKind::$Name => stringify!($Name), )*
                    }
                }

                pub fn from_name(name: &str) -> Option<NodeKind> {
                    match name {
                        $( stringify!($Name) => Some(NodeKind::$Name), )*
                        _ => None,
                    }
                }

                /// The category this variant hangs under in the lattice.
                pub const fn parent(self) -> Category {
                    match self {
                        $( NodeKind::$Name => Category::$Parent, )*
                    }
                }

                /// Declared fields, leaves first, then children.
                pub fn fields(self) -> &'static [FieldSpec] {
                    match self {
                        $( NodeKind::$Name => $Name::FIELDS, )*
                    }
                }
            }

            /// Abstract node categories. `AnyNode` is the root.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub enum Category {
                AnyNode,
                $( $Cat, )*
            }

            impl Category {
                pub const ALL: &'static [Category] = &[ Category::AnyNode, $( Category::$Cat, )* ];

                pub const fn name(self) -> &'static str {
                    match self {
                        Category::AnyNode => "AnyNode",
                        $( Category::$Cat => stringify!($Cat), )*
                    }
                }

                pub const fn parent(self) -> Option<Category> {
                    match self {
                        Category::AnyNode => None,
                        $( Category::$Cat => Some(Category::$CatParent), )*
                    }
                }
            }
        }
    };
}

crate::for_each_node!(define_nodes);

impl Node {
    pub fn is_a(&self, category: Category) -> bool {
        self.kind().is_a(category)
    }

    /// SHA-256 of the canonical dump. Sensitive to field order, unlike
    /// [`Node::structural_hash`].
    pub fn content_hash(&self) -> crate::content_hash::ContentHash {
        crate::content_hash::hash_node(self)
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl NodeKind {
    /// Hash of the variant name; the seed of every structural hash.
    pub fn identity_hash(self) -> u64 {
        fields::hash_one(self.name())
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
