//! Exact dispatch and fallback chaining across every variant.

mod common;

use std::sync::Arc;

use common::*;
use jtree::ast::*;
use jtree::visit::{AbstractVisitor, AbstractVisitorVoid, Fallback, NodeVisitor, NodeVisitorVoid};

macro_rules! exhaustive_visitors {
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
            /// Answers with the name of the handler that ran.
            struct HandlerName;

            impl NodeVisitor for HandlerName {
                type Output = &'static str;

                $(
                    fn [<for_ $Name:snake>](&mut self, _that: &Arc<$Name>) -> &'static str {
                        stringify!($Name)
                    }
                )*
            }

            /// Records the name of every handler that ran.
            #[derive(Default)]
            struct HandlerLog(Vec<&'static str>);

            impl NodeVisitorVoid for HandlerLog {
                $(
                    fn [<for_ $Name:snake>](&mut self, _that: &Arc<$Name>) {
                        self.0.push(stringify!($Name));
                    }
                )*
            }

            /// Overrides every category handler, so each variant stops at
            /// its parent.
            #[derive(Default)]
            struct CategoryLog(Vec<&'static str>);

            impl AbstractVisitorVoid for CategoryLog {
                fn default_case(&mut self, _that: &Node) {
                    self.0.push("default");
                }

                fn for_any_node(&mut self, _that: &Node) {
                    self.0.push("AnyNode");
                }

                $(
                    fn [<for_ $Cat:snake>](&mut self, _that: &Node) {
                        self.0.push(stringify!($Cat));
                    }
                )*
            }
        }
    };
}

jtree::for_each_node!(exhaustive_visitors);

#[test]
fn value_dispatch_reaches_exact_handler() {
    for node in every_variant() {
        assert_eq!(node.accept(&mut HandlerName), node.kind().name());
    }
}

#[test]
fn void_dispatch_reaches_exact_handler_once() {
    for node in every_variant() {
        let mut log = HandlerLog::default();
        node.accept_void(&mut log);
        assert_eq!(log.0, vec![node.kind().name()]);
    }
}

#[test]
fn variant_default_goes_to_parent_category() {
    for node in every_variant() {
        let mut log = CategoryLog::default();
        log.visit(&node);
        assert_eq!(log.0, vec![node.kind().parent().name()]);
    }
}

/// Counts arrivals at `default_case`.
#[derive(Default)]
struct DefaultCount {
    kinds: Vec<NodeKind>,
}

impl AbstractVisitor for DefaultCount {
    type Output = usize;

    fn default_case(&mut self, that: &Node) -> usize {
        self.kinds.push(that.kind());
        self.kinds.len()
    }
}

#[test]
fn unhandled_variants_reach_default_once() {
    let mut v = DefaultCount::default();
    for node in every_variant() {
        v.visit(&node);
    }
    assert_eq!(v.kinds, NodeKind::ALL.to_vec());
}

/// Overrides one ancestor and one exact variant below it.
#[derive(Default)]
struct InstantiationCounter {
    instantiations: usize,
    anonymous: usize,
    other: usize,
}

impl AbstractVisitorVoid for InstantiationCounter {
    fn default_case(&mut self, _that: &Node) {
        self.other += 1;
    }

    fn for_instantiation(&mut self, that: &Node) {
        assert!(that.is_a(Category::Instantiation));
        self.instantiations += 1;
    }

    fn for_simple_anonymous_class_instantiation(
        &mut self,
        _that: &Arc<SimpleAnonymousClassInstantiation>,
    ) {
        self.anonymous += 1;
    }
}

#[test]
fn ancestor_handler_covers_descendants_once_each() {
    let mut v = InstantiationCounter::default();
    for node in every_variant() {
        v.visit(&node);
    }
    let members = Category::Instantiation.members().len();
    assert_eq!(members, 8);
    assert_eq!(v.anonymous, 1);
    assert_eq!(v.instantiations, members - 1);
    assert_eq!(v.other, NodeKind::ALL.len() - members);
}

#[test]
fn fallback_adapter_dispatches_through_node_visitor() {
    let mut counter = DefaultCount::default();
    let result = int(3).accept(&mut Fallback(&mut counter));
    assert_eq!(result, 1);
    assert_eq!(counter.kinds, vec![NodeKind::IntegerLiteral]);
}

/// Separates `ClassDef` hits from everything else under `TypeDefBase`.
#[derive(Default)]
struct ClassDefs {
    top_level: Vec<NodeKind>,
    type_defs: Vec<NodeKind>,
}

impl AbstractVisitorVoid for ClassDefs {
    fn for_class_def(&mut self, that: &Arc<ClassDef>) {
        self.top_level.push(Node::from(that.clone()).kind());
    }

    fn for_type_def_base(&mut self, that: &Node) {
        self.type_defs.push(that.kind());
    }
}

#[test]
fn inner_definitions_fall_back_to_their_category() {
    let mut v = ClassDefs::default();
    for kind in [
        NodeKind::ClassDef,
        NodeKind::InnerClassDef,
        NodeKind::InterfaceDef,
        NodeKind::InnerInterfaceDef,
    ] {
        v.visit(&instance(kind));
    }
    assert_eq!(v.top_level, vec![NodeKind::ClassDef]);
    assert_eq!(
        v.type_defs,
        vec![NodeKind::InnerClassDef, NodeKind::InterfaceDef, NodeKind::InnerInterfaceDef]
    );

    assert_eq!(
        NodeKind::IfThenElseStatement.ancestors(),
        vec![Category::Statement, Category::AnyNode]
    );
}
