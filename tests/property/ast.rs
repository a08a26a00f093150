//! Property-based tests for tree invariants.
//!
//! Trees are generated as a plain `Shape` description and then built, so the
//! same shape can be built twice into two independent but equal trees.

use proptest::prelude::*;

use jtree::ast::*;
use jtree::source::{Position, SourceInfo};
use jtree::visit::composers::{max_depth, node_count};
use jtree::visit::{DepthFirstVisitorVoid, Rewriter};

#[derive(Debug, Clone)]
enum Shape {
    Int(i32),
    Double(f64),
    Bool(bool),
    Str(String),
    Name(String),
    Binary(u8, Box<Shape>, Box<Shape>),
    Unary(u8, Box<Shape>),
    Conditional(Box<Shape>, Box<Shape>, Box<Shape>),
    Call(String, Vec<Shape>),
    Array(Vec<Shape>),
}

fn arb_identifier() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,8}".prop_map(|s| s.to_string())
}

fn arb_leaf() -> impl Strategy<Value = Shape> {
    prop_oneof![
        any::<i32>().prop_map(Shape::Int),
        any::<f64>().prop_map(Shape::Double),
        any::<bool>().prop_map(Shape::Bool),
        "[a-zA-Z \\\\\"]{0,12}".prop_map(Shape::Str),
        arb_identifier().prop_map(Shape::Name),
    ]
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    arb_leaf().prop_recursive(5, 48, 4, |inner| {
        prop_oneof![
            (0u8..9, inner.clone(), inner.clone())
                .prop_map(|(op, l, r)| Shape::Binary(op, Box::new(l), Box::new(r))),
            (0u8..4, inner.clone()).prop_map(|(op, v)| Shape::Unary(op, Box::new(v))),
            (inner.clone(), inner.clone(), inner.clone()).prop_map(|(c, t, f)| {
                Shape::Conditional(Box::new(c), Box::new(t), Box::new(f))
            }),
            (arb_identifier(), prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(name, args)| Shape::Call(name, args)),
            prop::collection::vec(inner, 0..4).prop_map(Shape::Array),
        ]
    })
}

fn build(shape: &Shape, source: &SourceInfo) -> Node {
    let s = || source.clone();
    match shape {
        Shape::Int(v) => IntegerLiteral::new(s(), *v).into(),
        Shape::Double(v) => DoubleLiteral::new(s(), *v).into(),
        Shape::Bool(v) => BooleanLiteral::new(s(), *v).into(),
        Shape::Str(v) => StringLiteral::new(s(), v.clone()).into(),
        Shape::Name(v) => SimpleNameReference::new(s(), Word::new(s(), v.clone()).into()).into(),
        Shape::Binary(op, l, r) => {
            let (l, r) = (build(l, source), build(r, source));
            match op {
                0 => PlusExpression::new(s(), l, r).into(),
                1 => MinusExpression::new(s(), l, r).into(),
                2 => MultiplyExpression::new(s(), l, r).into(),
                3 => AndExpression::new(s(), l, r).into(),
                4 => OrExpression::new(s(), l, r).into(),
                5 => LessThanExpression::new(s(), l, r).into(),
                6 => EqualsExpression::new(s(), l, r).into(),
                7 => BitwiseXorExpression::new(s(), l, r).into(),
                _ => LeftShiftExpression::new(s(), l, r).into(),
            }
        }
        Shape::Unary(op, v) => {
            let v = build(v, source);
            match op {
                0 => NegativeExpression::new(s(), v).into(),
                1 => NotExpression::new(s(), v).into(),
                2 => BitwiseNotExpression::new(s(), v).into(),
                _ => Parenthesized::new(s(), v).into(),
            }
        }
        Shape::Conditional(c, t, f) => {
            let (c, t, f) = (build(c, source), build(t, source), build(f, source));
            ConditionalExpression::new(s(), c, t, f).into()
        }
        Shape::Call(name, args) => {
            let args = args.iter().map(|a| build(a, source)).collect();
            SimpleMethodInvocation::new(
                s(),
                Word::new(s(), name.clone()).into(),
                ParenthesizedExpressionList::new(s(), args).into(),
            )
            .into()
        }
        Shape::Array(items) => {
            ArrayInitializer::new(s(), items.iter().map(|i| build(i, source)).collect()).into()
        }
    }
}

/// Change the first integer literal in pre-order, if there is one.
fn bump_first_int(shape: &Shape) -> Option<Shape> {
    match shape {
        Shape::Int(v) => Some(Shape::Int(v.wrapping_add(1))),
        Shape::Double(_) | Shape::Bool(_) | Shape::Str(_) | Shape::Name(_) => None,
        Shape::Binary(op, l, r) => match bump_first_int(l) {
            Some(l) => Some(Shape::Binary(*op, Box::new(l), r.clone())),
            None => bump_first_int(r).map(|r| Shape::Binary(*op, l.clone(), Box::new(r))),
        },
        Shape::Unary(op, v) => bump_first_int(v).map(|v| Shape::Unary(*op, Box::new(v))),
        Shape::Conditional(c, t, f) => {
            if let Some(c) = bump_first_int(c) {
                Some(Shape::Conditional(Box::new(c), t.clone(), f.clone()))
            } else if let Some(t) = bump_first_int(t) {
                Some(Shape::Conditional(c.clone(), Box::new(t), f.clone()))
            } else {
                bump_first_int(f).map(|f| Shape::Conditional(c.clone(), t.clone(), Box::new(f)))
            }
        }
        Shape::Call(name, args) => bump_in_list(args).map(|args| Shape::Call(name.clone(), args)),
        Shape::Array(items) => bump_in_list(items).map(Shape::Array),
    }
}

fn bump_in_list(items: &[Shape]) -> Option<Vec<Shape>> {
    items.iter().enumerate().find_map(|(i, item)| {
        bump_first_int(item).map(|bumped| {
            let mut out = items.to_vec();
            out[i] = bumped;
            out
        })
    })
}

fn located() -> SourceInfo {
    SourceInfo::new("Gen.java", Position::new(1, 1), Position::new(1, 80))
}

struct Identity;

impl Rewriter for Identity {}

#[derive(Default)]
struct HookCount {
    pre: usize,
    post: usize,
}

impl DepthFirstVisitorVoid for HookCount {
    fn default_do_first(&mut self, _that: &Node) {
        self.pre += 1;
    }

    fn default_case(&mut self, _that: &Node) {
        self.post += 1;
    }
}

fn count_by_children(node: &Node) -> usize {
    1 + node.children().into_iter().map(count_by_children).sum::<usize>()
}

proptest! {
    /// Property: building one shape twice yields equal trees with equal hashes and dumps
    #[test]
    fn equal_shapes_build_equal_trees(shape in arb_shape()) {
        let a = build(&shape, &SourceInfo::dummy());
        let b = build(&shape, &SourceInfo::dummy());
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&b, &a);
        prop_assert_eq!(a.structural_hash(), b.structural_hash());
        prop_assert_eq!(a.content_hash(), b.content_hash());
        prop_assert_eq!(a.dump(), b.dump());
    }

    /// Property: provenance never affects equality, hashing or the default dump
    #[test]
    fn source_is_ignored(shape in arb_shape()) {
        let a = build(&shape, &SourceInfo::dummy());
        let b = build(&shape, &located());
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.structural_hash(), b.structural_hash());
        prop_assert_eq!(a.dump(), b.dump());
    }

    /// Property: a rewrite with no overrides returns an equal tree
    #[test]
    fn identity_rewrite_is_equal(shape in arb_shape()) {
        let tree = build(&shape, &located());
        let out = Identity.rewrite(&tree);
        prop_assert_eq!(&out, &tree);
        prop_assert_eq!(out.source(), tree.source());
    }

    /// Property: changing one literal makes trees unequal and changes the content hash
    #[test]
    fn changed_literal_is_detected(shape in arb_shape()) {
        if let Some(bumped) = bump_first_int(&shape) {
            let a = build(&shape, &SourceInfo::dummy());
            let b = build(&bumped, &SourceInfo::dummy());
            prop_assert_ne!(&a, &b);
            prop_assert_ne!(a.content_hash(), b.content_hash());
        }
    }

    /// Property: a node is never equal to itself wrapped in another node
    #[test]
    fn wrapping_breaks_equality(shape in arb_shape()) {
        let tree = build(&shape, &SourceInfo::dummy());
        let wrapped: Node = Parenthesized::new(SourceInfo::dummy(), tree.clone()).into();
        prop_assert_ne!(&wrapped, &tree);
    }

    /// Property: depth-first traversal runs both hooks exactly once per node
    #[test]
    fn traversal_visits_every_node_once(shape in arb_shape()) {
        let tree = build(&shape, &SourceInfo::dummy());
        let mut hooks = HookCount::default();
        hooks.visit(&tree);
        let expected = count_by_children(&tree);
        prop_assert_eq!(hooks.pre, expected);
        prop_assert_eq!(hooks.post, expected);
        prop_assert_eq!(node_count(&tree), expected);
        prop_assert!(max_depth(&tree) <= expected);
    }
}
