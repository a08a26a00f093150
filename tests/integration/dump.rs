//! Labeled-tree dump output.

mod common;

use common::*;
use insta::assert_snapshot;
use jtree::ast::*;
use jtree::config::Config;
use jtree::pretty::DumpOptions;

#[test]
fn plus_expression() {
    assert_snapshot!(plus(int(1), int(2)).dump(), @r"
    PlusExpression:
      left = IntegerLiteral:
        value = 1
      right = IntegerLiteral:
        value = 2
    ");
}

#[test]
fn method_invocation_with_sequences() {
    let call: Node = SimpleMethodInvocation::new(
        src(),
        word("max"),
        args(vec![int(1), StringLiteral::new(src(), "two".to_string()).into()]),
    )
    .into();
    assert_snapshot!(call.dump(), @r#"
    SimpleMethodInvocation:
      name = Word:
        text = "max"
      arguments = ParenthesizedExpressionList:
        expressions = {
          #0: IntegerLiteral:
            value = 1
          #1: StringLiteral:
            value = "two"
        }
    "#);
}

#[test]
fn leaves_of_every_type() {
    let mods = mav(&[Modifier::Public, Modifier::Abstract]);
    assert_eq!(mods.dump(), "ModifiersAndVisibility:\n  modifiers = [public, abstract]");

    let cases = [
        (Node::from(LongLiteral::new(src(), -5)), "LongLiteral:\n  value = -5"),
        (Node::from(FloatLiteral::new(src(), 0.5)), "FloatLiteral:\n  value = 0.5"),
        (Node::from(DoubleLiteral::new(src(), 3.0)), "DoubleLiteral:\n  value = 3.0"),
        (Node::from(BooleanLiteral::new(src(), false)), "BooleanLiteral:\n  value = false"),
        (Node::from(CharLiteral::new(src(), '\'')), "CharLiteral:\n  value = '\\''"),
        (Node::from(NullLiteral::new(src())), "NullLiteral"),
    ];
    for (node, expected) in cases {
        assert_eq!(node.dump(), expected);
    }
}

#[test]
fn every_field_name_appears() {
    for node in every_variant() {
        let text = node.dump();
        assert!(text.starts_with(node.kind().name()));
        for field in node.kind().fields() {
            assert!(
                text.contains(&format!("{} = ", field.name)),
                "{}: {}",
                node.kind(),
                field.name
            );
        }
    }
}

#[test]
fn identical_trees_dump_identically() {
    assert_eq!(sample_class().dump(), sample_class().dump());
    assert_eq!(sample_class().to_string(), sample_class().dump());
}

#[test]
fn nesting_mirrors_depth() {
    let text = sample_class().dump();
    let deepest = text
        .lines()
        .map(|line| line.len() - line.trim_start().len())
        .max()
        .unwrap_or(0);
    // Every nested node adds one level, and sequences add one more for `#n:`.
    assert!(deepest / 2 >= jtree::visit::composers::max_depth(&sample_class()) - 1);
}

#[test]
fn options_from_config() {
    let config = Config::from_toml_str("[dump]\nindent_width = 1\nshow_source = true\n").unwrap();
    let node: Node = Parenthesized::new(at(3, 1, 4), NullLiteral::new(at(3, 2, 3)).into()).into();
    assert_snapshot!(node.dump_with(&config.dump), @r"
    Parenthesized:
     source = Sample.java:3:1-3:4
     value = NullLiteral:
      source = Sample.java:3:2-3:3
    ");
}

#[test]
fn default_options_hide_source() {
    let node: Node = IntegerLiteral::new(at(1, 1, 2), 1).into();
    assert_eq!(node.dump_with(&DumpOptions::default()), "IntegerLiteral:\n  value = 1");
}
