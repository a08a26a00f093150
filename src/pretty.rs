//! Labeled-tree dump of a node, for debugging and test expectations.
//!
//! ```text
//! PlusExpression:
//!   left = IntegerLiteral:
//!     value = 1
//!   right = IntegerLiteral:
//!     value = 2
//! ```
//!
//! Leaves print before children, in declared order. Sequences print as
//! `name = {` followed by indexed `#n:` entries and a closing `}`; an empty
//! sequence is `name = {}`. A node without fields prints its bare name.
//! The output is deterministic but not meant to be parsed back.

use std::fmt;

use serde::Deserialize;

use crate::ast::*;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DumpOptions {
    /// Spaces per nesting level.
    pub indent_width: usize,
    /// Emit a `source = ...` line under every node.
    pub show_source: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self { indent_width: 2, show_source: false }
    }
}

/// Line-oriented writer with scoped indentation.
pub struct DumpWriter<'o> {
    buf: String,
    depth: usize,
    options: &'o DumpOptions,
}

impl<'o> DumpWriter<'o> {
    pub fn new(options: &'o DumpOptions) -> Self {
        Self { buf: String::new(), depth: 0, options }
    }

    /// Start a new line at the current depth.
    pub fn line(&mut self, text: &str) {
        if !self.buf.is_empty() {
            self.buf.push('\n');
        }
        for _ in 0..self.depth * self.options.indent_width {
            self.buf.push(' ');
        }
        self.buf.push_str(text);
    }

    /// Run `f` one level deeper. The depth is restored when `f` returns.
    pub fn nested<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    pub fn finish(self) -> String {
        self.buf
    }

    /// Write `node` on a line starting with `label`, its fields nested below.
    pub fn node(&mut self, label: &str, node: &Node) {
        let has_body = self.options.show_source || !node.kind().fields().is_empty();
        let colon = if has_body { ":" } else { "" };
        self.line(&format!("{label}{}{colon}", node.kind().name()));
        if has_body {
            self.nested(|w| {
                if w.options.show_source {
                    w.line(&format!("source = {}", node.source()));
                }
                write_fields(w, node);
            });
        }
    }

    pub fn leaf<L: Leaf>(&mut self, name: &str, value: &L) {
        let mut text = format!("{name} = ");
        value.write_leaf(&mut text);
        self.line(&text);
    }

    pub fn node_field(&mut self, name: &str, node: &Node) {
        self.node(&format!("{name} = "), node);
    }

    pub fn sequence_field(&mut self, name: &str, nodes: &[Node]) {
        if nodes.is_empty() {
            self.line(&format!("{name} = {{}}"));
            return;
        }
        self.line(&format!("{name} = {{"));
        self.nested(|w| {
            for (i, node) in nodes.iter().enumerate() {
                w.node(&format!("#{i}: "), node);
            }
        });
        self.line("}");
    }
}

macro_rules! define_dump {
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
        fn write_fields(w: &mut DumpWriter<'_>, node: &Node) {
            match node {
                $(
                    #[allow(unused_variables)]
                    Node::$Name(n) => {
                        $( w.leaf(stringify!($leaf), &n.$leaf); )*
                        $( dump_child!(w, $child, n.$child, $ckind); )*
                    }
                )*
            }
        }
    };
}

crate::for_each_node!(define_dump);

/// Render `node` with the given options.
pub fn dump(node: &Node, options: &DumpOptions) -> String {
    let mut w = DumpWriter::new(options);
    w.node("", node);
    w.finish()
}

impl Node {
    pub fn dump(&self) -> String {
        dump(self, &DumpOptions::default())
    }

    pub fn dump_with(&self, options: &DumpOptions) -> String {
        dump(self, options)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}
