//! Per-child helpers shared by the `for_each_node!` callbacks.
//!
//! Each takes the child kind (`node` or `nodes`) from the table and expands to
//! the matching form. Receivers are passed in as arguments rather than named
//! inside the helper bodies so that hygiene resolves them at the call site.

/// Stored type of a child field.
macro_rules! child_ty {
    (node) => { $crate::ast::Node };
    (nodes) => { ::std::vec::Vec<$crate::ast::Node> };
}

/// Borrowed type returned by a child accessor.
macro_rules! child_ref {
    (node) => { &$crate::ast::Node };
    (nodes) => { &[$crate::ast::Node] };
}

/// Declared field type of a child field.
macro_rules! child_field_type {
    (node) => { $crate::ast::FieldType::Node };
    (nodes) => { $crate::ast::FieldType::NodeList };
}

/// Type of a visited child's result: one value, or one per element.
macro_rules! child_result_ty {
    (node, $r:ty) => { $r };
    (nodes, $r:ty) => { ::std::vec::Vec<$r> };
}

/// Structural hash contribution of a child; sequence elements are XOR-folded.
macro_rules! child_hash {
    ($e:expr, node) => { $e.structural_hash() };
    ($e:expr, nodes) => { $e.iter().fold(0u64, |acc, n| acc ^ n.structural_hash()) };
}

/// Append a child's nodes to a flat list.
macro_rules! push_child {
    ($out:ident, $e:expr, node) => { $out.push(&$e) };
    ($out:ident, $e:expr, nodes) => { $out.extend($e.iter()) };
}

/// Dispatch a value visitor into a child and keep its result.
macro_rules! walk_child {
    ($v:expr, $e:expr, node) => { $e.accept(&mut *$v) };
    ($v:expr, $e:expr, nodes) => {
        $e.iter().map(|c| c.accept(&mut *$v)).collect::<::std::vec::Vec<_>>()
    };
}

/// Dispatch a void visitor into a child.
macro_rules! walk_child_void {
    ($v:expr, $e:expr, node) => { $e.accept_void(&mut *$v) };
    ($v:expr, $e:expr, nodes) => {
        for c in $e.iter() {
            c.accept_void(&mut *$v);
        }
    };
}

/// Record a typed child result under its field name.
macro_rules! push_result {
    ($children:ident, $name:ident, node) => {
        $children.push_single(stringify!($name), $name)
    };
    ($children:ident, $name:ident, nodes) => {
        $children.push_sequence(stringify!($name), $name)
    };
}

/// Take a child value out of a builder's field map.
macro_rules! take_child {
    ($fields:ident, $kind:expr, $name:ident, node) => {
        $fields.take($kind, stringify!($name))?
            .into_node()
            .map_err(|found| {
                $crate::diagnostics::ConstructionError::field_type(
                    $kind,
                    stringify!($name),
                    $crate::ast::FieldType::Node,
                    found,
                )
            })?
    };
    ($fields:ident, $kind:expr, $name:ident, nodes) => {
        $fields.take($kind, stringify!($name))?
            .into_node_list()
            .map_err(|found| {
                $crate::diagnostics::ConstructionError::field_type(
                    $kind,
                    stringify!($name),
                    $crate::ast::FieldType::NodeList,
                    found,
                )
            })?
    };
}

/// Write a child field into a dump.
macro_rules! dump_child {
    ($w:ident, $name:ident, $e:expr, node) => {
        $w.node_field(stringify!($name), &$e)
    };
    ($w:ident, $name:ident, $e:expr, nodes) => {
        $w.sequence_field(stringify!($name), &$e)
    };
}
