//! Name-keyed node construction for callers that assemble fields dynamically.
//!
//! The typed `new` constructors make absent fields unrepresentable. A
//! builder fed from a parser table or a deserializer has no such guarantee, so
//! [`NodeBuilder::build`] checks every declared field and reports the first
//! one that is absent or of the wrong type.

use super::*;
use crate::diagnostics::ConstructionError;

pub struct NodeBuilder {
    kind: NodeKind,
    source: SourceInfo,
    fields: Vec<(String, Option<FieldValue>)>,
}

impl NodeBuilder {
    pub fn new(kind: NodeKind, source: SourceInfo) -> Self {
        Self { kind, source, fields: Vec::new() }
    }

    /// Set a field. Setting the same name twice keeps the last value.
    pub fn field(self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name.into(), Some(value.into()))
    }

    /// Set a field that may be explicitly absent. `None` is reported as a
    /// missing field by [`build`](Self::build).
    pub fn maybe<V: Into<FieldValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        self.set(name.into(), value.map(Into::into))
    }

    fn set(mut self, name: String, value: Option<FieldValue>) -> Self {
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn build(self) -> Result<Node, ConstructionError> {
        let kind = self.kind;
        let mut fields = FieldMap(self.fields);
        let result = build_node(kind, self.source, &mut fields).and_then(|node| {
            fields.finish(kind)?;
            Ok(node)
        });
        if let Err(err) = &result {
            tracing::debug!(
                variant = %kind,
                field = err.field(),
                "node construction failed: {err}"
            );
        }
        result
    }
}

struct FieldMap(Vec<(String, Option<FieldValue>)>);

impl FieldMap {
    fn take(
        &mut self,
        kind: NodeKind,
        name: &'static str,
    ) -> Result<FieldValue, ConstructionError> {
        let value = match self.0.iter().position(|(n, _)| n == name) {
            Some(index) => self.0.remove(index).1,
            None => None,
        };
        value.ok_or_else(|| ConstructionError::missing(kind, name))
    }

    fn finish(self, kind: NodeKind) -> Result<(), ConstructionError> {
        match self.0.into_iter().next() {
            Some((name, _)) => Err(ConstructionError::unknown(kind, name)),
            None => Ok(()),
        }
    }
}

macro_rules! define_builders {
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
        fn build_node(
            kind: NodeKind,
            source: SourceInfo,
            fields: &mut FieldMap,
        ) -> Result<Node, ConstructionError> {
            match kind {
                $(
                    NodeKind::$Name => {
                        $(
                            let value = fields.take(kind, stringify!($leaf))?;
                            let $leaf = <$lty as Leaf>::from_value(value)
                                .map_err(|found| {
                                    ConstructionError::field_type(
                                        kind,
                                        stringify!($leaf),
                                        <$lty as Leaf>::FIELD_TYPE,
                                        found,
                                    )
                                })?;
                        )*
                        $( let $child = take_child!(fields, kind, $child, $ckind); )*
                        Ok($Name::new(source, $( $leaf, )* $( $child, )*).into())
                    }
                )*
            }
        }
    };
}

crate::for_each_node!(define_builders);
