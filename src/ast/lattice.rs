//! Queries over the category lattice.
//!
//! The lattice is a tree: every variant has exactly one parent category and
//! every category except `AnyNode` has exactly one parent. Only the fallback
//! visitors consult it.
//!
//! Concrete variants are always leaves. `InnerClassDef` and
//! `InnerInterfaceDef` sit beside `ClassDef` and `InterfaceDef` under
//! `TypeDefBase`, and `IfThenElseStatement` sits beside `IfThenStatement`
//! under `Statement`. A visitor overriding `for_class_def` therefore never
//! sees inner classes; override `for_type_def_base` (or both variant
//! handlers) to cover them together.

use super::{Category, NodeKind};

impl NodeKind {
    /// Categories above this variant, nearest first, ending at `AnyNode`.
    pub fn ancestors(self) -> Vec<Category> {
        let mut out = vec![self.parent()];
        out.extend(self.parent().ancestors());
        out
    }

    pub fn is_a(self, category: Category) -> bool {
        self.parent().is_a(category)
    }
}

impl Category {
    /// Strict ancestors, nearest first.
    pub fn ancestors(self) -> Vec<Category> {
        let mut out = Vec::new();
        let mut current = self.parent();
        while let Some(category) = current {
            out.push(category);
            current = category.parent();
        }
        out
    }

    /// Reflexive: every category is-a itself.
    pub fn is_a(self, other: Category) -> bool {
        let mut current = Some(self);
        while let Some(category) = current {
            if category == other {
                return true;
            }
            current = category.parent();
        }
        false
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Variants whose ancestor chain passes through this category.
    pub fn members(self) -> Vec<NodeKind> {
        NodeKind::ALL.iter().copied().filter(|k| k.is_a(self)).collect()
    }
}
