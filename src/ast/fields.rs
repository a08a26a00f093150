use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::Node;

/// Declared type of a node field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Node,
    NodeList,
    Text,
    Bool,
    Int,
    Long,
    Float,
    Double,
    Char,
    Modifiers,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldType::Node => "node",
            FieldType::NodeList => "node list",
            FieldType::Text => "text",
            FieldType::Bool => "bool",
            FieldType::Int => "int",
            FieldType::Long => "long",
            FieldType::Float => "float",
            FieldType::Double => "double",
            FieldType::Char => "char",
            FieldType::Modifiers => "modifiers",
        };
        f.write_str(s)
    }
}

/// Name and type of one declared field, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
}

impl FieldSpec {
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty }
    }

    pub fn is_child(&self) -> bool {
        matches!(self.ty, FieldType::Node | FieldType::NodeList)
    }
}

/// A dynamically-typed field value, as handed to [`super::NodeBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Node(Node),
    NodeList(Vec<Node>),
    Text(String),
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    Modifiers(Modifiers),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Node(_) => FieldType::Node,
            FieldValue::NodeList(_) => FieldType::NodeList,
            FieldValue::Text(_) => FieldType::Text,
            FieldValue::Bool(_) => FieldType::Bool,
            FieldValue::Int(_) => FieldType::Int,
            FieldValue::Long(_) => FieldType::Long,
            FieldValue::Float(_) => FieldType::Float,
            FieldValue::Double(_) => FieldType::Double,
            FieldValue::Char(_) => FieldType::Char,
            FieldValue::Modifiers(_) => FieldType::Modifiers,
        }
    }

    /// Take the single-node payload, or hand back the actual type.
    pub(crate) fn into_node(self) -> Result<Node, FieldType> {
        match self {
            FieldValue::Node(node) => Ok(node),
            other => Err(other.field_type()),
        }
    }

    pub(crate) fn into_node_list(self) -> Result<Vec<Node>, FieldType> {
        match self {
            FieldValue::NodeList(nodes) => Ok(nodes),
            other => Err(other.field_type()),
        }
    }
}

macro_rules! field_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::$variant(value)
                }
            }
        )*
    };
}

field_value_from! {
    Node => Node,
    Vec<Node> => NodeList,
    String => Text,
    bool => Bool,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    char => Char,
    Modifiers => Modifiers,
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// Java declaration modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
}

impl Modifier {
    pub const ALL: &'static [Modifier] = &[
        Modifier::Public,
        Modifier::Protected,
        Modifier::Private,
        Modifier::Static,
        Modifier::Final,
        Modifier::Abstract,
        Modifier::Native,
        Modifier::Synchronized,
        Modifier::Transient,
        Modifier::Volatile,
        Modifier::Strictfp,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Abstract => "abstract",
            Modifier::Native => "native",
            Modifier::Synchronized => "synchronized",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Strictfp => "strictfp",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.keyword() == keyword)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

pub type Modifiers = Vec<Modifier>;

pub(crate) fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// A primitive value stored directly in a node.
///
/// Floating point leaves compare and hash by bit pattern, so `NaN` equals
/// itself and `0.0` differs from `-0.0`.
pub trait Leaf: Clone + fmt::Debug + Send + Sync + 'static {
    const FIELD_TYPE: FieldType;

    /// Borrowed form returned by node accessors.
    type Ref<'a>
    where
        Self: 'a;

    fn get(&self) -> Self::Ref<'_>;
    fn leaf_eq(&self, other: &Self) -> bool;
    fn leaf_hash(&self) -> u64;
    fn write_leaf(&self, out: &mut String);
    fn from_value(value: FieldValue) -> Result<Self, FieldType>;
}

macro_rules! copy_leaf {
    ($($ty:ty => $variant:ident, $fmt:literal);* $(;)?) => {
        $(
            impl Leaf for $ty {
                const FIELD_TYPE: FieldType = FieldType::$variant;
                type Ref<'a> = $ty;

                fn get(&self) -> $ty {
                    *self
                }

                fn leaf_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn leaf_hash(&self) -> u64 {
                    hash_one(self)
                }

                fn write_leaf(&self, out: &mut String) {
                    out.push_str(&format!($fmt, self));
                }

                fn from_value(value: FieldValue) -> Result<Self, FieldType> {
                    match value {
                        FieldValue::$variant(v) => Ok(v),
                        other => Err(other.field_type()),
                    }
                }
            }
        )*
    };
}

copy_leaf! {
    bool => Bool, "{}";
    i32 => Int, "{}";
    i64 => Long, "{}";
    char => Char, "{:?}";
}

macro_rules! float_leaf {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Leaf for $ty {
                const FIELD_TYPE: FieldType = FieldType::$variant;
                type Ref<'a> = $ty;

                fn get(&self) -> $ty {
                    *self
                }

                fn leaf_eq(&self, other: &Self) -> bool {
                    self.to_bits() == other.to_bits()
                }

                fn leaf_hash(&self) -> u64 {
                    hash_one(&self.to_bits())
                }

                fn write_leaf(&self, out: &mut String) {
                    out.push_str(&format!("{:?}", self));
                }

                fn from_value(value: FieldValue) -> Result<Self, FieldType> {
                    match value {
                        FieldValue::$variant(v) => Ok(v),
                        other => Err(other.field_type()),
                    }
                }
            }
        )*
    };
}

float_leaf! {
    f32 => Float,
    f64 => Double,
}

impl Leaf for String {
    const FIELD_TYPE: FieldType = FieldType::Text;
    type Ref<'a> = &'a str;

    fn get(&self) -> &str {
        self
    }

    fn leaf_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn leaf_hash(&self) -> u64 {
        hash_one(self.as_str())
    }

    fn write_leaf(&self, out: &mut String) {
        out.push_str(&format!("{:?}", self));
    }

    fn from_value(value: FieldValue) -> Result<Self, FieldType> {
        match value {
            FieldValue::Text(v) => Ok(v),
            other => Err(other.field_type()),
        }
    }
}

impl Leaf for Modifiers {
    const FIELD_TYPE: FieldType = FieldType::Modifiers;
    type Ref<'a> = &'a [Modifier];

    fn get(&self) -> &[Modifier] {
        self
    }

    fn leaf_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn leaf_hash(&self) -> u64 {
        hash_one(self.as_slice())
    }

    fn write_leaf(&self, out: &mut String) {
        out.push('[');
        for (i, m) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(m.keyword());
        }
        out.push(']');
    }

    fn from_value(value: FieldValue) -> Result<Self, FieldType> {
        match value {
            FieldValue::Modifiers(v) => Ok(v),
            other => Err(other.field_type()),
        }
    }
}
