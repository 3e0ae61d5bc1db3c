//! Attribute lists: `@name` and `@name(args)`.

use std::fmt;

use crate::Span;

/// One argument of an attribute.
///
/// Floats are stored as bits so the AST keeps `Eq + Hash`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AttributeValue {
    Identifier(String),
    String(String),
    Integer(i64),
    Float(u64),
}

impl AttributeValue {
    pub fn float(value: f64) -> Self {
        AttributeValue::Float(value.to_bits())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Identifier(s) | AttributeValue::String(s) => Some(s),
            AttributeValue::Integer(_) | AttributeValue::Float(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss, reason = "attribute integers are small")]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(bits) => Some(f64::from_bits(*bits)),
            AttributeValue::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Identifier(s) => f.write_str(s),
            AttributeValue::String(s) => write!(f, "{s:?}"),
            AttributeValue::Integer(v) => write!(f, "{v}"),
            AttributeValue::Float(bits) => write!(f, "{:?}", f64::from_bits(*bits)),
        }
    }
}

/// A single `@name(values...)` attribute.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attribute {
    pub span: Span,
    pub name: String,
    pub values: Vec<AttributeValue>,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if !self.values.is_empty() {
            f.write_str("(")?;
            for (i, value) in self.values.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Ordered attribute list attached to a declaration, entry or parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Attributes(pub Vec<Attribute>);

impl Attributes {
    pub fn new() -> Self {
        Attributes(Vec::new())
    }

    /// First attribute with the given name.
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
