//! Attribute extraction from builder records.
//!
//! Every record type that contributes attributes declares a static table of
//! `(name, default, getter)` triples with [`attr_table!`](crate::attr_table).
//! [`extract_attributes`] walks that table in declaration order and keeps the
//! non-empty results.

use std::fmt;

use smallvec::SmallVec;

/// One `name="value"` pair in the emitted DOT text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: &'static str,
    pub value: String,
}

impl Attribute {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Ordered attribute list. Most records set only a few fields.
pub type AttrList = SmallVec<[Attribute; 4]>;

/// A field that may hold a printable value.
pub trait AttrValue {
    fn attr_value(&self) -> Option<String>;
}

impl<T: fmt::Display> AttrValue for Option<T> {
    fn attr_value(&self) -> Option<String> {
        self.as_ref().map(|v| v.to_string())
    }
}

/// Declaration of one attribute-bearing field of `T`.
pub struct AttrField<T> {
    pub name: &'static str,
    pub default: Option<&'static str>,
    pub value: fn(&T) -> Option<String>,
}

impl<T> AttrField<T> {
    /// Explicit non-empty value first, then a non-empty default, else nothing.
    pub fn resolve(&self, record: &T) -> Option<Attribute> {
        if self.name.is_empty() {
            return None;
        }
        match (self.value)(record).filter(|v| !v.is_empty()) {
            Some(value) => Some(Attribute::new(self.name, value)),
            None => self
                .default
                .filter(|d| !d.is_empty())
                .map(|d| Attribute::new(self.name, d)),
        }
    }
}

impl<T> fmt::Debug for AttrField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttrField")
            .field("name", &self.name)
            .field("default", &self.default)
            .finish()
    }
}

/// A record type with a static attribute table.
pub trait AttrSource: Sized + 'static {
    const FIELDS: &'static [AttrField<Self>];

    fn attributes(&self) -> AttrList {
        extract_attributes(self)
    }
}

/// Produce the record's attributes in table order, skipping empty fields.
pub fn extract_attributes<T: AttrSource>(record: &T) -> AttrList {
    T::FIELDS
        .iter()
        .filter_map(|field| field.resolve(record))
        .collect()
}

/// Declare the attribute table of a record type.
///
/// ```ignore
/// attr_table!(NodeBuilder {
///     label => "label",
///     shape => "shape" or "ellipse",
/// });
/// ```
///
/// Each field must be an `Option<T: Display>`. The optional `or "..."` names
/// the default emitted when the field is unset or empty.
#[macro_export]
macro_rules! attr_table {
    (@default) => {
        None
    };
    (@default $default:literal) => {
        Some($default)
    };
    ($ty:ty { $($field:ident => $name:literal $(or $default:literal)?),* $(,)? }) => {
        impl $crate::attribute::AttrSource for $ty {
            const FIELDS: &'static [$crate::attribute::AttrField<Self>] = &[
                $(
                    $crate::attribute::AttrField {
                        name: $name,
                        default: $crate::attr_table!(@default $($default)?),
                        value: |record: &$ty| {
                            $crate::attribute::AttrValue::attr_value(&record.$field)
                        },
                    },
                )*
            ];
        }
    };
}
