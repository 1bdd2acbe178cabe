use std::fmt;

/// A dynamically shaped runtime value.
///
/// Every comparable object is lowered into exactly one of these shapes
/// before comparison: the absent value, an atomic scalar, an ordered
/// sequence, an insertion-ordered associative map, a named-field record, or
/// an opaque value whose structure cannot be enumerated.
///
/// Scalar kinds are distinct declared types: `Int(1)`, `Uint(1)` and
/// `Float(1.0)` never compare equal to each other. Values are owned trees,
/// so cyclic graphs are not constructible and recursive walks always
/// terminate.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value.
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    /// IEEE-754 double. `Float(f64::NAN)` is unequal to itself.
    Float(f64),
    Str(String),
    /// An ordered, possibly heterogeneous sequence.
    Seq(Vec<Value>),
    /// An associative structure, kept in insertion order. Insertion order
    /// is observable under positional comparison.
    Map(Vec<(Value, Value)>),
    /// A named-field aggregate. `type_name` pins the declared type so that
    /// records of different types never compare equal, field for field.
    Record {
        type_name: &'static str,
        fields: Vec<(&'static str, Value)>,
    },
    /// A value whose fields cannot be enumerated. Comparators refuse to
    /// guess and fail loudly when they reach one.
    Opaque(&'static str),
}

/// Coarse shape classification of a [`Value`], used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    Int,
    Uint,
    Float,
    Str,
    Seq,
    Map,
    Record,
    Opaque,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Str => "str",
            Kind::Seq => "seq",
            Kind::Map => "map",
            Kind::Record => "record",
            Kind::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Builds a record value from a declared type name and its comparable
    /// fields in declaration order.
    pub fn record(type_name: &'static str, fields: Vec<(&'static str, Value)>) -> Self {
        Value::Record { type_name, fields }
    }

    /// Builds an opaque value carrying only its declared type name.
    pub fn opaque(type_name: &'static str) -> Self {
        Value::Opaque(type_name)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
            Value::Record { .. } => Kind::Record,
            Value::Opaque(_) => Kind::Opaque,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Declared type name: the record/opaque name where one exists,
    /// otherwise the kind name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Record { type_name, .. } | Value::Opaque(type_name) => *type_name,
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Seq(_) => "seq",
            Value::Map(_) => "map",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classification() {
        assert_eq!(Value::Nil.kind(), Kind::Nil);
        assert_eq!(Value::Int(1).kind(), Kind::Int);
        assert_eq!(Value::Uint(1).kind(), Kind::Uint);
        assert_eq!(Value::Seq(vec![]).kind(), Kind::Seq);
        assert_eq!(Value::record("point", vec![]).kind(), Kind::Record);
        assert_eq!(Value::opaque("handle").kind(), Kind::Opaque);
    }

    #[test]
    fn type_name_prefers_declared_name() {
        assert_eq!(Value::record("point", vec![]).type_name(), "point");
        assert_eq!(Value::opaque("handle").type_name(), "handle");
        assert_eq!(Value::Str(String::new()).type_name(), "str");
    }

    #[test]
    fn kind_display() {
        assert_eq!(Kind::Record.to_string(), "record");
        assert_eq!(Kind::Nil.to_string(), "nil");
    }
}
