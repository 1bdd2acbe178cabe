use valeq_value::Value;

use crate::ShapeError;

/// Performs a deep positional equality check between two values.
///
/// Scalars compare by intrinsic equality of their payload; values of
/// different kinds are never equal, so `Int(1)` and `Float(1.0)` are
/// unequal even though the numbers match. Sequences compare element by
/// element in order, and map entries compare in insertion order: the same
/// pairs inserted in a different order are unequal under this policy. Use
/// [`crate::deep_equal_unordered`] for order-insensitive comparison.
///
/// Reaching an opaque value anywhere in either graph is an error, never a
/// silent boolean.
///
/// # Examples
///
/// ```
/// use valeq_equal::deep_equal;
/// use valeq_value::Value;
///
/// let a = Value::Seq(vec![Value::Int(1), Value::Int(2)]);
/// let b = Value::Seq(vec![Value::Int(1), Value::Int(2)]);
/// let c = Value::Seq(vec![Value::Int(2), Value::Int(1)]);
///
/// assert_eq!(deep_equal(&a, &b), Ok(true));
/// assert_eq!(deep_equal(&a, &c), Ok(false));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> Result<bool, ShapeError> {
    match (a, b) {
        (Value::Opaque(name), _) | (_, Value::Opaque(name)) => Err(ShapeError::Opaque(*name)),

        (Value::Nil, Value::Nil) => Ok(true),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Int(a), Value::Int(b)) => Ok(a == b),
        (Value::Uint(a), Value::Uint(b)) => Ok(a == b),
        (Value::Float(a), Value::Float(b)) => Ok(a == b),
        (Value::Str(a), Value::Str(b)) => Ok(a == b),

        (Value::Seq(seq_a), Value::Seq(seq_b)) => {
            if seq_a.len() != seq_b.len() {
                return Ok(false);
            }
            for (elem_a, elem_b) in seq_a.iter().zip(seq_b) {
                if !deep_equal(elem_a, elem_b)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }

        // Entries pair up positionally; insertion order is observable here.
        (Value::Map(entries_a), Value::Map(entries_b)) => {
            if entries_a.len() != entries_b.len() {
                return Ok(false);
            }
            for ((key_a, val_a), (key_b, val_b)) in entries_a.iter().zip(entries_b) {
                if !deep_equal(key_a, key_b)? || !deep_equal(val_a, val_b)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }

        (
            Value::Record {
                type_name: name_a,
                fields: fields_a,
            },
            Value::Record {
                type_name: name_b,
                fields: fields_b,
            },
        ) => {
            if name_a != name_b || fields_a.len() != fields_b.len() {
                return Ok(false);
            }
            for ((field_a, val_a), (field_b, val_b)) in fields_a.iter().zip(fields_b) {
                if field_a != field_b || !deep_equal(val_a, val_b)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }

        // Different kinds are never equal
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_only_equals_nil() {
        assert_eq!(deep_equal(&Value::Nil, &Value::Nil), Ok(true));
        assert_eq!(deep_equal(&Value::Nil, &Value::Int(0)), Ok(false));
        assert_eq!(deep_equal(&Value::Int(0), &Value::Nil), Ok(false));
    }

    #[test]
    fn scalar_kinds_never_coerce() {
        assert_eq!(deep_equal(&Value::Int(1), &Value::Float(1.0)), Ok(false));
        assert_eq!(deep_equal(&Value::Int(1), &Value::Uint(1)), Ok(false));
        assert_eq!(
            deep_equal(&Value::Int(1), &Value::Str("1".to_string())),
            Ok(false)
        );
    }

    #[test]
    fn opaque_is_an_error_even_against_itself() {
        let v = Value::opaque("handle");
        assert_eq!(deep_equal(&v, &v), Err(ShapeError::Opaque("handle")));
    }

    #[test]
    fn nested_opaque_is_an_error() {
        let a = Value::Seq(vec![Value::Int(1), Value::opaque("handle")]);
        let b = Value::Seq(vec![Value::Int(1), Value::opaque("handle")]);
        assert_eq!(deep_equal(&a, &b), Err(ShapeError::Opaque("handle")));
    }

    #[test]
    fn record_type_name_is_strict() {
        let a = Value::record("point", vec![("x", Value::Int(1))]);
        let b = Value::record("vector", vec![("x", Value::Int(1))]);
        assert_eq!(deep_equal(&a, &b), Ok(false));
    }
}
