use valeq_value::Value;

use crate::ShapeError;

/// Performs a deep bag equality check between two values.
///
/// Scalar and nil rules are identical to [`crate::deep_equal`]. Sequences
/// are equal when they have equal lengths and their elements can be matched
/// one to one under this same comparison; matched elements are consumed, so
/// duplicates must pair up exactly. Maps are matched as bags of key/value
/// pairs and record fields are matched by name, so insertion and
/// declaration order are irrelevant under this policy.
///
/// # Examples
///
/// ```
/// use valeq_equal::deep_equal_unordered;
/// use valeq_value::Value;
///
/// let a = Value::Seq(vec![Value::Int(1), Value::Int(2), Value::Int(2)]);
/// let b = Value::Seq(vec![Value::Int(2), Value::Int(2), Value::Int(1)]);
/// let c = Value::Seq(vec![Value::Int(2), Value::Int(1), Value::Int(1)]);
///
/// assert_eq!(deep_equal_unordered(&a, &b), Ok(true));
/// assert_eq!(deep_equal_unordered(&a, &c), Ok(false));
/// ```
pub fn deep_equal_unordered(a: &Value, b: &Value) -> Result<bool, ShapeError> {
    match (a, b) {
        (Value::Opaque(name), _) | (_, Value::Opaque(name)) => Err(ShapeError::Opaque(*name)),

        (Value::Nil, Value::Nil) => Ok(true),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Int(a), Value::Int(b)) => Ok(a == b),
        (Value::Uint(a), Value::Uint(b)) => Ok(a == b),
        (Value::Float(a), Value::Float(b)) => Ok(a == b),
        (Value::Str(a), Value::Str(b)) => Ok(a == b),

        (Value::Seq(seq_a), Value::Seq(seq_b)) => bag_equal(seq_a, seq_b),

        (Value::Map(entries_a), Value::Map(entries_b)) => {
            if entries_a.len() != entries_b.len() {
                return Ok(false);
            }
            let mut remaining: Vec<&(Value, Value)> = entries_b.iter().collect();
            'entries: for (key_a, val_a) in entries_a {
                for i in 0..remaining.len() {
                    let (key_b, val_b) = remaining[i];
                    if deep_equal_unordered(key_a, key_b)?
                        && deep_equal_unordered(val_a, val_b)?
                    {
                        remaining.swap_remove(i);
                        continue 'entries;
                    }
                }
                return Ok(false);
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
            for (field, val_a) in fields_a {
                match fields_b.iter().find(|(name, _)| name == field) {
                    Some((_, val_b)) => {
                        if !deep_equal_unordered(val_a, val_b)? {
                            return Ok(false);
                        }
                    }
                    None => return Ok(false),
                }
            }
            Ok(true)
        }

        // Different kinds are never equal
        _ => Ok(false),
    }
}

/// One-to-one matching between two element slices. Each match removes the
/// partner from the pool, so bags with mismatched duplicate counts fail.
fn bag_equal(seq_a: &[Value], seq_b: &[Value]) -> Result<bool, ShapeError> {
    if seq_a.len() != seq_b.len() {
        return Ok(false);
    }
    let mut remaining: Vec<&Value> = seq_b.iter().collect();
    'elements: for elem_a in seq_a {
        for i in 0..remaining.len() {
            if deep_equal_unordered(elem_a, remaining[i])? {
                remaining.swap_remove(i);
                continue 'elements;
            }
        }
        return Ok(false);
    }
    Ok(true)
}
