use valeq_equal::{deep_equal, ShapeError};
use valeq_value::Value;

/// Merges the named entries of several values into one map.
///
/// Records contribute their fields as string-keyed entries; maps contribute
/// their entries as written. Later sources win: an entry whose key is
/// deep-equal to an existing key replaces that entry's value in place, so
/// first-insertion order is preserved. `Nil` sources are skipped, and
/// scalar or sequence sources carry no named entries and contribute
/// nothing. Opaque sources are an error.
///
/// # Examples
///
/// ```
/// use valeq_util::merge;
/// use valeq_value::Value;
///
/// let base = Value::record("Defaults", vec![
///     ("host", Value::Str("localhost".to_string())),
///     ("port", Value::Uint(80)),
/// ]);
/// let overlay = Value::record("Overrides", vec![
///     ("port", Value::Uint(8080)),
/// ]);
///
/// let merged = merge(&[base, overlay]).unwrap();
/// assert_eq!(merged, Value::Map(vec![
///     (Value::Str("host".to_string()), Value::Str("localhost".to_string())),
///     (Value::Str("port".to_string()), Value::Uint(8080)),
/// ]));
/// ```
pub fn merge(sources: &[Value]) -> Result<Value, ShapeError> {
    let mut entries: Vec<(Value, Value)> = Vec::new();
    for source in sources {
        merge_into(&mut entries, source)?;
    }
    Ok(Value::Map(entries))
}

/// Folds one source value into an entry list, overwriting entries whose key
/// is deep-equal to an incoming one.
pub fn merge_into(
    entries: &mut Vec<(Value, Value)>,
    source: &Value,
) -> Result<(), ShapeError> {
    match source {
        Value::Nil => Ok(()),
        Value::Opaque(name) => Err(ShapeError::Opaque(*name)),
        Value::Record { fields, .. } => {
            for (name, value) in fields {
                upsert(entries, Value::Str((*name).to_string()), value.clone())?;
            }
            Ok(())
        }
        Value::Map(pairs) => {
            for (key, value) in pairs {
                upsert(entries, key.clone(), value.clone())?;
            }
            Ok(())
        }
        // Scalars and sequences have no named entries
        _ => Ok(()),
    }
}

fn upsert(
    entries: &mut Vec<(Value, Value)>,
    key: Value,
    value: Value,
) -> Result<(), ShapeError> {
    for (existing, slot) in entries.iter_mut() {
        if deep_equal(existing, &key)? {
            *slot = value;
            return Ok(());
        }
    }
    entries.push((key, value));
    Ok(())
}
