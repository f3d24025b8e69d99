//! Input shape resolution.
//!
//! Untyped input (JSON) is resolved once into a [`DataInput`] variant;
//! from there on only canonical [`Dataset`] records flow into the engines.

use jackknife_core::errors::InputShapeError;
use jackknife_core::{Dataset, Identity, Record};
use serde_json::Value;

/// The three accepted input shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum DataInput {
    /// Plain values; identity is the 0-based position.
    Values(Vec<f64>),
    /// `[identity, value]` pairs.
    Pairs(Vec<(Identity, f64)>),
    /// Key to value mapping, in insertion order.
    Mapping(Vec<(Identity, f64)>),
}

impl DataInput {
    /// Resolve a JSON value.
    ///
    /// Arrays hold numbers, or `[identity, value]` pairs when `use_id_field`
    /// is set. Objects map keys to numbers and keep their insertion order.
    pub fn from_json(data: &Value, use_id_field: bool) -> Result<Self, InputShapeError> {
        match data {
            Value::Array(items) if use_id_field => items
                .iter()
                .enumerate()
                .map(|(position, item)| pair_from_json(position, item))
                .collect::<Result<Vec<_>, _>>()
                .map(DataInput::Pairs),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(position, item)| {
                    item.as_f64().ok_or_else(|| InputShapeError::NonNumericValue {
                        position,
                        found: describe(item),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(DataInput::Values),
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| {
                    value
                        .as_f64()
                        .map(|v| (Identity::text(key.as_str()), v))
                        .ok_or_else(|| InputShapeError::NonNumericMappingValue {
                            key: key.clone(),
                            found: describe(value),
                        })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(DataInput::Mapping),
            other => Err(InputShapeError::UnsupportedContainer {
                found: json_kind(other).to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Values(v) => v.len(),
            Self::Pairs(p) | Self::Mapping(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Canonical records, rejecting non-finite values.
    pub fn into_dataset(self) -> Result<Dataset, InputShapeError> {
        match self {
            Self::Values(values) => Dataset::from_values(&values),
            Self::Pairs(pairs) | Self::Mapping(pairs) => Dataset::new(
                pairs
                    .into_iter()
                    .map(|(identity, value)| Record { identity, value })
                    .collect(),
            ),
        }
    }
}

/// Anything a run accepts as data.
pub trait RunInput {
    fn into_data_input(self, use_id_field: bool) -> Result<DataInput, InputShapeError>;
}

impl RunInput for DataInput {
    fn into_data_input(self, _use_id_field: bool) -> Result<DataInput, InputShapeError> {
        Ok(self)
    }
}

impl RunInput for &Value {
    fn into_data_input(self, use_id_field: bool) -> Result<DataInput, InputShapeError> {
        DataInput::from_json(self, use_id_field)
    }
}

impl RunInput for &[f64] {
    fn into_data_input(self, _use_id_field: bool) -> Result<DataInput, InputShapeError> {
        Ok(DataInput::Values(self.to_vec()))
    }
}

impl RunInput for Vec<f64> {
    fn into_data_input(self, _use_id_field: bool) -> Result<DataInput, InputShapeError> {
        Ok(DataInput::Values(self))
    }
}

fn pair_from_json(position: usize, item: &Value) -> Result<(Identity, f64), InputShapeError> {
    let pair = match item {
        Value::Array(pair) if pair.len() == 2 => pair,
        _ => return Err(InputShapeError::NotAPair { position }),
    };
    let identity = identity_from_json(&pair[0]).ok_or_else(|| InputShapeError::InvalidIdentity {
        position,
        found: describe(&pair[0]),
    })?;
    let value = pair[1].as_f64().ok_or_else(|| InputShapeError::NonNumericValue {
        position,
        found: describe(&pair[1]),
    })?;
    Ok((identity, value))
}

fn identity_from_json(value: &Value) -> Option<Identity> {
    match value {
        Value::String(s) => Some(Identity::Text(s.clone())),
        Value::Bool(b) => Some(Identity::Bool(*b)),
        Value::Number(n) => n
            .as_i64()
            .map(Identity::Integer)
            .or_else(|| n.as_u64().map(Identity::Unsigned))
            .or_else(|| n.as_f64().map(Identity::Float)),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Short rendering of an offending value for error messages.
fn describe(value: &Value) -> String {
    let s = value.to_string();
    if s.chars().count() <= 40 {
        return s;
    }
    let mut short: String = s.chars().take(37).collect();
    short.push_str("...");
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_values() {
        let input = DataInput::from_json(&json!([1.5, 2, -3.25]), false).unwrap();
        assert_eq!(input, DataInput::Values(vec![1.5, 2.0, -3.25]));
    }

    #[test]
    fn test_pairs_keep_identity_types() {
        let data = json!([["S1", 1.2], [7, 2.0], [true, 3.0]]);
        let input = DataInput::from_json(&data, true).unwrap();
        assert_eq!(
            input,
            DataInput::Pairs(vec![
                (Identity::text("S1"), 1.2),
                (Identity::Integer(7), 2.0),
                (Identity::Bool(true), 3.0),
            ])
        );
    }

    #[test]
    fn test_mapping_keeps_insertion_order() {
        let data: Value =
            serde_json::from_str(r#"{"zeta": 1.0, "alpha": 2.0, "mid": 3.0}"#).unwrap();
        let input = DataInput::from_json(&data, false).unwrap();
        let keys: Vec<String> = match input {
            DataInput::Mapping(entries) => entries.iter().map(|(k, _)| k.to_string()).collect(),
            other => panic!("expected mapping, got {other:?}"),
        };
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_integer_ids_above_i64_stay_exact() {
        let data = json!([
            [18446744073709551615u64, 1.0],
            [18446744073709551614u64, 2.0],
            [-3, 0.5]
        ]);
        let input = DataInput::from_json(&data, true).unwrap();
        assert_eq!(
            input,
            DataInput::Pairs(vec![
                (Identity::Unsigned(u64::MAX), 1.0),
                (Identity::Unsigned(u64::MAX - 1), 2.0),
                (Identity::Integer(-3), 0.5),
            ])
        );
    }

    #[test]
    fn test_id_field_requires_pairs() {
        let err = DataInput::from_json(&json!([["S1", 1.0], 2.0]), true).unwrap_err();
        assert_eq!(err, InputShapeError::NotAPair { position: 1 });

        let err = DataInput::from_json(&json!([["S1", 1.0, 5.0]]), true).unwrap_err();
        assert_eq!(err, InputShapeError::NotAPair { position: 0 });
    }

    #[test]
    fn test_non_numeric_values_rejected() {
        let err = DataInput::from_json(&json!([1.0, "two"]), false).unwrap_err();
        assert!(matches!(err, InputShapeError::NonNumericValue { position: 1, .. }));

        let err = DataInput::from_json(&json!([["a", null]]), true).unwrap_err();
        assert!(matches!(err, InputShapeError::NonNumericValue { position: 0, .. }));

        let err = DataInput::from_json(&json!({"A": 1.0, "B": "x"}), false).unwrap_err();
        assert!(matches!(
            err,
            InputShapeError::NonNumericMappingValue { ref key, .. } if key == "B"
        ));
    }

    #[test]
    fn test_non_scalar_identity_rejected() {
        let err = DataInput::from_json(&json!([[[1], 1.0]]), true).unwrap_err();
        assert!(matches!(err, InputShapeError::InvalidIdentity { position: 0, .. }));
    }

    #[test]
    fn test_unsupported_container() {
        let err = DataInput::from_json(&json!(3.0), false).unwrap_err();
        assert!(matches!(
            err,
            InputShapeError::UnsupportedContainer { ref found } if found == "number"
        ));
    }

    #[test]
    fn test_into_dataset_identities() {
        let ds = DataInput::Values(vec![4.0, 5.0]).into_dataset().unwrap();
        assert_eq!(ds.records()[1].identity, Identity::Index(1));

        let ds = DataInput::Mapping(vec![(Identity::text("A"), 1.0)]).into_dataset().unwrap();
        assert_eq!(ds.records()[0].identity, Identity::text("A"));
    }
}
