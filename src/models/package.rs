//! Raw step packages as they arrive from the sensor feed.
//!
//! A package is a two-element pair `(time, steps)`, e.g. `["09:00:00", 1000]`.
//! It is kept as untyped JSON values until it passes [`check_correct_data`],
//! so that `null`, `0` and empty strings can be told apart from real data.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const PACKAGE_LEN: usize = 2;

/// A package that passed the data check and has the expected element types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub time: String,
    pub steps: i64,
}

impl Package {
    pub fn new(time: impl Into<String>, steps: i64) -> Self {
        Self {
            time: time.into(),
            steps,
        }
    }

    /// Type a raw pair. Returns `None` when the pair fails the data check,
    /// the time is not a string, or the steps are not a whole number in `i64` range.
    pub fn from_values(values: &[Value]) -> Option<Self> {
        if !check_correct_data(values) {
            return None;
        }

        let time = values[0].as_str()?;
        let steps = whole_steps(&values[1])?;

        Some(Self::new(time, steps))
    }
}

/// Integers as-is; floats only when integral, e.g. `1500.0`.
fn whole_steps(value: &Value) -> Option<i64> {
    if let Some(steps) = value.as_i64() {
        return Some(steps);
    }

    let float = value.as_f64()?;
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.fract() == 0.0 && in_range).then_some(float as i64)
}

/// Exactly two elements, both truthy.
pub fn check_correct_data(values: &[Value]) -> bool {
    values.len() == PACKAGE_LEN && values.iter().all(is_truthy)
}

/// `null`, `false`, zero, and empty strings/arrays/objects are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_correct_data() {
        assert!(check_correct_data(&[json!("10:00:00"), json!(1000)]));
        assert!(!check_correct_data(&[json!("10:00:00"), Value::Null]));
        assert!(!check_correct_data(&[json!("10:00:00")]));
        assert!(!check_correct_data(&[
            json!("10:00:00"),
            json!(1000),
            json!(1)
        ]));
    }

    #[test]
    fn test_zero_steps_is_falsy() {
        assert!(!check_correct_data(&[json!("10:00:00"), json!(0)]));
        assert!(!check_correct_data(&[json!("10:00:00"), json!(0.0)]));
    }

    #[test]
    fn test_empty_time_is_falsy() {
        assert!(!check_correct_data(&[json!(""), json!(100)]));
    }

    #[test]
    fn test_from_values_types_the_pair() {
        let package = Package::from_values(&[json!("09:00:00"), json!(1000)]).unwrap();
        assert_eq!(package, Package::new("09:00:00", 1000));
    }

    #[test]
    fn test_from_values_rejects_wrong_types() {
        assert!(Package::from_values(&[json!(900), json!(1000)]).is_none());
        assert!(Package::from_values(&[json!("09:00:00"), json!("1000")]).is_none());
        assert!(Package::from_values(&[json!("09:00:00"), json!(2.5)]).is_none());
        assert!(Package::from_values(&[json!("09:00:00"), json!(u64::MAX)]).is_none());
        assert!(Package::from_values(&[json!("09:00:00"), json!(1e300)]).is_none());
    }

    #[test]
    fn test_from_values_keeps_negative_and_integral_float_steps() {
        let negative = Package::from_values(&[json!("09:00:00"), json!(-5)]).unwrap();
        assert_eq!(negative.steps, -5);

        let float = Package::from_values(&[json!("09:00:00"), json!(1500.0)]).unwrap();
        assert_eq!(float.steps, 1500);
    }
}
