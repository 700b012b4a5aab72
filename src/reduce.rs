//! Scalar reducers applied to cell values.
//!
//! These are the arithmetic backends of the [`Aggregate`](crate::Aggregate)
//! trait. All of them reject values that cannot be coerced to a number;
//! empty input yields the documented defaults rather than an error.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::value::Value;

/// Sum of the given values. Zero for empty input. The result stays an
/// integer as long as every input is integral.
pub fn sum(values: &[Value]) -> Result<Value> {
    let mut total = 0f64;
    let mut integral = true;
    for value in values {
        total += numeric(value)?;
        integral = integral && value.as_i64().is_some();
    }
    if integral {
        Ok(Value::Int(total as i64))
    } else {
        Ok(Value::Float(total))
    }
}

/// The lowest value, or null for empty input.
pub fn min(values: &[Value]) -> Result<Value> {
    let mut best: Option<(f64, &Value)> = None;
    for value in values {
        let n = numeric(value)?;
        match best {
            Some((lowest, _)) if n >= lowest => {}
            _ => best = Some((n, value)),
        }
    }
    Ok(best.map(|(_, value)| value.clone()).unwrap_or(Value::Null))
}

/// The highest value, or null for empty input.
pub fn max(values: &[Value]) -> Result<Value> {
    let mut best: Option<(f64, &Value)> = None;
    for value in values {
        let n = numeric(value)?;
        match best {
            Some((highest, _)) if n <= highest => {}
            _ => best = Some((n, value)),
        }
    }
    Ok(best.map(|(_, value)| value.clone()).unwrap_or(Value::Null))
}

/// Arithmetic mean. Zero for empty input.
pub fn avg(values: &[Value]) -> Result<Value> {
    if values.is_empty() {
        return Ok(Value::Int(0));
    }
    let total: f64 = values.iter().map(numeric).sum::<Result<f64>>()?;
    Ok(Value::Float(total / values.len() as f64))
}

/// Median by index selection. Zero for empty input.
///
/// Values are sorted ascending and the element at index `len / 2` is
/// returned, with the index rounded down (`ceil = false`) or up
/// (`ceil = true`, capped at the last element). No interpolation is
/// performed for even-length input; the upper of the middle pair wins.
pub fn median(values: &[Value], ceil: bool) -> Result<Value> {
    if values.is_empty() {
        return Ok(Value::Int(0));
    }
    let mut keyed: Vec<(f64, &Value)> = Vec::with_capacity(values.len());
    for value in values {
        keyed.push((numeric(value)?, value));
    }
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let half = values.len() as f64 / 2.0;
    let index = if ceil {
        (half.ceil() as usize).min(keyed.len() - 1)
    } else {
        half.floor() as usize
    };
    Ok(keyed[index].1.clone())
}

fn numeric(value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        Error::InvalidValue(format!(
            "values must be numeric or numeric strings, got {:?}",
            value
        ))
    })
}
