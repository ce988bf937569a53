//! Pure helper functions for extracting typed values from a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! These never fail; range checks happen afterwards in
//! [`SceneConfig::validate`](crate::SceneConfig::validate).

use serde_json::Value;

/// Extracts an `f32` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON floats and integers.
pub fn param_f32(params: &Value, name: &str, default: f32) -> f32 {
    params
        .get(name)
        .and_then(Value::as_f64)
        .map(|v| v as f32)
        .unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// Extracts a fixed-length array of numbers from `params[name]`.
///
/// Falls back to `default` if the key is missing, the value is not an
/// array of exactly `N` entries, or any entry is not a number.
pub fn param_f32_array<const N: usize>(params: &Value, name: &str, default: [f32; N]) -> [f32; N] {
    let Some(items) = params.get(name).and_then(Value::as_array) else {
        return default;
    };
    if items.len() != N {
        return default;
    }
    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(items) {
        match item.as_f64() {
            Some(v) => *slot = v as f32,
            None => return default,
        }
    }
    out
}
