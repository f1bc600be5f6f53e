//! Shared utility functions.

use serde::Serializer;

/// Serialize an `i128` as a JSON-safe value.
///
/// Values that fit in `i64` become plain numbers; wider values become
/// decimal strings, since `serde_json` rejects them otherwise.
///
/// Use with `#[serde(serialize_with = "quadratic_domain::util::serialize_wide_int")]`.
pub fn serialize_wide_int<S: Serializer>(value: &i128, serializer: S) -> Result<S::Ok, S::Error> {
    match i64::try_from(*value) {
        Ok(v) => serializer.serialize_i64(v),
        Err(_) => serializer.serialize_str(&value.to_string()),
    }
}

/// Same as [`serialize_wide_int`] for optional fields
pub fn serialize_wide_int_opt<S: Serializer>(
    value: &Option<i128>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serialize_wide_int(v, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Wrapper {
        #[serde(serialize_with = "serialize_wide_int")]
        value: i128,
        #[serde(serialize_with = "serialize_wide_int_opt")]
        maybe: Option<i128>,
    }

    #[test]
    fn small_values_are_numbers() {
        let json = serde_json::to_string(&Wrapper {
            value: -8,
            maybe: Some(9),
        })
        .unwrap();
        assert_eq!(json, r#"{"value":-8,"maybe":9}"#);
    }

    #[test]
    fn wide_values_are_strings() {
        let wide = i128::from(i64::MAX) * 4;
        let json = serde_json::to_string(&Wrapper {
            value: wide,
            maybe: None,
        })
        .unwrap();
        assert_eq!(json, format!(r#"{{"value":"{}","maybe":null}}"#, wide));
    }
}
