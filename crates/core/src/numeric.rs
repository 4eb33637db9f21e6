// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Coercion of loosely typed numeric fields.
//!
//! Position payloads carry amounts, prices, ticks and fee tiers as JSON numbers, numeric strings,
//! or not at all. [`NumericOrString`] captures the raw field and exposes the only sanctioned
//! conversions: [`NumericOrString::as_f64`] for accumulation and [`NumericOrString::as_tick`]
//! for tick arithmetic. A value that does not parse to a finite number behaves exactly like a
//! missing one.

use std::fmt::{self, Display};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{IgnoredAny, MapAccess, SeqAccess, Visitor},
};

/// A numeric field which may be encoded as a JSON number or as a string.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericOrString {
    /// A JSON number.
    Number(f64),
    /// A JSON string, expected to hold a number.
    Text(String),
    /// Any other JSON type (boolean, array, object), coerced like an unparseable string.
    Unsupported,
}

impl NumericOrString {
    /// Returns the value as a finite `f64`, or `None` if it is missing or unparseable.
    ///
    /// Strings are trimmed before parsing. Empty strings, `NaN` and infinities are rejected.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Unsupported => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Returns the value as a tick index.
    ///
    /// Fractional values are truncated toward zero. Values outside the `i32` domain are
    /// rejected, which keeps every subsequent tick difference inside `i64`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_tick(&self) -> Option<i32> {
        let value = self.as_f64()?.trunc();
        if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return None;
        }
        Some(value as i32)
    }

    /// Returns the literal label of the value, or `None` when it carries no text.
    ///
    /// Used where the field takes part in an identity (a fee tier inside a pool key) rather
    /// than in arithmetic, so the label is not required to be numeric. Text is kept verbatim,
    /// surrounding whitespace included; only an empty string counts as absent.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Number(value) if value.is_finite() => Some(value.to_string()),
            Self::Text(text) if !text.is_empty() => Some(text.clone()),
            _ => None,
        }
    }
}

impl Display for NumericOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
            Self::Unsupported => Ok(()),
        }
    }
}

impl From<f64> for NumericOrString {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for NumericOrString {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for NumericOrString {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for NumericOrString {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Coerces an optional field to `f64`, falling back to `default` when it is missing or
/// unparseable.
#[inline]
#[must_use]
pub fn parse_or_default(value: Option<&NumericOrString>, default: f64) -> f64 {
    value.and_then(NumericOrString::as_f64).unwrap_or(default)
}

impl Serialize for NumericOrString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Unsupported => serializer.serialize_none(),
        }
    }
}

struct NumericOrStringVisitor;

impl<'de> Visitor<'de> for NumericOrStringVisitor {
    type Value = NumericOrString;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a number or a numeric string")
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(NumericOrString::Number(value as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(NumericOrString::Number(value as f64))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(NumericOrString::Number(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(NumericOrString::Text(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(NumericOrString::Text(value))
    }

    fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(NumericOrString::Unsupported)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(NumericOrString::Unsupported)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(NumericOrString::Unsupported)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(NumericOrString::Unsupported)
    }
}

impl<'de> Deserialize<'de> for NumericOrString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumericOrStringVisitor)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default)]
        value: Option<NumericOrString>,
    }

    fn decode(json: &str) -> Option<NumericOrString> {
        serde_json::from_str::<Holder>(json).unwrap().value
    }

    #[rstest]
    #[case(NumericOrString::Number(100.0), Some(100.0))]
    #[case(NumericOrString::from("250"), Some(250.0))]
    #[case(NumericOrString::from("  42.5 "), Some(42.5))]
    #[case(NumericOrString::from("-7"), Some(-7.0))]
    #[case(NumericOrString::from("1e3"), Some(1000.0))]
    #[case(NumericOrString::from(""), None)]
    #[case(NumericOrString::from("abc"), None)]
    #[case(NumericOrString::from("NaN"), None)]
    #[case(NumericOrString::from("inf"), None)]
    #[case(NumericOrString::Number(f64::NAN), None)]
    #[case(NumericOrString::Number(f64::INFINITY), None)]
    #[case(NumericOrString::Unsupported, None)]
    fn test_as_f64(#[case] value: NumericOrString, #[case] expected: Option<f64>) {
        assert_eq!(value.as_f64(), expected);
    }

    #[rstest]
    #[case(NumericOrString::Number(100.0), Some(100))]
    #[case(NumericOrString::from("-887272"), Some(-887_272))]
    #[case(NumericOrString::from("12.9"), Some(12))]
    #[case(NumericOrString::from("-12.9"), Some(-12))]
    #[case(NumericOrString::Number(0.0), Some(0))]
    #[case(NumericOrString::Number(3.0e10), None)]
    #[case(NumericOrString::Number(-3.0e10), None)]
    #[case(NumericOrString::from("tick"), None)]
    fn test_as_tick(#[case] value: NumericOrString, #[case] expected: Option<i32>) {
        assert_eq!(value.as_tick(), expected);
    }

    #[rstest]
    #[case(NumericOrString::Number(3000.0), Some("3000"))]
    #[case(NumericOrString::Number(0.05), Some("0.05"))]
    #[case(NumericOrString::from("500"), Some("500"))]
    #[case(NumericOrString::from(" 100 "), Some(" 100 "))]
    #[case(NumericOrString::from(" "), Some(" "))]
    #[case(NumericOrString::from("custom"), Some("custom"))]
    #[case(NumericOrString::from(""), None)]
    #[case(NumericOrString::Number(f64::NAN), None)]
    #[case(NumericOrString::Unsupported, None)]
    fn test_label(#[case] value: NumericOrString, #[case] expected: Option<&str>) {
        assert_eq!(value.label().as_deref(), expected);
    }

    #[rstest]
    #[case(r#"{"value": 100}"#, Some(NumericOrString::Number(100.0)))]
    #[case(r#"{"value": -5}"#, Some(NumericOrString::Number(-5.0)))]
    #[case(r#"{"value": 1.25}"#, Some(NumericOrString::Number(1.25)))]
    #[case(r#"{"value": "250"}"#, Some(NumericOrString::Text("250".to_string())))]
    #[case(r#"{"value": true}"#, Some(NumericOrString::Unsupported))]
    #[case(r#"{"value": [1, 2]}"#, Some(NumericOrString::Unsupported))]
    #[case(r#"{"value": {"nested": 1}}"#, Some(NumericOrString::Unsupported))]
    #[case(r#"{"value": null}"#, None)]
    #[case(r"{}", None)]
    fn test_deserialize(#[case] json: &str, #[case] expected: Option<NumericOrString>) {
        assert_eq!(decode(json), expected);
    }

    #[rstest]
    fn test_serialize_preserves_encoding() {
        let number = serde_json::to_string(&NumericOrString::Number(1.5)).unwrap();
        let text = serde_json::to_string(&NumericOrString::from("250")).unwrap();
        let unsupported = serde_json::to_string(&NumericOrString::Unsupported).unwrap();
        assert_eq!(number, "1.5");
        assert_eq!(text, r#""250""#);
        assert_eq!(unsupported, "null");
    }

    #[rstest]
    #[case(None, 0.0)]
    #[case(Some(NumericOrString::from("junk")), 0.0)]
    #[case(Some(NumericOrString::from("12")), 12.0)]
    fn test_parse_or_default(#[case] value: Option<NumericOrString>, #[case] expected: f64) {
        assert_eq!(parse_or_default(value.as_ref(), 0.0), expected);
    }
}
