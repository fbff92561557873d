//! # am-placeholder
//!
//! Deployment-time placeholder detection for configuration values.
//!
//! A placeholder is a textual reference of the form `&{dotted.identifier}`
//! that the platform substitutes with an external value at deployment time.
//! Service endpoints may also deliver a placeholder pre-tagged with its
//! expected type, as an object with a single `$`-prefixed member (see
//! [`PLACEHOLDER_TYPES`]); [`flatten_placeholder`] unwraps that tagging.
//!
//! None of these functions fail: malformed or absent input yields `false`
//! or an empty result.
//!
//! Note the deliberate asymmetry in [`contains_placeholder`]: arrays are
//! scanned for placeholder string elements, but nested objects are not
//! descended into. Only the direct members of an object are considered.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Type tags a placeholder object may carry as its single member key.
pub const PLACEHOLDER_TYPES: [&str; 5] = ["$bool", "$list", "$object", "$string", "$int"];

/// `&{segment(.segment)*}` with non-empty alphanumeric segments, so `&{}`
/// and consecutive dots never match.
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&\{[A-Za-z0-9_]+(\.[A-Za-z0-9_]+)*\}").expect("placeholder pattern is valid")
});

/// Whether a string contains a placeholder reference. Substring
/// occurrences count: `"prefix &{a.b} suffix"` is a match.
#[must_use]
pub fn is_placeholder_str(value: &str) -> bool {
    PLACEHOLDER_PATTERN.is_match(value)
}

/// Whether a value is a string containing a placeholder reference.
/// Non-strings (including `null`) are never placeholders.
#[must_use]
pub fn is_placeholder(value: &Value) -> bool {
    match value {
        Value::String(s) => is_placeholder_str(s),
        _ => false,
    }
}

/// Whether a value carries a placeholder one level deep.
///
/// True for a placeholder string, for an array containing at least one
/// placeholder string element, and for an object with at least one direct
/// member that is a placeholder string. Nested objects are not descended
/// into: `{"nested": {"value": "&{x.y}"}}` does not contain a placeholder.
#[must_use]
pub fn contains_placeholder(value: &Value) -> bool {
    match value {
        Value::String(s) => is_placeholder_str(s),
        Value::Array(items) => items
            .iter()
            .any(|item| matches!(item, Value::String(s) if is_placeholder_str(s))),
        Value::Object(members) => members
            .values()
            .any(|member| matches!(member, Value::String(s) if is_placeholder_str(s))),
        _ => false,
    }
}

/// Extracts the placeholder strings carried by a value.
///
/// A placeholder string yields itself; an array yields its placeholder
/// string elements; an object yields its `value` member when that member is
/// a placeholder string. Everything else yields an empty list.
#[must_use]
pub fn extract_placeholders(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) if is_placeholder_str(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) if is_placeholder_str(s) => Some(s.clone()),
                _ => None,
            })
            .collect(),
        Value::Object(members) => match members.get("value") {
            Some(Value::String(s)) if is_placeholder_str(s) => vec![s.clone()],
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Unwraps type-tagged placeholder members of an object.
///
/// Any member whose value is an object with exactly one key drawn from
/// [`PLACEHOLDER_TYPES`] is replaced by that inner value. Non-objects
/// (including all "falsy" values: `null`, `false`, `0`, `""`) are returned
/// unchanged.
#[must_use]
pub fn flatten_placeholder(value: Value) -> Value {
    let Value::Object(members) = value else {
        return value;
    };

    let flattened = members
        .into_iter()
        .map(|(key, member)| (key, unwrap_type_tag(member)))
        .collect();

    Value::Object(flattened)
}

/// Unwraps a single `{"$type": inner}` wrapper, passing anything else
/// through.
fn unwrap_type_tag(member: Value) -> Value {
    match member {
        Value::Object(inner)
            if inner.len() == 1
                && inner
                    .keys()
                    .next()
                    .is_some_and(|tag| PLACEHOLDER_TYPES.contains(&tag.as_str())) =>
        {
            inner.into_iter().next().map_or(Value::Null, |(_, value)| value)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn valid_placeholders_are_detected() {
        assert!(is_placeholder(&json!("&{stub.valid.placeholder}")));
        assert!(is_placeholder(&json!("&{stub.vali.with9.numbers1}")));
        assert!(is_placeholder(&json!("&{a.b.c}")));
        // Substring occurrences count.
        assert!(is_placeholder(&json!(
            "abcdefg 12345 ,.:/@$ &{stub.valid.placeholder} abcdefg"
        )));
    }

    #[test]
    fn invalid_placeholders_are_rejected() {
        let invalid = [
            json!("%{invalid.placeholder"),
            json!("%invalid.placeholder}"),
            json!("${invalid.placeholder}"),
            json!("{invalid.placeholder}"),
            json!("%invalid.placeholder"),
            json!("#{invalid.placeholder}"),
            json!("&{a..b}"),
            json!("&{}"),
            json!(null),
            json!(42),
        ];

        for value in invalid {
            assert!(!is_placeholder(&value), "{value} should not be a placeholder");
            assert!(!contains_placeholder(&value), "{value} should not contain one");
        }
    }

    #[test]
    fn object_members_are_scanned_one_level_deep() {
        assert!(contains_placeholder(&json!({
            "value": "&{nested.placeholder.object}"
        })));
        assert!(!contains_placeholder(&json!({
            "nested": { "value": "&{nested.placeholder.object}" }
        })));
    }

    #[test]
    fn array_elements_are_scanned_but_not_descended_into() {
        assert!(contains_placeholder(&json!(["&{placeholder.array}"])));
        assert!(!contains_placeholder(&json!([
            { "value": "&{placeholder.array}" }
        ])));
    }

    #[test]
    fn extraction_finds_the_placeholder_strings() {
        let placeholder = "&{stub.array.placeholder}";

        for carrier in [
            json!([placeholder]),
            json!({ "value": placeholder }),
            json!([
                "non.placeholder",
                placeholder,
                "second.non.placeholder",
                "third.non.placeholder"
            ]),
        ] {
            let found = extract_placeholders(&carrier);
            assert_eq!(found, [placeholder], "carrier: {carrier}");
        }
    }

    #[test]
    fn extraction_yields_nothing_without_placeholders() {
        for carrier in [
            json!(["non.placeholder"]),
            json!([4, 5, 6, 7]),
            json!({ "value": "non-placeholder" }),
            json!(null),
        ] {
            assert!(extract_placeholders(&carrier).is_empty(), "carrier: {carrier}");
        }
    }

    #[test]
    fn type_tagged_members_are_flattened() {
        for tag in PLACEHOLDER_TYPES {
            let placeholder = format!("&{{stub.{}.placeholder}}", tag.trim_start_matches('$'));
            let object = json!({
                "field": { (tag): placeholder.clone() },
                "anotherField": "stub-other-field"
            });

            let flattened = flatten_placeholder(object);

            assert_eq!(flattened.get("field"), Some(&json!(placeholder)));
            assert_eq!(
                flattened.get("anotherField"),
                Some(&json!("stub-other-field"))
            );
        }
    }

    #[test]
    fn unknown_tags_and_larger_objects_pass_through() {
        let object = json!({
            "field": { "$unknown": "&{stub.placeholder}" },
            "pair": { "$bool": "&{stub.placeholder}", "extra": true }
        });

        assert_eq!(flatten_placeholder(object.clone()), object);
    }

    #[test]
    fn falsy_inputs_are_returned_unchanged() {
        for value in [json!(null), json!(false), json!(0), json!("")] {
            assert_eq!(flatten_placeholder(value.clone()), value);
        }
    }
}
