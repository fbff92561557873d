//! Placeholder behavior over normalized configuration values.

use am_placeholder::{
    contains_placeholder, extract_placeholders, flatten_placeholder, is_placeholder,
};
use am_values::JsonValues;
use anyhow::Result;
use serde_json::json;

#[test]
fn placeholders_survive_layer_normalization() -> Result<()> {
    let values = JsonValues::from_value(json!({
        "defaults": {
            "amEmailService": {
                "smtpHostName": "&{smtp.host.name}",
                "smtpPort": 25
            }
        }
    }))?;

    // The collection was hoisted to the top level; its members still carry
    // the placeholder reference.
    let email_service = values.get("amEmailService").cloned().unwrap_or_default();
    assert!(contains_placeholder(&email_service));
    assert_eq!(
        extract_placeholders(&email_service.get("smtpHostName").cloned().unwrap_or_default()),
        ["&{smtp.host.name}"]
    );
    Ok(())
}

#[test]
fn type_tagged_placeholders_flatten_to_references() {
    let flattened = flatten_placeholder(json!({
        "smtpHostName": { "$string": "&{smtp.host.name}" },
        "smtpPort": { "$int": "&{smtp.host.port}" },
        "smtpSsl": { "$bool": "&{smtp.ssl.enabled}" }
    }));

    for key in ["smtpHostName", "smtpPort", "smtpSsl"] {
        let member = flattened.get(key).cloned().unwrap_or_default();
        assert!(is_placeholder(&member), "{key} should flatten to a reference");
    }
}

#[test]
fn object_scanning_stays_one_level_deep() {
    assert!(contains_placeholder(&json!({ "value": "&{x.y}" })));
    assert!(!contains_placeholder(&json!({
        "nested": { "value": "&{x.y}" }
    })));
    assert!(!contains_placeholder(&json!([{ "value": "&{x.y}" }])));
}

#[test]
fn malformed_references_never_match() {
    for reference in ["&{}", "&{a..b}", "${a.b}", "#{a.b}", "{a.b}", "&a.b"] {
        assert!(
            !is_placeholder(&json!(reference)),
            "{reference} should not match"
        );
    }
}
