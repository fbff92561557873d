//! Layer normalization and round-trip laws.

use std::collections::HashMap;

use am_values::{JsonSchema, JsonValues};
use anyhow::Result;
use serde_json::{json, Value};

use crate::common::session_service_document;

#[test]
fn construction_then_export_is_the_identity() -> Result<()> {
    let original = session_service_document();

    let values = JsonValues::from_value(original.clone())?;
    let exported: Value = serde_json::from_str(&values.to_json()?)?;

    assert_eq!(exported, original);
    Ok(())
}

#[test]
fn normalization_produces_the_edit_shape() -> Result<()> {
    let values = JsonValues::from_value(session_service_document())?;

    assert_eq!(
        Value::Object(values.raw().clone()),
        json!({
            "global": {
                "statelessSessionsEnabled": false,
                "maxSessionListSize": 120
            },
            "amSessionService": {
                "maxSessionTime": 120,
                "maxIdleTime": 30,
                "maxCachingTime": 3
            },
            "amSessionQuotas": {
                "activeUserSessions": 5,
                "behaviourWhenQuotaExhausted": "DENY_ACCESS"
            },
            "_defaultsCollectionProperties": ["amSessionQuotas", "amSessionService"],
            "dynamic": {
                "userSessionTimeLimit": 60
            }
        })
    );
    assert!(values.diagnostics().is_empty());
    Ok(())
}

#[test]
fn documents_without_layers_pass_through_the_whole_pipeline() -> Result<()> {
    let original = json!({
        "maxSessionTime": 120,
        "listeners": ["a", "b"],
        "service": { "nested": true }
    });

    let values = JsonValues::from_value(original.clone())?;

    assert_eq!(Value::Object(values.raw().clone()), original);
    assert_eq!(values.to_value(), original);
    Ok(())
}

#[test]
fn inheritance_wrapping_is_invertible() -> Result<()> {
    let realm_defaults = JsonValues::from_value(json!({
        "maxSessionTime": 120,
        "maxIdleTime": 30,
        "quotaExhaustedAction": "DENY_ACCESS"
    }))?;

    let inheritance = HashMap::from([
        ("maxSessionTime".to_string(), true),
        ("maxIdleTime".to_string(), false),
        ("quotaExhaustedAction".to_string(), true),
    ]);

    let wrapped = realm_defaults.add_inheritance(&inheritance)?;
    assert_eq!(
        wrapped.get("maxIdleTime"),
        Some(&json!({ "value": 30, "inherited": false }))
    );

    assert_eq!(wrapped.remove_inheritance(), realm_defaults);
    Ok(())
}

#[test]
fn filter_chains_leave_the_receiver_untouched() -> Result<()> {
    let values = JsonValues::from_value(json!({
        "keep": 1,
        "drop": 2,
        "blank": ""
    }))?;

    let filtered = values
        .omit_keys(&["drop"])
        .pick_by(|_, value| !am_values::node::is_empty_value(value));

    assert_eq!(Value::Object(filtered.raw().clone()), json!({ "keep": 1 }));
    assert_eq!(
        Value::Object(values.raw().clone()),
        json!({ "keep": 1, "drop": 2, "blank": "" })
    );
    Ok(())
}

#[test]
fn password_stripping_composes_with_export() -> Result<()> {
    let schema = JsonSchema::new(json!({
        "properties": {
            "adminPassword": { "format": "password" },
            "bindPassword": {
                "type": "object",
                "properties": { "value": { "format": "password" }, "inherited": {} }
            },
            "serverUrl": { "type": "string" }
        }
    }));

    let values = JsonValues::from_value(json!({
        "adminPassword": null,
        "bindPassword": { "value": null, "inherited": true },
        "serverUrl": "ldap://directory.example.com"
    }))?;

    let exported = values.remove_null_passwords(&schema).to_value();

    assert_eq!(
        exported,
        json!({
            "bindPassword": { "inherited": true },
            "serverUrl": "ldap://directory.example.com"
        })
    );
    Ok(())
}

#[test]
fn stray_defaults_members_surface_as_diagnostics() -> Result<()> {
    let values = JsonValues::from_value(json!({
        "defaults": {
            "amSessionService": { "maxSessionTime": 120 },
            "orphanSetting": "present"
        }
    }))?;

    assert_eq!(values.diagnostics().len(), 1);
    assert!(values.diagnostics()[0].to_string().contains("orphanSetting"));

    // The export still reproduces the original nesting.
    assert_eq!(
        values.to_value(),
        json!({
            "defaults": {
                "amSessionService": { "maxSessionTime": 120 },
                "orphanSetting": "present"
            }
        })
    );
    Ok(())
}
