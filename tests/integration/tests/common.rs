//! Common test fixtures.

use serde_json::{json, Value};

/// A realistic service document: global values at the top level, realm
/// defaults with per-service collections, and user-level dynamic values.
pub fn session_service_document() -> Value {
    json!({
        "statelessSessionsEnabled": false,
        "maxSessionListSize": 120,
        "defaults": {
            "amSessionService": {
                "maxSessionTime": 120,
                "maxIdleTime": 30,
                "maxCachingTime": 3
            },
            "amSessionQuotas": {
                "activeUserSessions": 5,
                "behaviourWhenQuotaExhausted": "DENY_ACCESS"
            }
        },
        "dynamic": {
            "userSessionTimeLimit": 60
        }
    })
}
