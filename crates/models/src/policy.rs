use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Values a policy applies to for one resource, e.g. `database = [finance, hr]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResource {
    #[serde(default)]
    pub values: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub is_excludes: Option<bool>,
    #[serde(default)]
    pub is_recursive: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub guid: Option<String>,
    /// Name of the service the policy belongs to.
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_enabled: Option<bool>,
    /// Tri-state: absent means "not specified", which auditing treats as on.
    #[serde(default)]
    pub is_audit_enabled: Option<bool>,
    #[serde(default)]
    pub resources: Option<HashMap<String, PolicyResource>>,
}

impl Policy {
    pub fn named(id: i64, service: &str, name: &str) -> Self {
        Self {
            id: Some(id),
            service: Some(service.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}
