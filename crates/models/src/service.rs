use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A configured instance of a service type, e.g. one HDFS cluster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub guid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Name of the service definition this service instantiates.
    #[serde(default, rename = "type")]
    pub service_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_enabled: Option<bool>,
    #[serde(default)]
    pub configs: Option<HashMap<String, String>>,
}

impl Service {
    pub fn named(id: i64, name: &str) -> Self {
        Self { id: Some(id), name: Some(name.to_string()), ..Default::default() }
    }
}
