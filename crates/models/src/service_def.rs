use serde::{Deserialize, Serialize};

/// Schema of a service type: which config parameters, access types,
/// resources and enums its instances and policies may use.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub configs: Option<Vec<Option<ServiceConfigDef>>>,
    #[serde(default)]
    pub access_types: Option<Vec<Option<AccessTypeDef>>>,
    #[serde(default)]
    pub resources: Option<Vec<Option<ResourceDef>>>,
    #[serde(default)]
    pub enums: Option<Vec<Option<EnumDef>>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfigDef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub config_type: Option<String>,
    #[serde(default)]
    pub mandatory: Option<bool>,
    #[serde(default)]
    pub default_value: Option<String>,
}

impl ServiceConfigDef {
    pub fn new(name: &str, mandatory: bool) -> Self {
        Self { name: Some(name.to_string()), mandatory: Some(mandatory), ..Default::default() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTypeDef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    /// Access types conferred automatically when this one is granted.
    #[serde(default)]
    pub implied_grants: Option<Vec<Option<String>>>,
}

impl AccessTypeDef {
    pub fn new(name: &str) -> Self {
        Self { name: Some(name.to_string()), ..Default::default() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub mandatory: Option<bool>,
    #[serde(default)]
    pub validation_reg_ex: Option<String>,
}

impl ResourceDef {
    pub fn new(name: &str, mandatory: Option<bool>) -> Self {
        Self { name: Some(name.to_string()), mandatory, ..Default::default() }
    }

    pub fn with_regex(name: &str, regex: Option<&str>) -> Self {
        Self {
            name: Some(name.to_string()),
            validation_reg_ex: regex.map(str::to_string),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumElementDef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub elements: Option<Vec<Option<EnumElementDef>>>,
    /// Index into `elements`; not range-checked anywhere in this layer.
    #[serde(default)]
    pub default_index: Option<i32>,
}
