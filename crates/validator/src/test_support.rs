#![cfg(test)]
//! Fixture builders for the validation tests.

use std::collections::{HashMap, HashSet};

use models::{AccessTypeDef, EnumDef, EnumElementDef, ResourceDef, ServiceConfigDef};

pub fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn strings(items: &[Option<&str>]) -> Vec<Option<String>> {
    items.iter().map(|s| s.map(str::to_string)).collect()
}

/// Config map whose values are derived from the keys.
pub fn config_map(keys: &[&str]) -> HashMap<String, String> {
    keys.iter().map(|k| (k.to_string(), format!("{k}-value"))).collect()
}

pub fn config_defs(input: &[(&str, bool)]) -> Vec<Option<ServiceConfigDef>> {
    input.iter().map(|(name, mandatory)| Some(ServiceConfigDef::new(name, *mandatory))).collect()
}

/// An absent name still produces an access type def, just without a name.
pub fn access_type_defs(names: &[Option<&str>]) -> Vec<Option<AccessTypeDef>> {
    names
        .iter()
        .map(|name| Some(AccessTypeDef { name: name.map(str::to_string), ..Default::default() }))
        .collect()
}

/// `None` rows become holes in the list.
pub fn resource_defs(input: &[Option<(&str, Option<bool>)>]) -> Vec<Option<ResourceDef>> {
    input.iter().map(|row| row.map(|(name, mandatory)| ResourceDef::new(name, mandatory))).collect()
}

pub fn resource_defs_with_regex(input: &[Option<(&str, Option<&str>)>]) -> Vec<Option<ResourceDef>> {
    input.iter().map(|row| row.map(|(name, regex)| ResourceDef::with_regex(name, regex))).collect()
}

pub fn enum_def(elements: &[Option<&str>], default_index: Option<i32>) -> EnumDef {
    EnumDef {
        name: Some("levels".into()),
        elements: Some(
            elements
                .iter()
                .map(|e| e.map(|name| EnumElementDef { name: Some(name.to_string()), label: None }))
                .collect(),
        ),
        default_index,
    }
}
