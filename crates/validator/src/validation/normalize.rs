//! Pure extraction helpers over possibly-absent domain objects.
//!
//! None of these fail. Absent objects, absent lists, absent list elements and
//! unusable names degrade to empty output or skipped entries, so callers can
//! feed them whatever the store or the caller handed over.

use std::collections::{HashMap, HashSet};

use common::{is_blank, is_empty, same_name};
use models::{AccessTypeDef, EnumDef, Policy, ResourceDef, Service, ServiceDefinition};

fn present<T>(list: &Option<Vec<Option<T>>>) -> impl Iterator<Item = &T> {
    list.iter().flatten().flatten()
}

/// Keys of the service's config map.
pub fn service_config_parameters(service: Option<&Service>) -> HashSet<String> {
    service
        .and_then(|s| s.configs.as_ref())
        .map(|configs| configs.keys().cloned().collect())
        .unwrap_or_default()
}

/// Names of the config parameters a service of this type must supply.
pub fn required_parameters(service_def: Option<&ServiceDefinition>) -> HashSet<String> {
    let Some(def) = service_def else { return HashSet::new() };
    present(&def.configs)
        .filter(|c| c.mandatory.unwrap_or(false))
        .filter_map(|c| c.name.as_deref())
        .filter(|&name| !is_blank(Some(name)))
        .map(str::to_string)
        .collect()
}

/// Lower-cased access-type names; blank names skipped, whitespace kept.
pub fn access_types(service_def: Option<&ServiceDefinition>) -> HashSet<String> {
    let Some(def) = service_def else { return HashSet::new() };
    present(&def.access_types)
        .filter_map(|a| a.name.as_deref())
        .filter(|&name| !is_blank(Some(name)))
        .map(str::to_lowercase)
        .collect()
}

fn resource_names<F>(service_def: Option<&ServiceDefinition>, keep: F) -> HashSet<String>
where
    F: Fn(&ResourceDef) -> bool,
{
    let Some(def) = service_def else { return HashSet::new() };
    present(&def.resources)
        .filter(|&r| keep(r))
        .filter_map(|r| r.name.as_deref())
        .filter(|&name| !is_blank(Some(name)))
        .map(str::to_lowercase)
        .collect()
}

/// Lower-cased names of resources flagged mandatory. An unset flag is false.
pub fn mandatory_resource_names(service_def: Option<&ServiceDefinition>) -> HashSet<String> {
    resource_names(service_def, |r| r.mandatory.unwrap_or(false))
}

/// Lower-cased names of every declared resource.
pub fn all_resource_names(service_def: Option<&ServiceDefinition>) -> HashSet<String> {
    resource_names(service_def, |_| true)
}

/// Resource name (as declared) to its validation regex, for non-blank regexes.
pub fn validation_regexes(service_def: Option<&ServiceDefinition>) -> HashMap<String, String> {
    let Some(def) = service_def else { return HashMap::new() };
    present(&def.resources)
        .filter(|r| !is_blank(r.validation_reg_ex.as_deref()))
        .filter_map(|r| Some((r.name.clone()?, r.validation_reg_ex.clone()?)))
        .collect()
}

/// Case-insensitive lookup of a resource definition by name.
pub fn resource_def<'a>(service_def: Option<&'a ServiceDefinition>, name: &str) -> Option<&'a ResourceDef> {
    let def = service_def?;
    present(&def.resources).find(|r| r.name.as_deref().is_some_and(|n| same_name(n, name)))
}

/// Lower-cased resource names a policy refers to.
pub fn policy_resources(policy: Option<&Policy>) -> HashSet<String> {
    policy
        .and_then(|p| p.resources.as_ref())
        .map(|resources| resources.keys().map(|k| k.to_lowercase()).collect())
        .unwrap_or_default()
}

/// No policy means nothing to audit; an unset flag means audit.
pub fn is_audit_enabled(policy: Option<&Policy>) -> bool {
    match policy {
        None => false,
        Some(p) => p.is_audit_enabled.unwrap_or(true),
    }
}

/// -1 without an enum, 0 when no default is declared, else the declared index
/// as is (it is not checked against the number of elements).
pub fn enum_default_index(enum_def: Option<&EnumDef>) -> i32 {
    match enum_def {
        None => -1,
        Some(def) => def.default_index.unwrap_or(0),
    }
}

/// Lower-cased, non-blank element names of an enum.
pub fn enum_values(enum_def: Option<&EnumDef>) -> HashSet<String> {
    let Some(def) = enum_def else { return HashSet::new() };
    present(&def.elements)
        .filter_map(|e| e.name.as_deref())
        .filter(|&name| !is_blank(Some(name)))
        .map(str::to_lowercase)
        .collect()
}

/// Every implied grant of an access type, non-empty ones lower-cased.
///
/// Unlike [`access_types`], nothing is filtered out: absent and empty entries
/// come back exactly as declared.
pub fn implied_grants(access_type_def: Option<&AccessTypeDef>) -> Option<Vec<Option<String>>> {
    let def = access_type_def?;
    let grants = def.implied_grants.as_deref().unwrap_or_default();
    Some(
        grants
            .iter()
            .map(|g| if is_empty(g.as_deref()) { g.clone() } else { g.as_deref().map(str::to_lowercase) })
            .collect(),
    )
}
