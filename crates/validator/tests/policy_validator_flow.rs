//! A small policy validator assembled from the public building blocks, run
//! against both the scriptable mock and the JSON document store.

use std::collections::HashSet;
use std::sync::Arc;

use models::document::PolicyDocument;
use models::{Policy, PolicyResource, ResourceDef, Service, ServiceDefinition};
use policy_validator::storage::JsonServiceStore;
use policy_validator::store::mock::{MockServiceStore, Scripted};
use policy_validator::validation::normalize;
use policy_validator::validation::{fail_on, is_unique_name, ValidationFailure};
use policy_validator::{Action, ServiceStore, ValidationError, Validator, ValidatorSupport};

struct PolicyValidator<S: ServiceStore> {
    support: ValidatorSupport<S>,
}

impl<S: ServiceStore> PolicyValidator<S> {
    fn check(&self, policy: &Policy, action: Action) -> Result<(), ValidationError> {
        let mut failures = vec![];

        if action != Action::Create && policy.id.and_then(|id| self.support.policy(id)).is_none() {
            failures.push(
                ValidationFailure::builder()
                    .field("id")
                    .is_semantically_incorrect()
                    .because_of("no such policy")
                    .build(),
            );
        }

        let service = policy.service.as_deref().and_then(|name| self.support.service_by_name(name));
        let Some(service) = service else {
            failures.push(ValidationFailure::builder().field("service").is_missing().build());
            return fail_on(failures);
        };
        let def = service.service_type.as_deref().and_then(|t| self.support.service_def_by_name(t));

        let declared = normalize::all_resource_names(def.as_ref());
        let used = normalize::policy_resources(Some(policy));
        for unknown in used.difference(&declared) {
            failures.push(
                ValidationFailure::builder()
                    .field("resources")
                    .sub_field(unknown)
                    .is_semantically_incorrect()
                    .build(),
            );
        }
        for missing in normalize::mandatory_resource_names(def.as_ref()).difference(&used) {
            failures.push(
                ValidationFailure::builder()
                    .field("resources")
                    .sub_field(missing)
                    .is_missing()
                    .build(),
            );
        }

        if action == Action::Create {
            let mut seen = HashSet::new();
            let service_name = service.name.as_deref().unwrap_or_default();
            let existing = self.support.policies(service_name, policy.name.as_deref()).unwrap_or_default();
            for existing in existing {
                is_unique_name(existing.name.as_deref(), &mut seen, "name", "policies", &mut vec![]);
            }
            is_unique_name(policy.name.as_deref(), &mut seen, "name", "policies", &mut failures);
        }

        fail_on(failures)
    }
}

impl<S: ServiceStore> Validator for PolicyValidator<S> {
    fn validate(&self, id: i64, action: Action) -> Result<(), ValidationError> {
        match self.support.policy(id) {
            Some(policy) => self.check(&policy, action),
            None => fail_on(vec![ValidationFailure::builder()
                .field("id")
                .is_missing()
                .because_of("policy not found")
                .build()]),
        }
    }
}

fn hdfs_def() -> ServiceDefinition {
    ServiceDefinition {
        id: Some(1),
        name: Some("hdfs".into()),
        resources: Some(vec![Some(ResourceDef::new("Path", Some(true))), None, Some(ResourceDef::new("owner", None))]),
        ..Default::default()
    }
}

fn cluster() -> Service {
    Service { service_type: Some("hdfs".into()), ..Service::named(10, "c1") }
}

fn policy_on(id: i64, name: &str, resources: &[&str]) -> Policy {
    Policy {
        resources: Some(resources.iter().map(|r| (r.to_string(), PolicyResource::default())).collect()),
        ..Policy::named(id, "c1", name)
    }
}

fn json_validator() -> PolicyValidator<JsonServiceStore> {
    let doc = PolicyDocument {
        services: vec![cluster()],
        service_defs: vec![hdfs_def()],
        policies: vec![
            policy_on(100, "home", &["PATH"]),
            policy_on(101, "no path", &["owner"]),
            policy_on(102, "stray", &["path", "table"]),
        ],
    };
    PolicyValidator { support: ValidatorSupport::new(JsonServiceStore::from_document(doc)) }
}

#[test]
fn valid_policy_passes_for_every_existing_action() {
    let v = json_validator();
    assert!(v.validate(100, Action::Update).is_ok());
    assert!(v.validate(100, Action::Delete).is_ok());
}

#[test]
fn missing_mandatory_and_unknown_resources_fail() {
    let v = json_validator();

    let err = v.validate(101, Action::Update).unwrap_err();
    assert!(err.failures().iter().any(|f| f.is_missing() && f.sub_field_name() == Some("path")));

    let err = v.validate(102, Action::Update).unwrap_err();
    assert_eq!(err.failures().len(), 1);
    assert_eq!(err.failures()[0].sub_field_name(), Some("table"));
}

#[test]
fn duplicate_name_fails_on_create() {
    let v = json_validator();
    let again = policy_on(200, "HOME", &["path"]);
    let err = v.check(&again, Action::Create).unwrap_err();
    assert!(err.to_string().contains("duplicate value"));

    let fresh = policy_on(201, "fresh", &["path"]);
    assert!(v.check(&fresh, Action::Create).is_ok());
}

#[test]
fn unknown_policy_id_is_missing() {
    let err = json_validator().validate(999, Action::Delete).unwrap_err();
    assert!(err.failures()[0].is_missing());
}

#[test]
fn store_outage_reads_as_missing_references() {
    let store = Arc::new(MockServiceStore::default());
    store
        .on_policy(1, Scripted::Return(policy_on(1, "p", &["path"])))
        .on_service_by_name("c1", Scripted::Fail("connection refused".into()));
    let v = PolicyValidator { support: ValidatorSupport::builder().store(store).build().unwrap() };

    let err = v.validate(1, Action::Update).unwrap_err();
    assert_eq!(err.failures().len(), 1);
    assert_eq!(err.failures()[0].field_name(), Some("service"));
    assert!(!err.to_string().contains("connection refused"));
}

#[test]
fn bare_support_still_refuses_to_validate() {
    let support = ValidatorSupport::new(JsonServiceStore::from_document(PolicyDocument::default()));
    let err = support.validate(1, Action::Create).unwrap_err();
    assert!(err.to_string().contains("internal error"));
}
