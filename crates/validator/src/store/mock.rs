//! Scriptable in-memory store for tests and doc examples.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};

use models::{Policy, SearchFilter, Service, ServiceDefinition};

use super::ServiceStore;
use crate::errors::StoreError;

/// What the mock answers for one key. Unscripted keys answer `Ok(None)`.
#[derive(Debug, Clone)]
pub enum Scripted<T> {
    Return(T),
    Nothing,
    Fail(String),
}

impl<T: Clone> Scripted<T> {
    fn answer(&self) -> Result<Option<T>, StoreError> {
        match self {
            Scripted::Return(v) => Ok(Some(v.clone())),
            Scripted::Nothing => Ok(None),
            Scripted::Fail(msg) => Err(StoreError::Unavailable(msg.clone())),
        }
    }
}

#[derive(Default)]
pub struct MockServiceStore {
    services: Mutex<HashMap<i64, Scripted<Service>>>,
    services_by_name: Mutex<HashMap<String, Scripted<Service>>>,
    service_defs: Mutex<HashMap<i64, Scripted<ServiceDefinition>>>,
    service_defs_by_name: Mutex<HashMap<String, Scripted<ServiceDefinition>>>,
    policies: Mutex<HashMap<i64, Scripted<Policy>>>,
    searches: Mutex<HashMap<SearchFilter, Scripted<Vec<Policy>>>>,
    seen_filters: Mutex<Vec<SearchFilter>>,
}

fn guard<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn lookup<K, T>(m: &Mutex<HashMap<K, Scripted<T>>>, key: &K) -> Result<Option<T>, StoreError>
where
    K: Eq + Hash,
    T: Clone,
{
    guard(m).get(key).map_or(Ok(None), Scripted::answer)
}

impl MockServiceStore {
    pub fn on_service(&self, id: i64, answer: Scripted<Service>) -> &Self {
        guard(&self.services).insert(id, answer);
        self
    }

    pub fn on_service_by_name(&self, name: &str, answer: Scripted<Service>) -> &Self {
        guard(&self.services_by_name).insert(name.to_string(), answer);
        self
    }

    pub fn on_service_def(&self, id: i64, answer: Scripted<ServiceDefinition>) -> &Self {
        guard(&self.service_defs).insert(id, answer);
        self
    }

    pub fn on_service_def_by_name(&self, name: &str, answer: Scripted<ServiceDefinition>) -> &Self {
        guard(&self.service_defs_by_name).insert(name.to_string(), answer);
        self
    }

    pub fn on_policy(&self, id: i64, answer: Scripted<Policy>) -> &Self {
        guard(&self.policies).insert(id, answer);
        self
    }

    /// Answer for a search whose filter equals `filter` exactly.
    pub fn on_policies(&self, filter: SearchFilter, answer: Scripted<Vec<Policy>>) -> &Self {
        guard(&self.searches).insert(filter, answer);
        self
    }

    /// Every filter passed to `get_policies`, oldest first.
    pub fn seen_filters(&self) -> Vec<SearchFilter> {
        guard(&self.seen_filters).clone()
    }
}

impl ServiceStore for MockServiceStore {
    fn get_service(&self, id: i64) -> Result<Option<Service>, StoreError> {
        lookup(&self.services, &id)
    }

    fn get_service_by_name(&self, name: &str) -> Result<Option<Service>, StoreError> {
        lookup(&self.services_by_name, &name.to_string())
    }

    fn get_service_def(&self, id: i64) -> Result<Option<ServiceDefinition>, StoreError> {
        lookup(&self.service_defs, &id)
    }

    fn get_service_def_by_name(&self, name: &str) -> Result<Option<ServiceDefinition>, StoreError> {
        lookup(&self.service_defs_by_name, &name.to_string())
    }

    fn get_policy(&self, id: i64) -> Result<Option<Policy>, StoreError> {
        lookup(&self.policies, &id)
    }

    fn get_policies(&self, filter: &SearchFilter) -> Result<Option<Vec<Policy>>, StoreError> {
        guard(&self.seen_filters).push(filter.clone());
        lookup(&self.searches, filter)
    }
}
