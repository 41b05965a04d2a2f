use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key/value query descriptor handed to a store to narrow a policy listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchFilter {
    params: BTreeMap<String, String>,
}

impl SearchFilter {
    pub const SERVICE_NAME: &'static str = "serviceName";
    pub const POLICY_NAME: &'static str = "policyName";

    pub fn new() -> Self { Self::default() }

    pub fn set_param(&mut self, name: &str, value: &str) {
        self.params.insert(name.to_string(), value.to_string());
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.set_param(name, value);
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool { self.params.contains_key(name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_with_same_params_are_equal() {
        let a = SearchFilter::new()
            .with_param(SearchFilter::POLICY_NAME, "p")
            .with_param(SearchFilter::SERVICE_NAME, "s");
        let mut b = SearchFilter::new();
        b.set_param(SearchFilter::SERVICE_NAME, "s");
        b.set_param(SearchFilter::POLICY_NAME, "p");
        assert_eq!(a, b);
        assert_eq!(a.param(SearchFilter::SERVICE_NAME), Some("s"));
        assert!(!a.contains("other"));
    }
}
