use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{Policy, Service, ServiceDefinition};

/// On-disk bundle of everything a policy store knows about.
///
/// ```json
/// { "services": [...], "serviceDefs": [...], "policies": [...] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub service_defs: Vec<ServiceDefinition>,
    #[serde(default)]
    pub policies: Vec<Policy>,
}

impl PolicyDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        serde_json::from_slice(bytes).map_err(|e| ModelError::Malformed(e.to_string()))
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, ModelError> {
        serde_json::to_vec_pretty(self).map_err(|e| ModelError::Malformed(e.to_string()))
    }
}
