use std::collections::BTreeMap;

use domain::model::{entity::JobSpec, vo::ContainerOverrides};
use serde::Serialize;

const MIB_PER_GIB: u64 = 1024;

/// Submission request in the batch backend's shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitJobPayload {
    pub job_name: String,
    pub job_definition: String,
    pub container_overrides: ContainerOverridesPayload,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerOverridesPayload {
    pub command: Vec<String>,
    pub resource_requirements: Vec<ResourceRequirement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRequirement {
    pub r#type: ResourceType,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceType {
    Vcpu,
    Memory,
    Gpu,
}

impl From<ContainerOverrides> for ContainerOverridesPayload {
    fn from(overrides: ContainerOverrides) -> Self {
        let ContainerOverrides { command, resources } = overrides;
        let mut resource_requirements = vec![
            ResourceRequirement {
                r#type: ResourceType::Vcpu,
                value: resources.cpu.to_string(),
            },
            ResourceRequirement {
                r#type: ResourceType::Memory,
                value: (u64::from(resources.memory) * MIB_PER_GIB).to_string(),
            },
        ];
        // The backend rejects a GPU requirement of zero.
        if resources.gpu > 0 {
            resource_requirements.push(ResourceRequirement {
                r#type: ResourceType::Gpu,
                value: resources.gpu.to_string(),
            });
        }
        Self {
            command,
            resource_requirements,
        }
    }
}

impl SubmitJobPayload {
    pub fn new(spec: &JobSpec, overrides: ContainerOverrides) -> Self {
        Self {
            job_name: spec.job_name().to_owned(),
            job_definition: spec.job_definition().to_owned(),
            container_overrides: overrides.into(),
            tags: BTreeMap::from([
                ("TargetId".to_owned(), spec.target_id().to_owned()),
                ("DesignMode".to_owned(), spec.mode().to_string()),
            ]),
        }
    }
}
