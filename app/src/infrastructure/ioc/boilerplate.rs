use domain::{
    model::{
        entity::{DesignMode, JobSpec},
        vo::JobParams,
    },
    service::{ContainerOverrideSink, IdGenerator, JobSpecService},
    JobSpecError,
};
use service::prelude::JobSpecBuilder;

use super::Container;
use crate::infrastructure::service::OverridesRecorder;

impl ContainerOverrideSink for Container {
    fn define_container_overrides(&self, command: &[String], cpu: u32, memory: u32, gpu: u32) {
        OverridesRecorder::inj_ref(self).define_container_overrides(command, cpu, memory, gpu)
    }
}

impl IdGenerator for Container {
    fn generate_id(&self) -> String {
        self.id_generator.generate_id()
    }
}

impl JobSpecService for Container {
    fn construct(&self, mode: DesignMode, params: &JobParams) -> Result<JobSpec, JobSpecError> {
        JobSpecBuilder::inj_ref(self).construct(mode, params)
    }
}
