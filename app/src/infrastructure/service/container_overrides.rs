use std::sync::{Mutex, MutexGuard, PoisonError};

use dep_inj::DepInj;
use domain::{
    model::vo::{ContainerOverrides, ResourceRequest},
    service::ContainerOverrideSink,
};

/// Keeps the overrides of constructed jobs until the payload is rendered.
#[derive(DepInj, Default)]
#[target(OverridesRecorder)]
pub struct OverridesRecorderState {
    recorded: Mutex<Vec<ContainerOverrides>>,
}

impl OverridesRecorderState {
    /// Most recently recorded overrides.
    pub fn take_last(&self) -> Option<ContainerOverrides> {
        self.lock().pop()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ContainerOverrides>> {
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<Deps> ContainerOverrideSink for OverridesRecorder<Deps>
where
    Deps: AsRef<OverridesRecorderState>,
{
    fn define_container_overrides(&self, command: &[String], cpu: u32, memory: u32, gpu: u32) {
        tracing::debug!(cpu, memory, gpu, tokens = command.len(), "Container overrides defined");
        self.lock().push(ContainerOverrides {
            command: command.to_vec(),
            resources: ResourceRequest { cpu, memory, gpu },
        });
    }
}
