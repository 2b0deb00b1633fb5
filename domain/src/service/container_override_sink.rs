/// Receives the command and resource overrides of a constructed job, to be
/// translated into the batch backend's submission payload.
pub trait ContainerOverrideSink {
    /// `memory` is in GiB.
    fn define_container_overrides(&self, command: &[String], cpu: u32, memory: u32, gpu: u32);
}
