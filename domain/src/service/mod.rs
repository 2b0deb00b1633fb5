mod container_override_sink;
mod id_generator;
mod job_spec_service;

#[rustfmt::skip]
pub use self::{
    container_override_sink::ContainerOverrideSink,
    id_generator::IdGenerator,
    job_spec_service::JobSpecService,
};
