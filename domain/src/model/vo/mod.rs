pub mod job;
pub mod params;

#[rustfmt::skip]
pub use self::{
    job::{ContainerOverrides, JobNaming, ParamValue, ResourceRequest, DEFAULT_JOB_DEFINITION},
    params::JobParams,
};
