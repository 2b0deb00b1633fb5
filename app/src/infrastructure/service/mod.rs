pub mod container_overrides;
pub mod id_generator;

#[rustfmt::skip]
pub use self::{
    container_overrides::{OverridesRecorder, OverridesRecorderState},
    id_generator::UuidGenerator,
};
