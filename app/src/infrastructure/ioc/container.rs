use service::prelude::JobSpecBuilderState;
use typed_builder::TypedBuilder;

use crate::infrastructure::service::{OverridesRecorderState, UuidGenerator};

#[derive(derive_more::AsRef, TypedBuilder)]
pub struct Container {
    #[as_ref]
    pub(super) job_spec_builder: JobSpecBuilderState,

    #[as_ref]
    pub(super) overrides: OverridesRecorderState,

    #[builder(default)]
    pub(super) id_generator: UuidGenerator,
}
