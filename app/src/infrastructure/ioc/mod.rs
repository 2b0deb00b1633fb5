mod boilerplate;
mod container;

use domain::model::vo::ContainerOverrides;
use service::prelude::*;

use crate::{config::BatchConfig, infrastructure::service::OverridesRecorderState};

pub use self::container::Container;

impl Container {
    pub fn new(config: &BatchConfig) -> Self {
        Container::builder()
            .job_spec_builder(JobSpecBuilderState::new(config.job_defaults()))
            .overrides(OverridesRecorderState::default())
            .build()
    }

    /// Overrides forwarded by the latest successful construction.
    pub fn take_overrides(&self) -> Option<ContainerOverrides> {
        self.overrides.take_last()
    }
}

#[cfg(test)]
mod tests {
    use domain::{
        model::{entity::DesignMode, vo::JobParams},
        service::JobSpecService,
    };

    use super::*;

    fn container() -> Container {
        let config: BatchConfig =
            config::Config::builder().build().unwrap().try_deserialize().unwrap();
        Container::new(&config)
    }

    fn params() -> JobParams {
        JobParams::builder()
            .target_id("T1")
            .input_location("s3://bucket/in")
            .output_location("s3://bucket/out")
            .template_reference("1abc.pdb")
            .build()
    }

    #[test]
    fn overrides_follow_construction() {
        let container = container();
        let spec = container.construct(DesignMode::Hallucinate, &params()).unwrap();
        let overrides = container.take_overrides().unwrap();

        assert_eq!(overrides.command, spec.command());
        assert_eq!(overrides.resources, spec.resources());
        assert_eq!(spec.staging_directory().len(), 32);
        assert!(spec.command()[0].ends_with(&format!("{}/input/", spec.staging_directory())));
        assert!(container.take_overrides().is_none());
    }

    #[test]
    fn rejected_request_records_nothing() {
        let container = container();
        let mut params = params();
        params.output_location.clear();
        assert!(container.construct(DesignMode::Inpaint, &params).is_err());
        assert!(container.take_overrides().is_none());
    }

    #[test]
    fn fresh_staging_per_job() {
        let container = container();
        let a = container.construct(DesignMode::Inpaint, &params()).unwrap();
        let b = container.construct(DesignMode::Inpaint, &params()).unwrap();
        assert_ne!(a.staging_directory(), b.staging_directory());
        assert_ne!(a.job_name(), b.job_name());
    }
}
