use std::path::Path;

use domain::model::{
    entity::DesignMode,
    vo::{JobNaming, ResourceRequest, DEFAULT_JOB_DEFINITION},
};
use serde::*;
use service::prelude::JobDefaults;

#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "BatchConfig::default_job_definition_name")]
    pub job_definition_name: String,

    #[serde(default = "BatchConfig::default_hallucination_weights_dir")]
    pub hallucination_weights_dir: String,

    #[serde(default = "BatchConfig::default_inpainting_checkpoint")]
    pub inpainting_checkpoint: String,

    #[serde(default = "Default::default")]
    pub resources: ResourceRequest,

    #[serde(default = "Default::default")]
    pub job_naming: JobNaming,

    #[serde(default = "BatchConfig::default_log_level")]
    pub log_level: String,
}

impl BatchConfig {
    pub fn default_job_definition_name() -> String {
        DEFAULT_JOB_DEFINITION.to_owned()
    }

    pub fn default_hallucination_weights_dir() -> String {
        DesignMode::Hallucinate.default_artifact_path().to_owned()
    }

    pub fn default_inpainting_checkpoint() -> String {
        DesignMode::Inpaint.default_artifact_path().to_owned()
    }

    pub fn default_log_level() -> String {
        "info".to_owned()
    }

    pub fn job_defaults(&self) -> JobDefaults {
        JobDefaults {
            job_definition: self.job_definition_name.clone(),
            hallucination_weights_dir: self.hallucination_weights_dir.clone(),
            inpainting_checkpoint: self.inpainting_checkpoint.clone(),
            resources: self.resources,
            naming: self.job_naming,
        }
    }
}

/// `config.yaml` in the working directory (optional) or `path` (required),
/// overridden by `RFDESIGN_*` variables, `__` separating nested keys.
pub fn build_config(path: Option<&Path>) -> anyhow::Result<config::Config> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config").required(false),
    };
    let config = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("RFDESIGN")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    fn from_yaml(s: &str) -> BatchConfig {
        config::Config::builder()
            .add_source(config::File::from_str(s, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config: BatchConfig =
            config::Config::builder().build().unwrap().try_deserialize().unwrap();
        assert_eq!(config.job_definition_name, "RFDesignJobDefinition");
        assert_eq!(config.hallucination_weights_dir, "/database/rfdesign_params/hallucination");
        assert_eq!(
            config.inpainting_checkpoint,
            "/database/rfdesign_params/inpainting/BFF_mix_epoch25.pt"
        );
        assert_eq!(config.resources, ResourceRequest::default());
        assert_eq!(config.job_naming, JobNaming::Unique);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn yaml_overrides() {
        let config = from_yaml(indoc! {r#"
            job_definition_name: RFDesignGpuJobDefinition
            inpainting_checkpoint: /models/inpaint.pt
            job_naming: timestamp
            resources:
              cpu: 8
              gpu: 2
        "#});
        assert_eq!(config.job_definition_name, "RFDesignGpuJobDefinition");
        assert_eq!(config.job_naming, JobNaming::Timestamp);
        assert_eq!(config.resources.cpu, 8);
        assert_eq!(config.resources.memory, 16);
        assert_eq!(config.resources.gpu, 2);

        let defaults = config.job_defaults();
        assert_eq!(defaults.artifact_path(DesignMode::Inpaint), "/models/inpaint.pt");
        assert_eq!(
            defaults.artifact_path(DesignMode::Hallucinate),
            "/database/rfdesign_params/hallucination"
        );
    }
}
