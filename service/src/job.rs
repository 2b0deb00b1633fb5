use std::sync::OnceLock;

use chrono::Local;
use dashmap::DashSet;
use dep_inj::DepInj;
use domain::{
    model::{
        entity::{DesignMode, JobSpec, ResolvedParams},
        vo::{JobNaming, JobParams, ResourceRequest, DEFAULT_JOB_DEFINITION},
    },
    service::{ContainerOverrideSink, IdGenerator, JobSpecService},
    JobSpecError,
};
use regex::Regex;

/// Redraws allowed when the identifier source returns an issued staging directory.
const MAX_ID_ATTEMPTS: usize = 8;

/// Values used when a request leaves an override empty.
#[derive(Debug, Clone)]
pub struct JobDefaults {
    pub job_definition: String,
    pub hallucination_weights_dir: String,
    pub inpainting_checkpoint: String,
    pub resources: ResourceRequest,
    pub naming: JobNaming,
}

impl Default for JobDefaults {
    fn default() -> Self {
        Self {
            job_definition: DEFAULT_JOB_DEFINITION.to_owned(),
            hallucination_weights_dir: DesignMode::Hallucinate.default_artifact_path().to_owned(),
            inpainting_checkpoint: DesignMode::Inpaint.default_artifact_path().to_owned(),
            resources: ResourceRequest::default(),
            naming: JobNaming::default(),
        }
    }
}

impl JobDefaults {
    pub fn artifact_path(&self, mode: DesignMode) -> &str {
        match mode {
            DesignMode::Hallucinate => &self.hallucination_weights_dir,
            DesignMode::Inpaint => &self.inpainting_checkpoint,
        }
    }
}

#[derive(DepInj, Default)]
#[target(JobSpecBuilder)]
pub struct JobSpecBuilderState {
    defaults: JobDefaults,
    /// Staging directories handed out so far.
    issued: DashSet<String>,
}

impl JobSpecBuilderState {
    pub fn new(defaults: JobDefaults) -> Self {
        Self {
            defaults,
            ..Default::default()
        }
    }
}

impl<Deps> JobSpecService for JobSpecBuilder<Deps>
where
    Deps: AsRef<JobSpecBuilderState> + ContainerOverrideSink + IdGenerator,
{
    fn construct(&self, mode: DesignMode, params: &JobParams) -> Result<JobSpec, JobSpecError> {
        let job_definition =
            params.job_definition.as_deref().unwrap_or(&self.defaults.job_definition);
        let artifact_path = params
            .artifact_path
            .as_deref()
            .unwrap_or_else(|| self.defaults.artifact_path(mode));
        let resources = params.resources.unwrap_or(self.defaults.resources);

        require("target_id", &params.target_id)?;
        require("input_location", &params.input_location)?;
        require("output_location", &params.output_location)?;
        require("template_reference", &params.template_reference)?;
        if let Some(dir) = &params.staging_directory {
            require("staging_directory", dir)?;
        }
        if let Some(name) = &params.job_identity {
            require("job_identity", name)?;
        }
        require("job_definition", job_definition)?;
        require("artifact_path", artifact_path)?;
        check_resources(&resources)?;
        for key in params.extra_parameters.keys() {
            if !flag_name().is_match(key) {
                return Err(JobSpecError::invalid(
                    format!("extra_parameters.{key}"),
                    "not a valid flag name",
                ));
            }
        }

        let staging_directory = self.staging_directory(params)?;
        let job_name = match &params.job_identity {
            Some(name) => name.clone(),
            None => self.job_name(mode),
        };

        let spec = JobSpec::new(
            mode,
            ResolvedParams {
                target_id: params.target_id.clone(),
                input_location: params.input_location.clone(),
                output_location: params.output_location.clone(),
                template_reference: params.template_reference.clone(),
                staging_directory,
                job_name,
                job_definition: job_definition.to_owned(),
                artifact_path: artifact_path.to_owned(),
                extra_parameters: params.extra_parameters.clone(),
                resources,
            },
        );

        tracing::info!(
            job_name = %spec.job_name(),
            target_id = %spec.target_id(),
            %mode,
            "Command is {:?}",
            spec.command()
        );
        self.prj_ref().define_container_overrides(
            spec.command(),
            resources.cpu,
            resources.memory,
            resources.gpu,
        );
        Ok(spec)
    }
}

impl<Deps> JobSpecBuilder<Deps>
where
    Deps: AsRef<JobSpecBuilderState> + IdGenerator,
{
    fn staging_directory(&self, params: &JobParams) -> Result<String, JobSpecError> {
        if let Some(dir) = &params.staging_directory {
            if !self.issued.insert(dir.clone()) {
                tracing::warn!(staging_directory = %dir, "Staging directory reused by caller");
            }
            return Ok(dir.clone());
        }
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.prj_ref().generate_id();
            if !id.is_empty() && self.issued.insert(id.clone()) {
                return Ok(id);
            }
        }
        Err(JobSpecError::invalid(
            "staging_directory",
            "identifier source keeps returning issued values",
        ))
    }

    fn job_name(&self, mode: DesignMode) -> String {
        let now = Local::now();
        match self.defaults.naming {
            JobNaming::Unique => format!(
                "{}{}-{}",
                mode.job_kind(),
                now.format("%Y%m%d"),
                self.prj_ref().generate_id()
            ),
            JobNaming::Timestamp => format!("{}{}", mode.job_kind(), now.format("%Y%m%d%s")),
        }
    }
}

fn require(field: &str, value: &str) -> Result<(), JobSpecError> {
    if value.trim().is_empty() {
        return Err(JobSpecError::invalid(field, "must not be empty"));
    }
    Ok(())
}

fn check_resources(resources: &ResourceRequest) -> Result<(), JobSpecError> {
    if resources.cpu == 0 {
        return Err(JobSpecError::invalid("resources.cpu", "must be positive"));
    }
    if resources.memory == 0 {
        return Err(JobSpecError::invalid("resources.memory", "must be positive"));
    }
    Ok(())
}

fn flag_name() -> &'static Regex {
    static FLAG_NAME: OnceLock<Regex> = OnceLock::new();
    FLAG_NAME.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.\-]*$").expect("valid flag-name regex")
    })
}
