use std::collections::BTreeMap;

use serde::Serialize;

use super::DesignMode;
use crate::model::vo::{ParamValue, ResourceRequest};

/// Job parameters with every default already filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedParams {
    pub target_id: String,
    pub input_location: String,
    pub output_location: String,
    pub template_reference: String,
    /// 作业暂存目录
    pub staging_directory: String,
    pub job_name: String,
    pub job_definition: String,
    pub artifact_path: String,
    pub extra_parameters: BTreeMap<String, ParamValue>,
    pub resources: ResourceRequest,
}

/// A fully derived batch job. The command is computed once in [`JobSpec::new`]
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSpec {
    mode: DesignMode,
    #[serde(flatten)]
    params: ResolvedParams,
    command: Vec<String>,
}

impl JobSpec {
    pub fn new(mode: DesignMode, params: ResolvedParams) -> Self {
        let command = derive_command(mode, &params);
        Self {
            mode,
            params,
            command,
        }
    }

    pub fn mode(&self) -> DesignMode {
        self.mode
    }

    pub fn target_id(&self) -> &str {
        &self.params.target_id
    }

    pub fn staging_directory(&self) -> &str {
        &self.params.staging_directory
    }

    pub fn job_name(&self) -> &str {
        &self.params.job_name
    }

    pub fn job_definition(&self) -> &str {
        &self.params.job_definition
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }

    pub fn resources(&self) -> ResourceRequest {
        self.params.resources
    }
}

fn derive_command(mode: DesignMode, params: &ResolvedParams) -> Vec<String> {
    let staging = &params.staging_directory;
    let output = match params.output_location.ends_with('/') {
        true => params.output_location.clone(),
        false => format!("{}/", params.output_location),
    };
    let mut command = vec![
        format!("-i {}:{staging}/input/", params.input_location),
        format!("-o {staging}/output/:{output}"),
        mode.tool().to_owned(),
        format!("--pdb={staging}/input/{}", params.template_reference),
        format!("--out={staging}/predictions/output"),
        format!("--{}={}", mode.artifact_flag(), params.artifact_path),
    ];
    command.extend(params.extra_parameters.iter().map(|(key, value)| format!("--{key}={value}")));
    command
}
