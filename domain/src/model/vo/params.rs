use std::collections::BTreeMap;

use serde::Deserialize;
use typed_builder::TypedBuilder;

use super::job::{ParamValue, ResourceRequest};

/// Caller-supplied parameters of one design job.
///
/// `None` overrides are filled in by the builder; every construction gets its
/// own `extra_parameters` map.
#[derive(Debug, Clone, PartialEq, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct JobParams {
    /// 设计目标
    #[builder(setter(into))]
    pub target_id: String,
    /// 输入对象存储地址
    #[builder(setter(into))]
    pub input_location: String,
    /// 输出对象存储地址
    #[builder(setter(into))]
    pub output_location: String,
    /// 结构模板文件，相对于输入目录
    #[builder(setter(into))]
    pub template_reference: String,
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    pub staging_directory: Option<String>,
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    pub job_identity: Option<String>,
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    pub job_definition: Option<String>,
    /// Weights directory or checkpoint file, depending on the mode.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    pub artifact_path: Option<String>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    pub resources: Option<ResourceRequest>,
    #[serde(default)]
    #[builder(default)]
    pub extra_parameters: BTreeMap<String, ParamValue>,
}
