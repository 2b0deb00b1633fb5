use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_JOB_DEFINITION: &str = "RFDesignJobDefinition";

/// 作业资源请求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRequest {
    /// 核心数
    pub cpu: u32,
    /// 内存 (GiB)
    pub memory: u32,
    /// GPU 数量
    pub gpu: u32,
}

impl Default for ResourceRequest {
    fn default() -> Self {
        Self {
            cpu: 4,
            memory: 16,
            gpu: 1,
        }
    }
}

/// Value of a tool flag, rendered as `--key=value`.
///
/// Numbers keep their JSON rendering, so `1.0` stays `1.0` and integers
/// beyond `i64` stay exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(x) => write!(f, "{x}"),
            Self::Number(x) => write!(f, "{x}"),
            Self::Text(x) => f.write_str(x),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

/// Non-finite floats have no JSON number form and are kept as text.
impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        match serde_json::Number::from_f64(value) {
            Some(number) => Self::Number(number),
            None => Self::Text(value.to_string()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// How a job name is generated when the caller gives none.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobNaming {
    /// `{kind}{date}-{random id}`
    #[default]
    Unique,
    /// `{kind}{date}{unix seconds}`, collides for jobs created in the same second.
    Timestamp,
}

/// What the container-override sink receives for one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerOverrides {
    pub command: Vec<String>,
    pub resources: ResourceRequest,
}
