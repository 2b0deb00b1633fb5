use domain::model::{entity::DesignMode, vo::JobParams};
use serde::Deserialize;

/// 设计作业请求
#[derive(Debug, Deserialize)]
#[serde(tag = "mode", content = "params", rename_all = "lowercase")]
pub enum DesignRequest {
    /// 结构幻觉
    Hallucinate(JobParams),
    /// 结构修补
    Inpaint(JobParams),
}

/// A request file holds one request or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RequestDocument {
    One(DesignRequest),
    Many(Vec<DesignRequest>),
}

impl DesignRequest {
    pub fn mode(&self) -> DesignMode {
        match self {
            Self::Hallucinate(_) => DesignMode::Hallucinate,
            Self::Inpaint(_) => DesignMode::Inpaint,
        }
    }

    pub fn params(&self) -> &JobParams {
        match self {
            Self::Hallucinate(params) | Self::Inpaint(params) => params,
        }
    }
}

impl RequestDocument {
    pub fn into_requests(self) -> Vec<DesignRequest> {
        match self {
            Self::One(request) => vec![request],
            Self::Many(requests) => requests,
        }
    }
}
