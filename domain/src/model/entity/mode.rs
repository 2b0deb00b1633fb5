use serde::{Deserialize, Serialize};

/// The two design modes of the RFDesign tool.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DesignMode {
    /// 结构幻觉
    Hallucinate,
    /// 结构修补
    Inpaint,
}

impl DesignMode {
    /// Prefix of generated job names.
    pub const fn job_kind(self) -> &'static str {
        match self {
            Self::Hallucinate => "RFDesignHallucinateJob",
            Self::Inpaint => "RFDesignInpaintingJob",
        }
    }

    /// Tool invocation token placed after the transfer directives.
    pub const fn tool(self) -> &'static str {
        match self {
            Self::Hallucinate => "python hallucination/hallucinate.py",
            Self::Inpaint => "python inpainting/inpaint.py",
        }
    }

    /// Flag carrying the model artifact path.
    pub const fn artifact_flag(self) -> &'static str {
        match self {
            Self::Hallucinate => "weights_dir",
            Self::Inpaint => "checkpoint",
        }
    }

    pub const fn default_artifact_path(self) -> &'static str {
        match self {
            Self::Hallucinate => "/database/rfdesign_params/hallucination",
            Self::Inpaint => "/database/rfdesign_params/inpainting/BFF_mix_epoch25.pt",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::DesignMode;

    #[test]
    fn modes_do_not_share_artifacts() {
        assert_ne!(
            DesignMode::Hallucinate.artifact_flag(),
            DesignMode::Inpaint.artifact_flag()
        );
        assert_ne!(
            DesignMode::Hallucinate.default_artifact_path(),
            DesignMode::Inpaint.default_artifact_path()
        );
        for mode in DesignMode::iter() {
            assert!(mode.tool().starts_with("python "));
            assert!(mode.job_kind().starts_with("RFDesign"));
        }
    }

    #[test]
    fn display_matches_serde_tag() {
        for mode in DesignMode::iter() {
            let tag = serde_json::to_string(&mode).unwrap();
            assert_eq!(tag, format!("\"{mode}\""));
        }
    }
}
