use crate::model::{
    entity::{DesignMode, JobSpec},
    vo::JobParams,
};
use crate::JobSpecError;

pub trait JobSpecService {
    /// Validate `params`, fill in defaults, derive the command and forward it
    /// as container overrides.
    fn construct(&self, mode: DesignMode, params: &JobParams) -> Result<JobSpec, JobSpecError>;
}
