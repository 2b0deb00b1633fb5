pub mod job;

pub mod prelude {
    #[rustfmt::skip]
    pub use super::{
        job::{JobDefaults, JobSpecBuilder, JobSpecBuilderState},
    };
}
