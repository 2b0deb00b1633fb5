pub mod job;
pub mod mode;

#[rustfmt::skip]
pub use self::{
    job::{JobSpec, ResolvedParams},
    mode::DesignMode,
};
