pub mod payload;
pub mod request;

#[rustfmt::skip]
pub use self::{
    payload::*,
    request::*,
};
