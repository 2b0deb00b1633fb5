pub mod ioc;
pub mod service;
