pub mod auth_service;
pub mod resource_service;

pub use resource_service::*;
