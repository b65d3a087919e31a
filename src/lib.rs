pub mod context;
pub mod models;
pub mod service;

pub use crate::context::Context;
pub use crate::models::{StartResponse, SERVICE_NAME, STATUS_READY};
pub use crate::service::start;
