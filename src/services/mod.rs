//! Registry services.
//!
//! Services contain the registry rules separated from HTTP handlers.
//! They validate input, enforce preconditions and translate store results.

pub mod sample_service;
pub mod subscription_service;
pub mod user_service;
