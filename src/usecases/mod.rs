//! Application use cases. Orchestrate domain logic via ports.

pub mod status_service;

pub use status_service::StatusService;
