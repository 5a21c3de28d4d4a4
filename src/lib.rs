/// Basic application code
pub mod app;
/// REST clients for the intake endpoint
pub mod client;
/// Controllers for REST endpoints
pub mod controller;
/// Domain objects
pub mod domain;
/// Error enums
pub mod error;
/// Submission form state for the scheduling dialog
pub mod form;
/// Submission records
pub mod model;
/// Repositories
pub mod repo;
/// Application settings
pub mod settings;
/// Application telemetry for tracing and logging
pub mod telemetry;
