//! Calculation microservice: arithmetic over HTTP for the Keystone frontends.
pub mod config;
pub mod handlers;
pub mod models;
pub mod startup;

/// Wire-level service identifier reported in status payloads.
/// Downstream dashboard clients key on this exact value.
pub const SERVICE_NAME: &str = "python-services";
