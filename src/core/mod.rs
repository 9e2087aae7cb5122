// src/core/mod.rs
//! Outbound services

pub mod service_client;

pub use service_client::{EvaluationService, ServiceClient, EVALUATE_ENDPOINT};
