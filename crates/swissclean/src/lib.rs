//! Backend for the company website: quote estimation and lead intake.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
